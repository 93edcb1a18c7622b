pub mod builtin;
pub mod schema;

use crate::error::StrideError;
use crate::text::normalize::normalize_text;
use schema::PhraseSetDef;
use std::path::Path;

/// Load a phrase set from a file.
///
/// `.json` files hold a full `PhraseSetDef`. Anything else is read as a plain
/// list: one phrase per line, blank lines and `#` comments ignored, named
/// after the file stem.
pub fn load_phrase_set(path: &Path) -> Result<PhraseSetDef, StrideError> {
    let content = std::fs::read_to_string(path).map_err(|e| StrideError::PhraseSetLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        parse_phrase_set(&content, path)
    } else {
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "phrases".into());
        let set = parse_phrase_list(&content, &name);
        validate_phrase_set(&set).map_err(|e| StrideError::PhraseSetLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(set)
    }
}

/// Parse a phrase set from a JSON string.
pub fn parse_phrase_set(json: &str, source: &Path) -> Result<PhraseSetDef, StrideError> {
    let set: PhraseSetDef = serde_json::from_str(json).map_err(|e| StrideError::PhraseSetLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_phrase_set(&set)?;
    Ok(set)
}

/// Parse a phrase set from a JSON string (no file path context).
pub fn parse_phrase_set_str(json: &str) -> Result<PhraseSetDef, StrideError> {
    let set: PhraseSetDef = serde_json::from_str(json).map_err(StrideError::Json)?;
    validate_phrase_set(&set)?;
    Ok(set)
}

/// Build a phrase set from a line-oriented list.
pub fn parse_phrase_list(content: &str, name: &str) -> PhraseSetDef {
    let phrases = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();

    PhraseSetDef {
        name: name.to_string(),
        description: None,
        version: "1".into(),
        phrases,
    }
}

/// Validate that a phrase set can be searched.
pub fn validate_phrase_set(set: &PhraseSetDef) -> Result<(), StrideError> {
    if set.name.trim().is_empty() {
        return Err(StrideError::PhraseSetInvalid(
            "name must not be empty".into(),
        ));
    }

    if set.phrases.is_empty() {
        return Err(StrideError::PhraseSetInvalid(format!(
            "phrase set '{}' has no phrases",
            set.name
        )));
    }

    if set.phrases.iter().all(|p| normalize_text(p).is_empty()) {
        return Err(StrideError::PhraseSetInvalid(format!(
            "phrase set '{}' has no phrase containing letters",
            set.name
        )));
    }

    Ok(())
}

/// Phrases in the set that normalize to nothing and will be skipped.
pub fn unsearchable_phrases(set: &PhraseSetDef) -> Vec<&str> {
    set.phrases
        .iter()
        .filter(|p| normalize_text(p).is_empty())
        .map(|p| p.as_str())
        .collect()
}
