use crate::error::StrideError;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_MIN_DISTANCE: usize = 1;
pub const DEFAULT_MAX_DISTANCE: usize = 100;
pub const DEFAULT_PARAGRAPH_LENGTH: usize = 200;
pub const DEFAULT_CONTEXT_RADIUS: usize = 20;
pub const DEFAULT_PLAIN_TEXT_WINDOW: usize = 3;

/// Tunables for one search run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Smallest stride scanned (inclusive, at least 1).
    pub min_distance: usize,
    /// Largest stride scanned (inclusive).
    pub max_distance: usize,
    /// Maximum length of the hidden paragraph around a match.
    pub paragraph_length: usize,
    /// Characters of original text shown on each side of a matched letter.
    /// A window holds up to `2 * context_radius + 1` characters: the
    /// radius before, the letter's own position, and the radius after.
    pub context_radius: usize,
    /// Stride-1 matches are rejected when the phrase appears literally within
    /// `plain_text_window * phrase_len` letters read from the start cell.
    pub plain_text_window: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            min_distance: DEFAULT_MIN_DISTANCE,
            max_distance: DEFAULT_MAX_DISTANCE,
            paragraph_length: DEFAULT_PARAGRAPH_LENGTH,
            context_radius: DEFAULT_CONTEXT_RADIUS,
            plain_text_window: DEFAULT_PLAIN_TEXT_WINDOW,
        }
    }
}

impl SearchParams {
    pub fn with_distances(min_distance: usize, max_distance: usize) -> Self {
        Self {
            min_distance,
            max_distance,
            ..Default::default()
        }
    }

    /// Reject parameter combinations before any scanning starts.
    pub fn validate(&self) -> Result<(), StrideError> {
        if self.min_distance < 1 {
            return Err(StrideError::InvalidParameters(
                "min_distance must be at least 1".into(),
            ));
        }
        if self.max_distance < self.min_distance {
            return Err(StrideError::InvalidParameters(format!(
                "max_distance ({}) must not be smaller than min_distance ({})",
                self.max_distance, self.min_distance
            )));
        }
        if self.plain_text_window < 1 {
            return Err(StrideError::InvalidParameters(
                "plain_text_window must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Load search parameters from a JSON file. Missing fields take defaults.
pub fn load_params(path: &Path) -> Result<SearchParams, StrideError> {
    let content = std::fs::read_to_string(path).map_err(|e| StrideError::ConfigLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_params_str(&content).map_err(|e| match e {
        StrideError::Json(e) => StrideError::ConfigLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        },
        other => other,
    })
}

/// Parse search parameters from a JSON string (no file path context).
pub fn parse_params_str(json: &str) -> Result<SearchParams, StrideError> {
    let params: SearchParams = serde_json::from_str(json)?;
    params.validate()?;
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let params = SearchParams::default();
        assert_eq!(params.min_distance, 1);
        assert_eq!(params.max_distance, 100);
        assert_eq!(params.paragraph_length, 200);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let params = parse_params_str(r#"{ "max_distance": 40 }"#).unwrap();
        assert_eq!(params.max_distance, 40);
        assert_eq!(params.min_distance, 1);
        assert_eq!(params.context_radius, 20);
    }

    #[test]
    fn test_zero_min_distance_rejected() {
        let err = SearchParams::with_distances(0, 5).validate().unwrap_err();
        assert!(matches!(err, StrideError::InvalidParameters(_)));
    }

    #[test]
    fn test_inverted_range_rejected() {
        assert!(parse_params_str(r#"{ "min_distance": 10, "max_distance": 3 }"#).is_err());
    }

    #[test]
    fn test_load_params_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        std::fs::write(&path, "{ not json").unwrap();
        match load_params(&path) {
            Err(StrideError::ConfigLoad { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected ConfigLoad, got {other:?}"),
        }
    }

    #[test]
    fn test_load_params_validates_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        std::fs::write(&path, r#"{ "min_distance": 0 }"#).unwrap();
        let err = load_params(&path).unwrap_err();
        assert!(matches!(err, StrideError::InvalidParameters(_)));
    }
}
