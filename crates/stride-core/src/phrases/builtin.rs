use crate::error::StrideError;
use crate::phrases::schema::PhraseSetDef;

const CLASSIC_JSON: &str = include_str!("../../../../phrases/classic.json");
const CIPHER_JSON: &str = include_str!("../../../../phrases/cipher.json");

/// Available predefined phrase sets.
pub const PRESETS: &[&str] = &["classic", "cipher"];

/// Preset used when a scan names no phrases at all.
pub const DEFAULT_PRESET: &str = "classic";

/// Load a predefined phrase set by name.
pub fn load_preset(name: &str) -> Result<PhraseSetDef, StrideError> {
    let json = match name {
        "classic" => CLASSIC_JSON,
        "cipher" => CIPHER_JSON,
        _ => {
            return Err(StrideError::PhraseSetInvalid(format!(
                "unknown preset '{}'. Available: {}",
                name,
                PRESETS.join(", ")
            )))
        }
    };
    let set: PhraseSetDef = serde_json::from_str(json)?;
    Ok(set)
}
