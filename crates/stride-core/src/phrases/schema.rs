use serde::{Deserialize, Serialize};

/// A named list of phrases to search for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhraseSetDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Raw phrases; normalization happens at search time.
    pub phrases: Vec<String>,
}
