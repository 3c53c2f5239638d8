use serde::{Deserialize, Serialize};

fn default_anki_url() -> String {
    "http://localhost:8765".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnkiConfig {
    /// AnkiConnect URL
    #[serde(default = "default_anki_url")]
    pub anki_url: String,
}

impl Default for AnkiConfig {
    fn default() -> Self {
        Self {
            anki_url: default_anki_url(),
        }
    }
}
