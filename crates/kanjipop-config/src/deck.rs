use serde::{Deserialize, Serialize};

fn default_field_to_process() -> String {
    "Expression".to_string()
}

fn default_destination_field_name() -> String {
    "KanjiInfo".to_string()
}

fn default_deck_to_process() -> String {
    "Mining".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Note field holding the vocabulary expression
    #[serde(default = "default_field_to_process")]
    pub field_to_process: String,
    /// Note field receiving the rendered popup bundle
    #[serde(default = "default_destination_field_name")]
    pub destination_field_name: String,
    #[serde(default = "default_deck_to_process")]
    pub deck_to_process: String,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            field_to_process: default_field_to_process(),
            destination_field_name: default_destination_field_name(),
            deck_to_process: default_deck_to_process(),
        }
    }
}
