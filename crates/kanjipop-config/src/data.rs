use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_frequency_csv() -> PathBuf {
    PathBuf::from("data/term_frequencies_with_definitions.csv")
}

fn default_kanji_summary_csv() -> PathBuf {
    PathBuf::from("data/kanji_summary_stories.csv")
}

/// Locations of the tabular sources read at the start of every run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    #[serde(default = "default_frequency_csv")]
    pub frequency_csv: PathBuf,
    #[serde(default = "default_kanji_summary_csv")]
    pub kanji_summary_csv: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            frequency_csv: default_frequency_csv(),
            kanji_summary_csv: default_kanji_summary_csv(),
        }
    }
}
