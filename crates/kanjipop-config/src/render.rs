use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

fn default_number_of_example_vocab() -> usize {
    5
}

fn default_example_vocab_frequency_cutoff() -> i64 {
    100_000
}

/// Which popup markup to emit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderProfile {
    /// Pick `Extended` when the summary source has keyword/story columns
    #[default]
    Auto,
    /// Keyword and story rows, script-driven `[+]` toggles
    Extended,
    /// Older schema: no keyword/story rows, native `<details>` toggles
    Basic,
}

impl RenderProfile {
    /// Resolve `Auto` against the capability of the loaded summary table
    pub fn resolve(self, extended_fields_present: bool) -> Self {
        match self {
            RenderProfile::Auto if extended_fields_present => RenderProfile::Extended,
            RenderProfile::Auto => RenderProfile::Basic,
            other => other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RenderProfile::Auto => "auto",
            RenderProfile::Extended => "extended",
            RenderProfile::Basic => "basic",
        }
    }
}

impl fmt::Display for RenderProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(RenderProfile::Auto),
            "extended" => Ok(RenderProfile::Extended),
            "basic" => Ok(RenderProfile::Basic),
            other => Err(format!(
                "unknown render profile '{other}' (expected auto, extended or basic)"
            )),
        }
    }
}

/// Example-word selection and markup options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Top-N cap for example words per kanji
    #[serde(
        alias = "number_of_examples",
        default = "default_number_of_example_vocab"
    )]
    pub number_of_example_vocab: usize,
    /// Inclusive max frequency rank for an example word
    #[serde(
        alias = "example_frequency_cutoff",
        default = "default_example_vocab_frequency_cutoff"
    )]
    pub example_vocab_frequency_cutoff: i64,
    #[serde(default)]
    pub render_profile: RenderProfile,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            number_of_example_vocab: default_number_of_example_vocab(),
            example_vocab_frequency_cutoff: default_example_vocab_frequency_cutoff(),
            render_profile: RenderProfile::default(),
        }
    }
}
