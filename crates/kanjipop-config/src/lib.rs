use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use self::anki::AnkiConfig;
pub use self::data::DataConfig;
pub use self::deck::DeckConfig;
pub use self::render::{RenderConfig, RenderProfile};

pub mod anki;
pub mod data;
pub mod deck;
pub mod render;

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Run configuration. Keys stay flat on disk, matching the add-on's
/// `config.json`, so the sections are flattened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(flatten)]
    pub render: RenderConfig,
    #[serde(flatten)]
    pub deck: DeckConfig,
    #[serde(flatten)]
    pub data: DataConfig,
    #[serde(flatten)]
    pub anki: AnkiConfig,
}

impl Config {
    /// Defaults, overlaid with the JSON file (explicit path, or
    /// `config.json` when it exists) and then the environment. Not validated
    /// here: callers run `validate` once their own overrides are applied.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => {
                tracing::debug!("No config file found, using defaults");
                Self::default()
            }
        };

        config.apply_env();
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!("Loading config from {}", path.display());
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Override from `KANJIPOP_*` environment variables
    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| env::var(key).ok());
    }

    pub fn apply_env_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(deck) = lookup("KANJIPOP_DECK") {
            self.deck.deck_to_process = deck;
        }
        if let Some(field) = lookup("KANJIPOP_SOURCE_FIELD") {
            self.deck.field_to_process = field;
        }
        if let Some(field) = lookup("KANJIPOP_DEST_FIELD") {
            self.deck.destination_field_name = field;
        }
        if let Some(top_n) = lookup("KANJIPOP_TOP_N").and_then(|v| v.parse().ok()) {
            self.render.number_of_example_vocab = top_n;
        }
        if let Some(cutoff) = lookup("KANJIPOP_CUTOFF").and_then(|v| v.parse().ok()) {
            self.render.example_vocab_frequency_cutoff = cutoff;
        }
        if let Some(profile) = lookup("KANJIPOP_PROFILE").and_then(|v| v.parse().ok()) {
            self.render.render_profile = profile;
        }
        if let Some(url) = lookup("KANJIPOP_ANKI_URL") {
            self.anki.anki_url = url;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let names = [
            ("field_to_process", &self.deck.field_to_process),
            ("destination_field_name", &self.deck.destination_field_name),
            ("deck_to_process", &self.deck.deck_to_process),
        ];
        for (key, value) in names {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{key} must not be empty")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults_match_addon() {
        let config = Config::default();
        assert_eq!(config.render.number_of_example_vocab, 5);
        assert_eq!(config.render.example_vocab_frequency_cutoff, 100_000);
        assert_eq!(config.render.render_profile, RenderProfile::Auto);
        assert_eq!(config.deck.field_to_process, "Expression");
        assert_eq!(config.deck.destination_field_name, "KanjiInfo");
        assert_eq!(config.deck.deck_to_process, "Mining");
        assert_eq!(config.anki.anki_url, "http://localhost:8765");
    }

    #[test]
    fn test_flat_keys_and_partial_file() {
        let config: Config = serde_json::from_str(
            r#"{ "number_of_example_vocab": 3, "deck_to_process": "Core2k" }"#,
        )
        .unwrap();
        assert_eq!(config.render.number_of_example_vocab, 3);
        assert_eq!(config.render.example_vocab_frequency_cutoff, 100_000);
        assert_eq!(config.deck.deck_to_process, "Core2k");
        assert_eq!(config.deck.field_to_process, "Expression");
    }

    #[test]
    fn test_variant_key_aliases() {
        let config: Config = serde_json::from_str(
            r#"{ "number_of_examples": 8, "example_frequency_cutoff": 20000, "render_profile": "basic" }"#,
        )
        .unwrap();
        assert_eq!(config.render.number_of_example_vocab, 8);
        assert_eq!(config.render.example_vocab_frequency_cutoff, 20_000);
        assert_eq!(config.render.render_profile, RenderProfile::Basic);
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("KANJIPOP_DECK", "Sentences"),
            ("KANJIPOP_TOP_N", "2"),
            ("KANJIPOP_CUTOFF", "not-a-number"),
            ("KANJIPOP_PROFILE", "extended"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_env_with(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.deck.deck_to_process, "Sentences");
        assert_eq!(config.render.number_of_example_vocab, 2);
        // unparsable values leave the previous setting alone
        assert_eq!(config.render.example_vocab_frequency_cutoff, 100_000);
        assert_eq!(config.render.render_profile, RenderProfile::Extended);
    }

    #[test]
    fn test_validate_rejects_blank_names() {
        let mut config = Config::default();
        config.deck.destination_field_name = "  ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_load_leaves_validation_to_caller() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "deck_to_process": "" }}"#).unwrap();

        let mut config = Config::load(Some(file.path())).unwrap();
        assert!(config.validate().is_err());

        config.deck.deck_to_process = "Mining".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "field_to_process": "Word" }}"#).unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.deck.field_to_process, "Word");

        let missing = Config::from_file(Path::new("does/not/exist.json"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_profile_resolution() {
        assert_eq!(RenderProfile::Auto.resolve(true), RenderProfile::Extended);
        assert_eq!(RenderProfile::Auto.resolve(false), RenderProfile::Basic);
        assert_eq!(RenderProfile::Basic.resolve(true), RenderProfile::Basic);
        assert!("fancy".parse::<RenderProfile>().is_err());
    }
}
