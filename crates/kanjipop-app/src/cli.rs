use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use kanjipop_config::{Config, RenderProfile};

#[derive(Debug, Parser)]
#[command(name = "kanjipop", version, about = "Add kanji popup info to Anki notes")]
pub struct Cli {
    /// JSON config file (defaults to ./config.json when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(flatten)]
    pub overrides: Overrides,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write popup info into every note of the deck (default)
    Process,
    /// Print the field content for one expression without touching Anki
    Render { expression: String },
}

/// Command-line overrides, applied on top of file and environment
#[derive(Debug, Default, Args)]
pub struct Overrides {
    #[arg(long, global = true)]
    pub deck: Option<String>,
    #[arg(long, global = true)]
    pub source_field: Option<String>,
    #[arg(long, global = true)]
    pub dest_field: Option<String>,
    /// Example words per kanji
    #[arg(long, global = true)]
    pub top_n: Option<usize>,
    /// Inclusive max frequency rank of example words
    #[arg(long, global = true)]
    pub cutoff: Option<i64>,
    /// auto, extended or basic
    #[arg(long, global = true)]
    pub profile: Option<RenderProfile>,
    #[arg(long, global = true)]
    pub frequency_csv: Option<PathBuf>,
    #[arg(long, global = true)]
    pub summary_csv: Option<PathBuf>,
    #[arg(long, global = true)]
    pub anki_url: Option<String>,
}

impl Overrides {
    pub fn apply(&self, config: &mut Config) {
        if let Some(deck) = &self.deck {
            config.deck.deck_to_process = deck.clone();
        }
        if let Some(field) = &self.source_field {
            config.deck.field_to_process = field.clone();
        }
        if let Some(field) = &self.dest_field {
            config.deck.destination_field_name = field.clone();
        }
        if let Some(top_n) = self.top_n {
            config.render.number_of_example_vocab = top_n;
        }
        if let Some(cutoff) = self.cutoff {
            config.render.example_vocab_frequency_cutoff = cutoff;
        }
        if let Some(profile) = self.profile {
            config.render.render_profile = profile;
        }
        if let Some(path) = &self.frequency_csv {
            config.data.frequency_csv = path.clone();
        }
        if let Some(path) = &self.summary_csv {
            config.data.kanji_summary_csv = path.clone();
        }
        if let Some(url) = &self.anki_url {
            config.anki.anki_url = url.clone();
        }
    }
}
