use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use kanjipop_anki::{AnkiCollection, AnkiConnectClient};
use kanjipop_config::Config;
use kanjipop_core::HostUi;
use kanjipop_lang_japanese::{KanjiData, RenderOptions};
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod deck;
pub mod host;

#[cfg(test)]
mod tests;

use self::cli::{Cli, Command};
use self::deck::{ProcessReport, process_deck};
use self::host::ConsoleHost;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let host = ConsoleHost;
    match run(cli, &host).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            host.show_message(&format!("Error: {e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(json: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(cli: Cli, host: &dyn HostUi) -> anyhow::Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    cli.overrides.apply(&mut config);
    config.validate()?;

    // Tables are rebuilt on every run
    let (data, _) = KanjiData::load(&config.data)?;
    let options = RenderOptions::from_config(&config.render);

    match cli.command.unwrap_or(Command::Process) {
        Command::Process => {
            let client = AnkiConnectClient::new(config.anki.anki_url.clone());
            let version = client
                .check_connection()
                .await
                .with_context(|| format!("AnkiConnect not reachable at {}", client.base_url()))?;
            tracing::info!("Connected to AnkiConnect v{}", version);

            let collection = AnkiCollection::new(client);
            match process_deck(&collection, host, &data, &config.deck, &options).await? {
                ProcessReport::DeckNotFound { deck } => {
                    tracing::warn!("Deck '{}' not found, nothing updated", deck);
                }
                ProcessReport::Completed { updated, scanned } => {
                    tracing::debug!("Run finished: {}/{} notes updated", updated, scanned);
                }
            }
        }
        Command::Render { expression } => match data.render_field(&expression, &options) {
            Some(html) => println!("{html}"),
            None => host.show_message("Expression contains no kanji."),
        },
    }

    Ok(())
}
