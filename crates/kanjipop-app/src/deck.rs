use kanjipop_config::DeckConfig;
use kanjipop_core::{HostUi, NoteCollection};
use kanjipop_lang_japanese::{KanjiData, RenderOptions};

/// Outcome of one deck run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessReport {
    /// Target deck missing; nothing was touched
    DeckNotFound { deck: String },
    Completed { updated: usize, scanned: usize },
}

/// Render kanji popups into every note of the configured deck.
///
/// Each note gets at most one `update_note` call carrying its fully composed
/// field, so a note is either rewritten completely or left as it was.
pub async fn process_deck(
    collection: &dyn NoteCollection,
    host: &dyn HostUi,
    data: &KanjiData,
    deck: &DeckConfig,
    options: &RenderOptions,
) -> anyhow::Result<ProcessReport> {
    let deck_name = deck.deck_to_process.as_str();

    if !collection.deck_exists(deck_name).await? {
        host.show_message(&format!("Deck '{deck_name}' not found."));
        return Ok(ProcessReport::DeckNotFound {
            deck: deck_name.to_string(),
        });
    }

    let ids = collection.find_notes(deck_name).await?;
    let total = ids.len();
    let mut updated = 0;
    tracing::info!("Processing {} notes in deck '{}'", total, deck_name);

    for (i, id) in ids.into_iter().enumerate() {
        host.report_progress(i, total);
        let mut note = collection.get_note(id).await?;

        let expression = match note.get(&deck.field_to_process) {
            Some(text) => text.to_string(),
            None => {
                tracing::debug!("Note {} has no '{}' field", id, deck.field_to_process);
                String::new()
            }
        };

        let Some(content) = data.render_field(&expression, options) else {
            continue;
        };

        if note.set(&deck.destination_field_name, content) {
            collection.update_note(&note).await?;
            updated += 1;
            tracing::debug!("Updated note {}", id);
        } else {
            tracing::warn!(
                "Note {} has no '{}' field, skipping",
                id,
                deck.destination_field_name
            );
        }
    }
    host.report_progress(total, total);

    host.show_message(&format!("Updated {updated} notes with kanji popup info."));
    tracing::info!("Updated {} of {} notes", updated, total);

    Ok(ProcessReport::Completed {
        updated,
        scanned: total,
    })
}
