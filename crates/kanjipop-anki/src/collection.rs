use std::collections::BTreeMap;

use anyhow::Context;
use kanjipop_core::{Note, NoteCollection, NoteField, NoteId};

use crate::client::{AnkiConnectClient, NoteInfo};

/// `NoteCollection` backed by a running AnkiConnect add-on
pub struct AnkiCollection {
    client: AnkiConnectClient,
}

impl AnkiCollection {
    pub fn new(client: AnkiConnectClient) -> Self {
        Self { client }
    }
}

/// Search query selecting every note of a deck
pub fn deck_query(deck: &str) -> String {
    format!("deck:\"{}\"", deck.replace('"', "\\\""))
}

/// Convert AnkiConnect's field map into fields ordered as in the note type
pub fn note_from_info(info: NoteInfo) -> Note {
    let mut fields: Vec<_> = info.fields.into_iter().collect();
    fields.sort_by_key(|(_, field)| field.order);

    Note::new(
        NoteId(info.note_id),
        fields
            .into_iter()
            .map(|(name, field)| NoteField {
                name,
                value: field.value,
            })
            .collect(),
    )
}

#[async_trait::async_trait]
impl NoteCollection for AnkiCollection {
    async fn deck_exists(&self, deck: &str) -> anyhow::Result<bool> {
        let decks = self.client.deck_names().await?;
        Ok(decks.iter().any(|name| name == deck))
    }

    async fn find_notes(&self, deck: &str) -> anyhow::Result<Vec<NoteId>> {
        let ids = self.client.find_notes(&deck_query(deck)).await?;
        tracing::debug!("Deck '{}' has {} notes", deck, ids.len());
        Ok(ids.into_iter().map(NoteId).collect())
    }

    async fn get_note(&self, id: NoteId) -> anyhow::Result<Note> {
        let info = self
            .client
            .notes_info(&[id.0])
            .await?
            .into_iter()
            .next()
            .with_context(|| format!("AnkiConnect returned no info for note {id}"))?;
        Ok(note_from_info(info))
    }

    async fn update_note(&self, note: &Note) -> anyhow::Result<()> {
        let fields: BTreeMap<String, String> = note
            .fields()
            .iter()
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect();
        self.client
            .update_note_fields(note.id.0, &fields)
            .await
            .with_context(|| format!("Failed to update note {}", note.id))
    }
}
