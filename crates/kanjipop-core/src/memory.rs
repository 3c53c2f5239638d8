use std::collections::BTreeMap;

use anyhow::Context;
use tokio::sync::RwLock;

use crate::collection::{Note, NoteCollection, NoteId};

/// Collection kept entirely in memory, used for offline runs and tests
#[derive(Default)]
pub struct InMemoryCollection {
    decks: BTreeMap<String, Vec<NoteId>>,
    notes: RwLock<BTreeMap<NoteId, Note>>,
    updates: RwLock<usize>,
}

impl InMemoryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_deck(&mut self, deck: &str) {
        self.decks.entry(deck.to_string()).or_default();
    }

    pub fn add_note(&mut self, deck: &str, note: Note) {
        self.decks.entry(deck.to_string()).or_default().push(note.id);
        self.notes.get_mut().insert(note.id, note);
    }

    pub async fn note(&self, id: NoteId) -> Option<Note> {
        self.notes.read().await.get(&id).cloned()
    }

    /// Number of `update_note` calls received
    pub async fn update_count(&self) -> usize {
        *self.updates.read().await
    }
}

#[async_trait::async_trait]
impl NoteCollection for InMemoryCollection {
    async fn deck_exists(&self, deck: &str) -> anyhow::Result<bool> {
        Ok(self.decks.contains_key(deck))
    }

    async fn find_notes(&self, deck: &str) -> anyhow::Result<Vec<NoteId>> {
        Ok(self.decks.get(deck).cloned().unwrap_or_default())
    }

    async fn get_note(&self, id: NoteId) -> anyhow::Result<Note> {
        self.notes
            .read()
            .await
            .get(&id)
            .cloned()
            .with_context(|| format!("note {id} not found"))
    }

    async fn update_note(&self, note: &Note) -> anyhow::Result<()> {
        let mut notes = self.notes.write().await;
        let stored = notes
            .get_mut(&note.id)
            .with_context(|| format!("note {} not found", note.id))?;
        *stored = note.clone();
        *self.updates.write().await += 1;
        Ok(())
    }
}
