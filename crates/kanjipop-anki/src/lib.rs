mod client;
mod collection;

pub use client::{AnkiConnectClient, FieldInfo, NoteInfo};
pub use collection::{AnkiCollection, deck_query, note_from_info};
