use std::cell::RefCell;

use kanjipop_config::DeckConfig;
use kanjipop_core::{HostUi, InMemoryCollection, Note, NoteId};
use kanjipop_lang_japanese::{KanjiData, RenderOptions};
use kanjipop_types::{FrequencyEntry, FrequencyTable, KanjiSummary, KanjiSummaryTable};

use crate::deck::{ProcessReport, process_deck};

#[derive(Default)]
struct RecordingHost {
    messages: RefCell<Vec<String>>,
    progress: RefCell<Vec<(usize, usize)>>,
}

impl HostUi for RecordingHost {
    fn report_progress(&self, current: usize, total: usize) {
        self.progress.borrow_mut().push((current, total));
    }

    fn show_message(&self, text: &str) {
        self.messages.borrow_mut().push(text.to_string());
    }
}

fn kanji_data() -> KanjiData {
    let frequency: FrequencyTable = [
        FrequencyEntry::new("日本", "にほん", 15),
        FrequencyEntry::new("本", "ほん", 40),
    ]
    .into_iter()
    .collect();

    let mut summaries = KanjiSummaryTable::new();
    summaries.insert(
        '日',
        KanjiSummary {
            meaning: "day".to_string(),
            ..KanjiSummary::default()
        },
    );
    KanjiData::new(frequency, summaries)
}

fn mining_deck() -> InMemoryCollection {
    let mut collection = InMemoryCollection::new();
    collection.add_note(
        "Mining",
        Note::with_fields(NoteId(1), [("Expression", "日本"), ("KanjiInfo", "")]),
    );
    collection.add_note(
        "Mining",
        Note::with_fields(NoteId(2), [("Expression", "ひらがな"), ("KanjiInfo", "old")]),
    );
    collection.add_note(
        "Mining",
        Note::with_fields(NoteId(3), [("Expression", "本"), ("Notes", "")]),
    );
    collection.add_note("Mining", Note::with_fields(NoteId(4), [("KanjiInfo", "old")]));
    collection
}

#[tokio::test]
async fn test_updates_only_notes_with_kanji_and_destination() {
    let collection = mining_deck();
    let host = RecordingHost::default();

    let report = process_deck(
        &collection,
        &host,
        &kanji_data(),
        &DeckConfig::default(),
        &RenderOptions::default(),
    )
    .await
    .unwrap();

    assert_eq!(report, ProcessReport::Completed { updated: 1, scanned: 4 });
    assert_eq!(collection.update_count().await, 1);

    let updated = collection.note(NoteId(1)).await.unwrap();
    let field = updated.get("KanjiInfo").unwrap();
    assert!(field.starts_with("<div class=\"kanji-popup\">"));
    assert!(field.contains("id=\"popup-日\""));
    assert!(field.contains("id=\"popup-本\""));

    // no kanji, missing source field, missing destination: left untouched
    assert_eq!(
        collection.note(NoteId(2)).await.unwrap().get("KanjiInfo"),
        Some("old")
    );
    assert_eq!(
        collection.note(NoteId(4)).await.unwrap().get("KanjiInfo"),
        Some("old")
    );
    assert!(!collection.note(NoteId(3)).await.unwrap().has_field("KanjiInfo"));

    assert_eq!(
        host.messages.borrow().as_slice(),
        ["Updated 1 notes with kanji popup info.".to_string()]
    );
    assert_eq!(
        host.progress.borrow().as_slice(),
        [(0, 4), (1, 4), (2, 4), (3, 4), (4, 4)]
    );
}

#[tokio::test]
async fn test_missing_deck_stops_cleanly() {
    let collection = mining_deck();
    let host = RecordingHost::default();
    let deck = DeckConfig {
        deck_to_process: "Sentences".to_string(),
        ..DeckConfig::default()
    };

    let report = process_deck(
        &collection,
        &host,
        &kanji_data(),
        &deck,
        &RenderOptions::default(),
    )
    .await
    .unwrap();

    assert_eq!(
        report,
        ProcessReport::DeckNotFound {
            deck: "Sentences".to_string()
        }
    );
    assert_eq!(collection.update_count().await, 0);
    assert_eq!(
        host.messages.borrow().as_slice(),
        ["Deck 'Sentences' not found.".to_string()]
    );
    assert!(host.progress.borrow().is_empty());
}

#[tokio::test]
async fn test_empty_deck_reports_zero() {
    let mut collection = InMemoryCollection::new();
    collection.add_deck("Mining");
    let host = RecordingHost::default();

    let report = process_deck(
        &collection,
        &host,
        &kanji_data(),
        &DeckConfig::default(),
        &RenderOptions::default(),
    )
    .await
    .unwrap();

    assert_eq!(report, ProcessReport::Completed { updated: 0, scanned: 0 });
    assert_eq!(host.progress.borrow().as_slice(), [(0, 0)]);
}

#[tokio::test]
async fn test_rerun_is_byte_identical() {
    let collection = mining_deck();
    let host = RecordingHost::default();
    let data = kanji_data();
    let deck = DeckConfig::default();
    let options = RenderOptions::default();

    process_deck(&collection, &host, &data, &deck, &options).await.unwrap();
    let first = collection.note(NoteId(1)).await.unwrap();

    process_deck(&collection, &host, &data, &deck, &options).await.unwrap();
    let second = collection.note(NoteId(1)).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(collection.update_count().await, 2);
}

#[tokio::test]
async fn test_custom_field_names() {
    let mut collection = InMemoryCollection::new();
    collection.add_note(
        "Core",
        Note::with_fields(NoteId(9), [("Word", "外国"), ("Popup", "")]),
    );
    let host = RecordingHost::default();
    let deck = DeckConfig {
        field_to_process: "Word".to_string(),
        destination_field_name: "Popup".to_string(),
        deck_to_process: "Core".to_string(),
    };

    let report = process_deck(
        &collection,
        &host,
        &kanji_data(),
        &deck,
        &RenderOptions::default(),
    )
    .await
    .unwrap();

    assert_eq!(report, ProcessReport::Completed { updated: 1, scanned: 1 });
    let popup = collection.note(NoteId(9)).await.unwrap();
    let field = popup.get("Popup").unwrap();
    assert!(field.contains("showKanjiPopup('外')"));
    assert!(field.contains("showKanjiPopup('国')"));
}
