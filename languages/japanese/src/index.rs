use std::collections::BTreeMap;
use std::sync::Arc;

use kanjipop_types::{FrequencyEntry, FrequencyTable};

use crate::script::distinct_kanji;

/// Inverted index from each kanji to the words containing it, most common first
#[derive(Debug, Default, Clone)]
pub struct KanjiIndex {
    words: BTreeMap<char, Vec<Arc<FrequencyEntry>>>,
}

impl KanjiIndex {
    /// Build from the frequency table. Each entry is listed once per distinct
    /// kanji in its term; lists are stable-sorted by frequency rank.
    pub fn build(table: &FrequencyTable) -> Self {
        let mut words: BTreeMap<char, Vec<Arc<FrequencyEntry>>> = BTreeMap::new();

        for (_, entries) in table.iter() {
            for entry in entries {
                for kanji in distinct_kanji(&entry.term) {
                    words.entry(kanji).or_default().push(Arc::clone(entry));
                }
            }
        }

        for list in words.values_mut() {
            list.sort_by_key(|e| e.rank_key());
        }

        tracing::debug!("Indexed {} kanji", words.len());
        Self { words }
    }

    /// Words containing `kanji`; empty when the kanji never occurs
    pub fn get(&self, kanji: char) -> &[Arc<FrequencyEntry>] {
        self.words.get(&kanji).map(Vec::as_slice).unwrap_or_default()
    }

    /// Kanji in code-point order with their word lists
    pub fn iter_sorted(&self) -> impl Iterator<Item = (char, &[Arc<FrequencyEntry>])> {
        self.words.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
