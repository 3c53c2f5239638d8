use std::collections::HashMap;

/// Per-character metadata. Empty strings mean "no data".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KanjiSummary {
    pub onyomi: String,
    pub kunyomi: String,
    pub jlpt: String,
    pub meaning: String,
    /// Display string, never parsed
    pub frequency: String,
    pub keyword: String,
    pub story1: String,
    pub story2: String,
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

impl KanjiSummary {
    pub fn keyword(&self) -> Option<&str> {
        non_empty(&self.keyword)
    }

    pub fn story1(&self) -> Option<&str> {
        non_empty(&self.story1)
    }

    pub fn story2(&self) -> Option<&str> {
        non_empty(&self.story2)
    }
}

/// Character -> summary. Re-inserting a character replaces its summary but
/// keeps the position of the first insertion.
#[derive(Debug, Default, Clone)]
pub struct KanjiSummaryTable {
    order: Vec<char>,
    summaries: HashMap<char, KanjiSummary>,
    extended: bool,
}

impl KanjiSummaryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table whose source carried keyword/story columns
    pub fn extended() -> Self {
        Self {
            extended: true,
            ..Self::default()
        }
    }

    pub fn set_extended(&mut self, extended: bool) {
        self.extended = extended;
    }

    /// Whether the source schema had the keyword/story columns
    pub fn is_extended(&self) -> bool {
        self.extended
    }

    pub fn insert(&mut self, kanji: char, summary: KanjiSummary) {
        if self.summaries.insert(kanji, summary).is_none() {
            self.order.push(kanji);
        }
    }

    pub fn get(&self, kanji: char) -> Option<&KanjiSummary> {
        self.summaries.get(&kanji)
    }

    /// Entries in the order characters first appeared in the source
    pub fn iter(&self) -> impl Iterator<Item = (char, &KanjiSummary)> {
        self.order.iter().map(|k| (*k, &self.summaries[k]))
    }

    /// Entries ordered by code point
    pub fn iter_sorted(&self) -> impl Iterator<Item = (char, &KanjiSummary)> {
        let mut keys = self.order.clone();
        keys.sort_unstable();
        keys.into_iter().map(|k| (k, &self.summaries[&k]))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
