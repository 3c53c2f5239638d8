use std::collections::HashMap;
use std::sync::Arc;

/// One row of the word frequency source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub term: String,
    pub reading: String,
    /// Rank in the corpus (lower = more common). `None` sorts after every rank.
    pub frequency: Option<i64>,
    pub kana_frequency: Option<i64>,
    pub definitions: String,
}

impl FrequencyEntry {
    pub fn new(term: impl Into<String>, reading: impl Into<String>, frequency: i64) -> Self {
        Self {
            term: term.into(),
            reading: reading.into(),
            frequency: Some(frequency),
            kana_frequency: None,
            definitions: String::new(),
        }
    }

    pub fn with_definitions(mut self, definitions: impl Into<String>) -> Self {
        self.definitions = definitions.into();
        self
    }

    /// Ordering key used everywhere entries are ranked
    pub fn rank_key(&self) -> (bool, i64) {
        match self.frequency {
            Some(f) => (false, f),
            None => (true, 0),
        }
    }
}

/// Term -> homograph entries, in source order
#[derive(Debug, Default, Clone)]
pub struct FrequencyTable {
    groups: Vec<(String, Vec<Arc<FrequencyEntry>>)>,
    by_term: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to its term's group, creating the group on first sight
    pub fn push(&mut self, entry: FrequencyEntry) {
        let entry = Arc::new(entry);
        match self.by_term.get(&entry.term) {
            Some(&slot) => self.groups[slot].1.push(entry),
            None => {
                self.by_term.insert(entry.term.clone(), self.groups.len());
                self.groups.push((entry.term.clone(), vec![entry]));
            }
        }
    }

    pub fn get(&self, term: &str) -> Option<&[Arc<FrequencyEntry>]> {
        self.by_term
            .get(term)
            .map(|&slot| self.groups[slot].1.as_slice())
    }

    /// Groups in the order their term first appeared in the source
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Arc<FrequencyEntry>])> {
        self.groups
            .iter()
            .map(|(term, entries)| (term.as_str(), entries.as_slice()))
    }

    /// Groups ordered by term
    pub fn iter_sorted(&self) -> impl Iterator<Item = (&str, &[Arc<FrequencyEntry>])> {
        let mut groups: Vec<_> = self.iter().collect();
        groups.sort_by(|a, b| a.0.cmp(b.0));
        groups.into_iter()
    }

    pub fn term_count(&self) -> usize {
        self.groups.len()
    }

    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|(_, entries)| entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl FromIterator<FrequencyEntry> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = FrequencyEntry>>(iter: I) -> Self {
        let mut table = Self::new();
        for entry in iter {
            table.push(entry);
        }
        table
    }
}
