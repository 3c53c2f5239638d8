use std::sync::Arc;

use kanjipop_types::FrequencyEntry;

/// Pick the example words for one kanji: entries ranked at or below
/// `cutoff`, most common first, at most `top_n`. Entries without a rank
/// never qualify.
pub fn select_examples(
    entries: &[Arc<FrequencyEntry>],
    top_n: usize,
    cutoff: i64,
) -> Vec<Arc<FrequencyEntry>> {
    let mut selected: Vec<_> = entries
        .iter()
        .filter(|e| matches!(e.frequency, Some(f) if f <= cutoff))
        .cloned()
        .collect();
    selected.sort_by_key(|e| e.rank_key());
    selected.truncate(top_n);
    selected
}
