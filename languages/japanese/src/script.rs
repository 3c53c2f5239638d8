use std::collections::BTreeSet;

/// CJK Unified Ideographs block as used for kanji detection (U+4E00..=U+9FAF)
pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FAF}').contains(&c)
}

/// Kanji in left-to-right order, duplicates kept
pub fn kanji_in(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().filter(|c| is_kanji(*c))
}

/// Distinct kanji in code-point order
pub fn distinct_kanji(text: &str) -> BTreeSet<char> {
    kanji_in(text).collect()
}
