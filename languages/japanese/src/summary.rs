use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use kanjipop_core::LoadError;
use kanjipop_types::{KanjiSummary, KanjiSummaryTable, LoadStats};

use crate::loader::{CsvSource, field};

/// Columns only present in the story-annotated schema
const EXTENDED_COLUMNS: [&str; 3] = ["keyword", "story1", "story2"];

/// Loader for the per-kanji metadata source
pub struct SummaryLoader;

struct Columns {
    character: Option<usize>,
    onyomi: Option<usize>,
    kunyomi: Option<usize>,
    jlpt: Option<usize>,
    meaning: Option<usize>,
    frequency: Option<usize>,
    keyword: Option<usize>,
    story1: Option<usize>,
    story2: Option<usize>,
}

impl SummaryLoader {
    pub fn load_from_file(path: &Path) -> Result<(KanjiSummaryTable, LoadStats), LoadError> {
        tracing::info!("Loading kanji summaries from {}", path.display());
        Self::read(CsvSource::open(path)?)
    }

    pub fn load_from_reader(
        reader: impl Read,
        source_name: &str,
    ) -> Result<(KanjiSummaryTable, LoadStats), LoadError> {
        Self::read(CsvSource::from_reader(reader, source_name)?)
    }

    fn read<R: Read>(source: CsvSource<R>) -> Result<(KanjiSummaryTable, LoadStats), LoadError> {
        let columns = Columns {
            character: source.column("character"),
            onyomi: source.column("onyomi"),
            kunyomi: source.column("kunyomi"),
            jlpt: source.column("jlpt"),
            meaning: source.column("meaning"),
            frequency: source.column("frequency"),
            keyword: source.column("keyword"),
            story1: source.column("story1"),
            story2: source.column("story2"),
        };

        let mut table = KanjiSummaryTable::new();
        table.set_extended(EXTENDED_COLUMNS.iter().any(|c| source.column(c).is_some()));

        let name = source.name().to_string();
        let stats = source.consume(|record| match parse_row(record, &columns) {
            Some((kanji, summary)) => {
                table.insert(kanji, summary);
                true
            }
            None => false,
        })?;

        tracing::info!(
            "Loaded {} kanji summaries from {} (extended fields: {})",
            table.len(),
            name,
            table.is_extended()
        );
        Ok((table, stats))
    }
}

fn parse_row(record: &StringRecord, columns: &Columns) -> Option<(char, KanjiSummary)> {
    let mut chars = field(record, columns.character)?.trim().chars();
    let kanji = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    let text = |column: Option<usize>| field(record, column).unwrap_or_default().trim().to_string();

    Some((
        kanji,
        KanjiSummary {
            onyomi: text(columns.onyomi),
            kunyomi: text(columns.kunyomi),
            jlpt: text(columns.jlpt),
            meaning: text(columns.meaning),
            frequency: text(columns.frequency),
            keyword: text(columns.keyword),
            story1: text(columns.story1),
            story2: text(columns.story2),
        },
    ))
}
