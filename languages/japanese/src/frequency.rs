use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use kanjipop_core::LoadError;
use kanjipop_types::{FrequencyEntry, FrequencyTable, LoadStats};

use crate::loader::{CsvSource, field};

/// Loader for the `term,reading,frequency,kana_frequency,definitions` source
pub struct FrequencyLoader;

struct Columns {
    term: Option<usize>,
    reading: Option<usize>,
    frequency: Option<usize>,
    kana_frequency: Option<usize>,
    definitions: Option<usize>,
}

impl FrequencyLoader {
    /// Load the word frequency table from a CSV file
    pub fn load_from_file(path: &Path) -> Result<(FrequencyTable, LoadStats), LoadError> {
        tracing::info!("Loading word frequencies from {}", path.display());
        Self::read(CsvSource::open(path)?)
    }

    pub fn load_from_reader(
        reader: impl Read,
        source_name: &str,
    ) -> Result<(FrequencyTable, LoadStats), LoadError> {
        Self::read(CsvSource::from_reader(reader, source_name)?)
    }

    fn read<R: Read>(source: CsvSource<R>) -> Result<(FrequencyTable, LoadStats), LoadError> {
        let columns = Columns {
            term: source.column("term"),
            reading: source.column("reading"),
            frequency: source.column("frequency"),
            kana_frequency: source.column("kana_frequency"),
            definitions: source.column("definitions"),
        };
        if columns.term.is_none() {
            tracing::warn!("{} has no 'term' column, every row will be skipped", source.name());
        }

        let name = source.name().to_string();
        let mut table = FrequencyTable::new();
        let stats = source.consume(|record| match parse_row(record, &columns) {
            Some(entry) => {
                table.push(entry);
                true
            }
            None => false,
        })?;

        tracing::info!(
            "Loaded {} terms ({} entries) from {}",
            table.term_count(),
            table.entry_count(),
            name
        );
        Ok((table, stats))
    }
}

fn parse_row(record: &StringRecord, columns: &Columns) -> Option<FrequencyEntry> {
    let term = field(record, columns.term)?;
    let frequency = field(record, columns.frequency)?.trim().parse::<i64>().ok()?;

    let kana_frequency = match field(record, columns.kana_frequency) {
        Some(raw) if !raw.is_empty() => Some(raw.trim().parse::<i64>().ok()?),
        _ => None,
    };

    Some(FrequencyEntry {
        term: term.to_string(),
        reading: field(record, columns.reading).unwrap_or_default().to_string(),
        frequency: Some(frequency),
        kana_frequency,
        definitions: field(record, columns.definitions)
            .unwrap_or_default()
            .trim()
            .to_string(),
    })
}
