use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use kanjipop_core::LoadError;
use kanjipop_types::LoadStats;

/// Header-named CSV source, consumed exactly once
pub(crate) struct CsvSource<R> {
    reader: csv::Reader<R>,
    headers: StringRecord,
    name: String,
}

impl CsvSource<File> {
    pub(crate) fn open(path: &Path) -> Result<Self, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file, path.display().to_string())
    }
}

impl<R: Read> CsvSource<R> {
    pub(crate) fn from_reader(reader: R, name: impl Into<String>) -> Result<Self, LoadError> {
        let name = name.into();
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        let headers = reader
            .headers()
            .map_err(|source| LoadError::Header {
                source_name: name.clone(),
                source,
            })?
            .clone();

        Ok(Self {
            reader,
            headers,
            name,
        })
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// Position of a named column
    pub(crate) fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Feed every record to `keep`, which returns whether the row was used.
    /// Undecodable records count as skipped; I/O failures abort.
    pub(crate) fn consume(
        mut self,
        mut keep: impl FnMut(&StringRecord) -> bool,
    ) -> Result<LoadStats, LoadError> {
        let mut stats = LoadStats::default();
        let mut record = StringRecord::new();

        loop {
            match self.reader.read_record(&mut record) {
                Ok(false) => break,
                Ok(true) => {
                    stats.rows_read += 1;
                    if !keep(&record) {
                        stats.rows_skipped += 1;
                    }
                }
                Err(source) if source.is_io_error() => {
                    return Err(LoadError::Read {
                        source_name: self.name,
                        source,
                    });
                }
                Err(e) => {
                    tracing::debug!("Skipping undecodable row in {}: {}", self.name, e);
                    stats.rows_read += 1;
                    stats.rows_skipped += 1;
                }
            }
        }

        if stats.rows_skipped > 0 {
            tracing::warn!(
                "Skipped {} of {} rows in {}",
                stats.rows_skipped,
                stats.rows_read,
                self.name
            );
        }

        Ok(stats)
    }
}

/// Field at an optional column; `None` when the column is missing from the
/// header or the row is short
pub(crate) fn field(record: &StringRecord, column: Option<usize>) -> Option<&str> {
    column.and_then(|idx| record.get(idx))
}
