use std::path::PathBuf;

/// A tabular source could not be read at all. Row-level problems never
/// surface here; loaders skip and count them instead.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read header of {source_name}: {source}")]
    Header {
        source_name: String,
        #[source]
        source: csv::Error,
    },

    #[error("read of {source_name} failed: {source}")]
    Read {
        source_name: String,
        #[source]
        source: csv::Error,
    },
}
