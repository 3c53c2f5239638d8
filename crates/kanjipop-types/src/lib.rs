pub mod frequency;
pub mod stats;
pub mod summary;

pub use frequency::{FrequencyEntry, FrequencyTable};
pub use stats::LoadStats;
pub use summary::{KanjiSummary, KanjiSummaryTable};
