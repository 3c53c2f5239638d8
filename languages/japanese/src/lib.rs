pub mod data;
pub mod frequency;
pub mod highlight;
pub mod index;
mod loader;
pub mod render;
pub mod script;
pub mod summary;

pub use data::{KanjiData, KanjiDataStats};
pub use frequency::FrequencyLoader;
pub use highlight::{compose_field, highlight_expression};
pub use index::KanjiIndex;
pub use render::{DetailRenderer, RenderOptions, UiHook, render_popups, select_examples};
pub use script::{distinct_kanji, is_kanji, kanji_in};
pub use summary::SummaryLoader;
