use std::time::Instant;

use kanjipop_config::DataConfig;
use kanjipop_core::LoadError;
use kanjipop_types::{FrequencyTable, KanjiSummaryTable, LoadStats};

use crate::frequency::FrequencyLoader;
use crate::highlight::{compose_field, highlight_expression};
use crate::index::KanjiIndex;
use crate::render::{DetailRenderer, RenderOptions};
use crate::script::kanji_in;
use crate::summary::SummaryLoader;

/// Everything looked up while rendering, built once per run and read-only
/// afterwards
pub struct KanjiData {
    pub frequency: FrequencyTable,
    pub summaries: KanjiSummaryTable,
    pub index: KanjiIndex,
}

/// Row counters of both sources
#[derive(Debug, Clone, Copy, Default)]
pub struct KanjiDataStats {
    pub frequency: LoadStats,
    pub summaries: LoadStats,
}

impl KanjiData {
    pub fn new(frequency: FrequencyTable, summaries: KanjiSummaryTable) -> Self {
        let index = KanjiIndex::build(&frequency);
        Self {
            frequency,
            summaries,
            index,
        }
    }

    /// Read both sources and build the index. Fails only when a source
    /// cannot be read at all.
    pub fn load(config: &DataConfig) -> Result<(Self, KanjiDataStats), LoadError> {
        let start = Instant::now();
        let (frequency, frequency_stats) = FrequencyLoader::load_from_file(&config.frequency_csv)?;
        let (summaries, summary_stats) = SummaryLoader::load_from_file(&config.kanji_summary_csv)?;

        let data = Self::new(frequency, summaries);
        tracing::info!(
            "Kanji index ready: {} kanji in {} ms",
            data.index.len(),
            start.elapsed().as_millis()
        );

        Ok((
            data,
            KanjiDataStats {
                frequency: frequency_stats,
                summaries: summary_stats,
            },
        ))
    }

    pub fn renderer(&self, options: &RenderOptions) -> DetailRenderer<'_> {
        DetailRenderer::new(&self.index, &self.summaries, options)
    }

    /// Field content for one expression, or `None` when it has no kanji
    pub fn render_field(&self, expression: &str, options: &RenderOptions) -> Option<String> {
        let kanji: Vec<char> = kanji_in(expression).collect();
        if kanji.is_empty() {
            return None;
        }

        let popups = self.renderer(options).render(kanji);
        Some(compose_field(&highlight_expression(expression), &popups))
    }
}

#[cfg(test)]
mod tests {
    use kanjipop_types::{FrequencyEntry, KanjiSummary};

    use super::*;

    fn data() -> KanjiData {
        let frequency: FrequencyTable = [FrequencyEntry::new("日本", "にほん", 15)]
            .into_iter()
            .collect();
        let mut summaries = KanjiSummaryTable::new();
        summaries.insert(
            '日',
            KanjiSummary {
                meaning: "day".to_string(),
                ..KanjiSummary::default()
            },
        );
        KanjiData::new(frequency, summaries)
    }

    #[test]
    fn test_render_field_without_kanji() {
        assert!(data().render_field("ひらがな", &RenderOptions::default()).is_none());
        assert!(data().render_field("", &RenderOptions::default()).is_none());
    }

    #[test]
    fn test_render_field_one_popup_per_distinct_kanji() {
        let field = data()
            .render_field("本日本", &RenderOptions::default())
            .unwrap();

        assert!(field.starts_with("<div class=\"kanji-popup\">\n<div class=\"expression\">"));
        assert_eq!(field.matches("class=\"kanji-click\"").count(), 3);
        assert_eq!(field.matches("class=\"kanji-popup-content\"").count(), 2);

        let hi = field.find("id=\"popup-日\"").unwrap();
        let hon = field.find("id=\"popup-本\"").unwrap();
        assert!(hi < hon);
    }
}
