//! Popup markup for the kanji of one expression.
//!
//! Output depends only on the inputs: kanji are visited in code-point order,
//! example words in rank order, and every identifier is derived from the
//! popup's kanji so nothing collides within one note's field.

mod examples;
mod hook;
mod markup;

use std::collections::BTreeSet;

use kanjipop_config::{RenderConfig, RenderProfile};
use kanjipop_types::{FrequencyEntry, KanjiSummary, KanjiSummaryTable};

pub use examples::select_examples;
pub use hook::UiHook;
pub use markup::{escape_attr, escape_js};

use crate::index::KanjiIndex;
use crate::script::kanji_in;

/// Per-run rendering parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub top_n: usize,
    /// Inclusive max frequency rank for example words
    pub cutoff: i64,
    pub profile: RenderProfile,
}

impl RenderOptions {
    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            top_n: config.number_of_example_vocab,
            cutoff: config.example_vocab_frequency_cutoff,
            profile: config.render_profile,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from_config(&RenderConfig::default())
    }
}

/// Renders popups against one index and summary table
pub struct DetailRenderer<'a> {
    index: &'a KanjiIndex,
    summaries: &'a KanjiSummaryTable,
    top_n: usize,
    cutoff: i64,
    profile: RenderProfile,
}

impl<'a> DetailRenderer<'a> {
    pub fn new(
        index: &'a KanjiIndex,
        summaries: &'a KanjiSummaryTable,
        options: &RenderOptions,
    ) -> Self {
        Self {
            index,
            summaries,
            top_n: options.top_n,
            cutoff: options.cutoff,
            profile: options.profile.resolve(summaries.is_extended()),
        }
    }

    /// Profile in effect after resolving `Auto`
    pub fn profile(&self) -> RenderProfile {
        self.profile
    }

    /// One popup per distinct kanji, in code-point order, newline separated
    pub fn render(&self, kanji: impl IntoIterator<Item = char>) -> String {
        let set: BTreeSet<char> = kanji.into_iter().collect();
        set.into_iter()
            .map(|k| self.render_popup(k))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Popup for a single kanji. Missing data only drops sections.
    pub fn render_popup(&self, kanji: char) -> String {
        let mut html = String::new();

        html.push_str(&format!(
            "<div class=\"kanji-popup-content\" id=\"popup-{kanji}\" style=\"display:none;\">"
        ));
        html.push_str("<div class=\"popup-scroll\">");
        html.push_str(&format!(
            "<h2 {}>{kanji}</h2>",
            UiHook::ShowLargePopup { kanji }.onclick()
        ));
        html.push_str(&format!(
            "<div id=\"stroke-order-popup-{kanji}\" class=\"stroke-order-popup\" {}></div>",
            UiHook::DismissSelf.onclick()
        ));

        if let Some(summary) = self.summaries.get(kanji) {
            html.push_str(&self.summary_table(kanji, summary));
        }

        let examples = select_examples(self.index.get(kanji), self.top_n, self.cutoff);
        if !examples.is_empty() {
            html.push_str("<hr class=\"word-separator\"><ul>");
            for (position, entry) in examples.iter().enumerate() {
                html.push_str(&self.example_item(kanji, position, entry));
            }
            html.push_str("</ul>");
        }

        html.push_str("</div>");
        html.push_str(&format!(
            "<div class=\"popup-footer\"><button class=\"popup-close\" {}>Close</button></div>",
            UiHook::HidePopup.onclick()
        ));
        html.push_str("</div>");
        html
    }

    fn summary_table(&self, kanji: char, summary: &KanjiSummary) -> String {
        let extended = self.profile == RenderProfile::Extended;
        let mut rows: Vec<(&str, String)> = Vec::new();

        if extended {
            if let Some(keyword) = summary.keyword() {
                rows.push((
                    "Keyword",
                    format!("<span class=\"meaning-primary\">{keyword}</span>"),
                ));
            }
        }
        if !summary.meaning.is_empty() {
            rows.push(("Meaning", summary.meaning.clone()));
        }
        if !summary.onyomi.is_empty() {
            rows.push(("Onyomi", join_readings(&summary.onyomi)));
        }
        if !summary.kunyomi.is_empty() {
            rows.push(("Kunyomi", join_readings(&summary.kunyomi)));
        }
        if !summary.jlpt.is_empty() {
            rows.push(("JLPT", summary.jlpt.clone()));
        }
        if !summary.frequency.is_empty() {
            rows.push(("Frequency", summary.frequency.clone()));
        }
        if extended {
            if let Some(story) = summary.story1() {
                rows.push(("Story 1", story_block(story, &format!("story1-{kanji}"))));
            }
            if let Some(story) = summary.story2() {
                rows.push(("Story 2", story_block(story, &format!("story2-{kanji}"))));
            }
        }

        let mut html = String::from("<table>");
        for (label, value) in rows {
            html.push_str(&format!(
                "<tr><td class=\"label\">{label}</td><td class=\"value\">{value}</td></tr>"
            ));
        }
        html.push_str("</table>");
        html
    }

    fn example_item(&self, kanji: char, position: usize, entry: &FrequencyEntry) -> String {
        let ruby = build_ruby(&entry.term, &entry.reading);
        let frequency = entry
            .frequency
            .map_or_else(|| "N/A".to_string(), |f| f.to_string());
        let details_id = format!("details-{kanji}-{}-{position}", entry.term);

        match self.profile {
            RenderProfile::Basic => {
                let definition = if entry.definitions.is_empty() {
                    String::new()
                } else {
                    format!("<div class=\"definition\">{}</div>", entry.definitions)
                };
                let details = self.basic_details(&entry.term, &details_id);
                format!("<li>{ruby} {definition}<small>({frequency})</small> {details}</li>")
            }
            _ => {
                let definition = if entry.definitions.is_empty() {
                    String::new()
                } else {
                    format!(
                        "<span class=\"kanji-popup-definition\">{}</span>",
                        entry.definitions
                    )
                };
                let details = self.extended_details(&entry.term, &details_id);
                format!("<li>{ruby} {definition}<small>({frequency})</small> {details}</li>")
            }
        }
    }

    /// `[+]` toggle listing keyword and meaning of each kanji in the term
    fn extended_details(&self, term: &str, id: &str) -> String {
        let lines: String = kanji_in(term)
            .filter_map(|k| {
                let summary = self.summaries.get(k)?;
                let keyword = summary.keyword()?;
                Some(format!(
                    "<li><strong>{k}</strong> {keyword}<span class=\"kanji-details-meaning\">; {}</span></li>",
                    summary.meaning
                ))
            })
            .collect();
        if lines.is_empty() {
            return String::new();
        }

        let id_attr = escape_attr(id);
        format!(
            "<span class=\"kanji-details-toggle\" id=\"toggle-{id_attr}\" {}>[+]</span>\
             <div id=\"{id_attr}\" class=\"kanji-details hidden\"><ul>{lines}</ul></div>",
            UiHook::ToggleKanjiDetails { id: id.to_string() }.onclick()
        )
    }

    /// Native disclosure listing the meaning of each kanji in the term
    fn basic_details(&self, term: &str, id: &str) -> String {
        let lines: String = kanji_in(term)
            .filter_map(|k| {
                let summary = self.summaries.get(k)?;
                if summary.meaning.is_empty() {
                    return None;
                }
                Some(format!("<li><strong>{k}</strong> {}</li>", summary.meaning))
            })
            .collect();
        if lines.is_empty() {
            return String::new();
        }

        format!(
            "<details class=\"kanji-details\" id=\"{}\"><summary>[+]</summary><ul>{lines}</ul></details>",
            escape_attr(id)
        )
    }
}

/// Render popups for a set of kanji in one call
pub fn render_popups(
    kanji: impl IntoIterator<Item = char>,
    index: &KanjiIndex,
    summaries: &KanjiSummaryTable,
    options: &RenderOptions,
) -> String {
    DetailRenderer::new(index, summaries, options).render(kanji)
}

/// Ruby annotation, or plain text with the reading in brackets when either
/// part is missing
pub fn build_ruby(term: &str, reading: &str) -> String {
    if term.is_empty() || reading.is_empty() {
        return format!("{term} <span class=\"reading-fallback\">[{reading}]</span>");
    }
    format!("<ruby>{term}<rt>{reading}</rt></ruby>")
}

/// Whitespace-separated readings as a comma list
fn join_readings(readings: &str) -> String {
    readings.split_whitespace().collect::<Vec<_>>().join(", ")
}

fn story_block(content: &str, id: &str) -> String {
    let id_attr = escape_attr(id);
    format!(
        "<div class=\"story-container\">\
         <div class=\"story-header\" {}><span class=\"story-toggle\" id=\"toggle-{id_attr}\">[+]</span></div>\
         <div id=\"{id_attr}\" class=\"story-body hidden\">{content}</div>\
         </div>",
        UiHook::ToggleStory { id: id.to_string() }.onclick()
    )
}
