use super::markup::{escape_attr, escape_js};

/// Client-side interaction attached to an element. The companion card script
/// defines the functions named here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiHook {
    /// Open the popup of a kanji from the expression
    ShowPopup { kanji: char },
    /// Close whichever popup is open
    HidePopup,
    /// Zoomed / stroke-order view of the popup's kanji
    ShowLargePopup { kanji: char },
    /// Element hides itself
    DismissSelf,
    ToggleStory { id: String },
    ToggleKanjiDetails { id: String },
}

impl UiHook {
    /// JavaScript statement invoked on click
    pub fn script(&self) -> String {
        match self {
            UiHook::ShowPopup { kanji } => format!("showKanjiPopup('{kanji}')"),
            UiHook::HidePopup => "hideKanjiPopup()".to_string(),
            UiHook::ShowLargePopup { kanji } => format!("showLargePopup(this, '{kanji}')"),
            UiHook::DismissSelf => "this.style.display='none'".to_string(),
            UiHook::ToggleStory { id } => format!("toggleStory('{}')", escape_js(id)),
            UiHook::ToggleKanjiDetails { id } => {
                format!("toggleKanjiDetails('{}')", escape_js(id))
            }
        }
    }

    /// `onclick="..."` attribute, ready to splice into a start tag
    pub fn onclick(&self) -> String {
        format!("onclick=\"{}\"", escape_attr(&self.script()))
    }
}
