use crate::render::UiHook;
use crate::script::is_kanji;

/// Wrap each kanji in a clickable span; everything else is copied as is
pub fn highlight_expression(expression: &str) -> String {
    let mut html = String::with_capacity(expression.len() * 4);
    for c in expression.chars() {
        if is_kanji(c) {
            html.push_str(&format!(
                "<span class=\"kanji-click\" {}>{c}</span>",
                UiHook::ShowPopup { kanji: c }.onclick()
            ));
        } else {
            html.push(c);
        }
    }
    html
}

/// Final field content: clickable expression plus its popups
pub fn compose_field(highlighted: &str, popups: &str) -> String {
    format!(
        "<div class=\"kanji-popup\">\n\
         <div class=\"expression\">{highlighted}</div>\n\
         <div class=\"kanji-popups\">{popups}</div>\n\
         </div>"
    )
}
