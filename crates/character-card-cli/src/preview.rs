//! Static HTML preview of the card.

use character_card_core::{CardOptions, Character};
use dioxus::prelude::*;

use crate::app::{Preview, PreviewProps};

/// Render the preview root into a standalone HTML document.
pub fn render_page(character: Character, options: CardOptions) -> String {
    let title = character.name.clone();

    let mut dom = VirtualDom::new_with_props(Preview, PreviewProps { character, options });
    dom.rebuild_in_place();
    let body = dioxus_ssr::render(&dom);

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape_text(&title),
        body
    )
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
