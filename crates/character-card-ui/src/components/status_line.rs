//! Status Line Component
//!
//! Colored dot followed by "{status} - {species}".

use character_card_core::CharacterStatus;
use dioxus::prelude::*;

#[component]
pub fn StatusLine(
    /// Category that picks the dot color
    status: CharacterStatus,
    /// Text shown next to the dot
    text: String,
) -> Element {
    rsx! {
        div { class: "card__status-line",
            span {
                id: "card-status",
                class: status.class(),
                title: status.modifier(),
            }
            span { id: "card-status-species", class: "card__status-species", "{text}" }
        }
    }
}
