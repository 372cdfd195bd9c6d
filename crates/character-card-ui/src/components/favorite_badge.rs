//! Favorite Badge Component
//!
//! Circular badge over the bottom-right corner of the card image. The circle
//! and the star container are siblings, both positioned against the card.

use character_card_core::FavoriteIcon;
use dioxus::prelude::*;

/// Favorite badge with an off/on star
///
/// The badge never flips its own icon. A click is reported through
/// `on_toggle` and the parent decides the next `icon`.
#[component]
pub fn FavoriteBadge(
    /// Icon to display
    icon: FavoriteIcon,
    /// Optional click handler
    #[props(default = None)]
    on_toggle: Option<EventHandler<()>>,
) -> Element {
    let icon_id = icon.element_id();
    let icon_class = icon.class();
    let glyph = icon.glyph();
    let label = icon.label();

    let handle_click = move |_| {
        tracing::info!("Favorite badge clicked (was {:?})", icon);
        if let Some(handler) = &on_toggle {
            handler.call(());
        }
    };

    rsx! {
        div {
            id: "favorite-icon-wrapper",
            class: "card__favorite",
            role: "button",
            title: "{label}",
            "aria-label": "{label}",
            "aria-pressed": if icon.is_on() { "true" } else { "false" },
            onclick: handle_click,
        }
        div {
            id: "favorite-icon-container",
            class: "card__star-container",
            onclick: handle_click,
            span { id: icon_id, class: icon_class, "{glyph}" }
        }
    }
}
