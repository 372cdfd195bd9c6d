//! Character Card Component
//!
//! Image on the leading edge, favorite badge over the image, and a content
//! region with the status line, name, last known location and first episode.

use character_card_core::{card_style, CardOptions, CardView, Character};
use dioxus::prelude::*;

use crate::components::{FavoriteBadge, StatusLine};
use crate::theme::CARD_STYLES;

/// Label above the location name
pub const LOCATION_LABEL: &str = "Last known location:";

/// Label above the first episode name
pub const FIRST_SEEN_LABEL: &str = "First seen in:";

/// Properties for the CharacterCard component
#[derive(Clone, PartialEq, Props)]
pub struct CharacterCardProps {
    /// Record to display. Without one the card renders an empty placeholder.
    #[props(default)]
    pub character_data: Option<Character>,
    /// Whether the favorite badge shows the "on" icon
    #[props(default = false)]
    pub is_favorite: bool,
    /// Background color of the content region
    #[props(default)]
    pub bg_color: Option<String>,
    /// Maximum width of the whole card (e.g. "326px")
    #[props(default)]
    pub max_width: Option<String>,
    /// Called when the favorite badge is clicked
    #[props(default)]
    pub on_toggle_favorite: Option<EventHandler<()>>,
}

impl CharacterCardProps {
    /// Display options carried by these props
    pub fn options(&self) -> CardOptions {
        CardOptions {
            is_favorite: self.is_favorite,
            bg_color: self.bg_color.clone(),
            max_width: self.max_width.clone(),
        }
    }
}

/// Displays one character record as a horizontal card
///
/// # Design Notes
///
/// - 140px square image with rounded leading corners
/// - Content region with rounded trailing corners and optional background
/// - Status dot color follows the record's status (alive, dead, unknown)
/// - Stateless: the favorite badge only reports clicks
///
/// # Example
///
/// ```rust,ignore
/// let mut favorite = use_signal(|| false);
///
/// rsx! {
///     CharacterCardStyles {}
///     CharacterCard {
///         character_data: rick.clone(),
///         is_favorite: favorite(),
///         max_width: "326px".to_string(),
///         on_toggle_favorite: move |_| favorite.toggle(),
///     }
/// }
/// ```
#[component]
pub fn CharacterCard(props: CharacterCardProps) -> Element {
    let options = props.options();

    let view = match CardView::try_new(props.character_data.as_ref(), &options) {
        Ok(view) => view,
        Err(e) => {
            tracing::warn!("Rendering card placeholder: {}", e);
            let style = card_style(options.max_width.as_deref());
            return rsx! {
                div { id: "card-placeholder", class: "card card--empty", style: "{style}" }
            };
        }
    };

    let on_toggle = props.on_toggle_favorite;

    rsx! {
        div { class: "card", style: "{view.card_style}",
            img {
                class: "card__image",
                src: "{view.image}",
                alt: "{view.name}",
            }

            FavoriteBadge { icon: view.favorite, on_toggle: on_toggle }

            div {
                id: "card-content",
                class: "card__content",
                style: "{view.content_style}",

                div { class: "card-content__section", "data-test": "card-section",
                    StatusLine { status: view.status, text: view.status_species.clone() }
                    h2 { id: "card-name", class: "card__character-name", "{view.name}" }
                }

                div { class: "card-content__section", "data-test": "card-section",
                    span { class: "card__label", "data-test": "location-label", "{LOCATION_LABEL}" }
                    span { id: "card-location-value", class: "card__field", "{view.location_name}" }
                }

                div { class: "card-content__section", "data-test": "card-section",
                    span { class: "card__label", "data-test": "first-seen-label", "{FIRST_SEEN_LABEL}" }
                    span { id: "card-episode", class: "card__field", "{view.first_episode_name}" }
                }
            }
        }
    }
}

/// Stylesheet for the card classes. Mount once per page.
#[component]
pub fn CharacterCardStyles() -> Element {
    rsx! {
        style { {CARD_STYLES} }
    }
}
