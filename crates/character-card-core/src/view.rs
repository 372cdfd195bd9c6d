//! Card View - Everything the markup needs, derived from props
//!
//! The card holds no state across renders. Each render builds a fresh
//! [`CardView`] from the record and the caller's [`CardOptions`] and maps it
//! straight onto elements.

use crate::error::{CardError, CardResult};
use crate::types::{Character, CharacterStatus};

/// Caller-supplied display configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardOptions {
    /// Whether the favorite badge shows the "on" icon
    pub is_favorite: bool,
    /// Background override for the content region
    pub bg_color: Option<String>,
    /// Upper bound for the card width
    pub max_width: Option<String>,
}

impl CardOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }

    pub fn bg_color(mut self, color: impl Into<String>) -> Self {
        self.bg_color = Some(color.into());
        self
    }

    pub fn max_width(mut self, width: impl Into<String>) -> Self {
        self.max_width = Some(width.into());
        self
    }
}

/// Which favorite icon the badge displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FavoriteIcon {
    #[default]
    Off,
    On,
}

impl FavoriteIcon {
    pub fn from_flag(is_favorite: bool) -> Self {
        if is_favorite {
            FavoriteIcon::On
        } else {
            FavoriteIcon::Off
        }
    }

    pub fn is_on(&self) -> bool {
        matches!(self, FavoriteIcon::On)
    }

    /// Element id of the rendered icon
    pub fn element_id(&self) -> &'static str {
        match self {
            FavoriteIcon::Off => "favorite-icon-off",
            FavoriteIcon::On => "favorite-icon-on",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            FavoriteIcon::Off => "card__star",
            FavoriteIcon::On => "card__star card__star--on",
        }
    }

    /// Hollow star when off, filled star when on
    pub fn glyph(&self) -> &'static str {
        match self {
            FavoriteIcon::Off => "\u{2606}",
            FavoriteIcon::On => "\u{2605}",
        }
    }

    /// Accessible label describing what a click does
    pub fn label(&self) -> &'static str {
        match self {
            FavoriteIcon::Off => "Add to favorites",
            FavoriteIcon::On => "Remove from favorites",
        }
    }
}

/// Display values for one render of the card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub name: String,
    pub image: String,
    pub status: CharacterStatus,
    /// "{status} - {species}"
    pub status_species: String,
    pub location_name: String,
    pub first_episode_name: String,
    pub favorite: FavoriteIcon,
    /// Inline style of the card root
    pub card_style: String,
    /// Inline style of the content region
    pub content_style: String,
}

impl CardView {
    pub fn new(character: &Character, options: &CardOptions) -> Self {
        Self {
            name: character.name.clone(),
            image: character.image.clone(),
            status: character.status_kind(),
            status_species: character.status_species(),
            location_name: character.location_name.clone(),
            first_episode_name: character.first_episode_name.clone(),
            favorite: FavoriteIcon::from_flag(options.is_favorite),
            card_style: card_style(options.max_width.as_deref()),
            content_style: content_style(options.bg_color.as_deref()),
        }
    }

    /// Like [`CardView::new`], but reports a missing record as an error
    pub fn try_new(character: Option<&Character>, options: &CardOptions) -> CardResult<Self> {
        character
            .map(|c| Self::new(c, options))
            .ok_or(CardError::MissingCharacter)
    }
}

/// Inline style for the card root. Empty unless a max width is given.
pub fn card_style(max_width: Option<&str>) -> String {
    match non_blank(max_width) {
        Some(width) => format!("max-width: {};", width),
        None => String::new(),
    }
}

/// Inline style for the content region. Empty unless a background is given.
pub fn content_style(bg_color: Option<&str>) -> String {
    match non_blank(bg_color) {
        Some(color) => format!("background-color: {};", color),
        None => String::new(),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rick() -> Character {
        Character::from_json_str(include_str!("../tests/fixtures/mock_character.json")).unwrap()
    }

    #[test]
    fn test_view_copies_display_fields() {
        let character = rick();
        let view = CardView::new(&character, &CardOptions::default());

        assert_eq!(view.name, "Rick Sanchez");
        assert_eq!(view.image, character.image);
        assert_eq!(view.status_species, "Alive - Human");
        assert_eq!(view.location_name, "Citadel of Ricks");
        assert_eq!(view.first_episode_name, "Pilot");
        assert_eq!(view.status, CharacterStatus::Alive);
    }

    #[test]
    fn test_default_options() {
        let view = CardView::new(&rick(), &CardOptions::new());
        assert_eq!(view.favorite, FavoriteIcon::Off);
        assert!(view.card_style.is_empty());
        assert!(view.content_style.is_empty());
    }

    #[test]
    fn test_favorite_only_changes_icon() {
        let character = rick();
        let off = CardView::new(&character, &CardOptions::new());
        let on = CardView::new(&character, &CardOptions::new().favorite(true));

        assert_eq!(on.favorite, FavoriteIcon::On);
        assert_eq!(CardView { favorite: FavoriteIcon::Off, ..on }, off);
    }

    #[test]
    fn test_overrides() {
        let options = CardOptions::new().bg_color("#FFF").max_width("326px");
        let view = CardView::new(&rick(), &options);
        assert_eq!(view.card_style, "max-width: 326px;");
        assert_eq!(view.content_style, "background-color: #FFF;");
    }

    #[test]
    fn test_blank_overrides_are_ignored() {
        assert_eq!(card_style(Some("   ")), "");
        assert_eq!(content_style(Some("")), "");
        assert_eq!(card_style(None), "");
    }

    #[test]
    fn test_non_blank_overrides_are_verbatim() {
        assert_eq!(content_style(Some(" red ")), "background-color:  red ;");
        assert_eq!(card_style(Some("calc(100% - 1rem)")), "max-width: calc(100% - 1rem);");
    }

    #[test]
    fn test_try_new_without_record() {
        let result = CardView::try_new(None, &CardOptions::default());
        assert!(matches!(result, Err(CardError::MissingCharacter)));

        let character = rick();
        assert!(CardView::try_new(Some(&character), &CardOptions::default()).is_ok());
    }

    #[test]
    fn test_favorite_icon_ids() {
        assert_eq!(FavoriteIcon::Off.element_id(), "favorite-icon-off");
        assert_eq!(FavoriteIcon::On.element_id(), "favorite-icon-on");
        assert_eq!(FavoriteIcon::from_flag(true), FavoriteIcon::On);
        assert!(!FavoriteIcon::default().is_on());
    }
}
