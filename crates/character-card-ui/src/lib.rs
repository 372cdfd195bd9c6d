//! Character Card UI Components
//!
//! This crate provides the Dioxus rendition of the character card: a leaf
//! widget showing a character's image, status, species, name, last known
//! location and first episode, with a favorite badge over the image.
//!
//! ## Data Flow
//!
//! Props in, events out:
//! - The caller supplies the [`Character`](character_card_core::Character)
//!   record and display options on every render
//! - Clicking the favorite badge calls `on_toggle_favorite`
//! - The caller owns the favorite state and passes `is_favorite` back in
//!
//! Mount [`CharacterCardStyles`] once per page so the card classes resolve.

pub mod components;
pub mod theme;

pub use components::*;
pub use theme::CARD_STYLES;
