//! Character Card Core Library
//!
//! Record model and pure view derivation for the character card widget.
//!
//! ## Overview
//!
//! The card is a leaf presentational component: it receives a [`Character`]
//! record plus a few [`CardOptions`] and renders a fixed layout. Everything
//! the markup needs is computed up front by [`CardView`], so the UI layer is
//! a direct mapping with no decisions of its own.
//!
//! ## Quick Start
//!
//! ```ignore
//! use character_card_core::{CardOptions, CardView, Character};
//!
//! let rick = Character::from_path("rick.json")?;
//! let view = CardView::new(&rick, &CardOptions::new().favorite(true));
//!
//! assert_eq!(view.status_species, "Alive - Human");
//! ```

pub mod error;
pub mod types;
pub mod view;

// Re-exports
pub use error::{CardError, CardResult};
pub use types::*;
pub use view::{card_style, content_style, CardOptions, CardView, FavoriteIcon};
