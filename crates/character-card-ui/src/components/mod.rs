//! Character card components
//!
//! Class names follow BEM (`card`, `card__content`, `card__status--alive`)
//! and every element the card contract names carries a stable `id` or
//! `data-test` attribute.

mod character_card;
mod favorite_badge;
mod status_line;

pub use character_card::*;
pub use favorite_badge::*;
pub use status_line::*;
