//! Core types for the character card

mod character;
mod status;

pub use character::{Character, CharacterId};
pub use status::CharacterStatus;
