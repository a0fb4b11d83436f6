//! Domain entities - Core objects with identity

mod character;

pub use character::{Character, CharacterLocation, CharacterPage};
