//! Rickview domain layer.
//!
//! Plain data types for the character list screen and the synchronous filter
//! engine that derives the displayed subset. Nothing in here performs I/O.

pub mod entities;
pub mod error;
pub mod filtering;
pub mod value_objects;

pub use entities::{Character, CharacterLocation, CharacterPage};
pub use error::DomainError;
pub use filtering::filter_characters;
pub use value_objects::{FilterCriteria, StatusOption};
