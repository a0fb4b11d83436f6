//! Application services

mod character_service;

pub use character_service::{CharacterService, CHARACTERS_PATH};
