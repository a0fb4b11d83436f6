//! Reusable UI components for the character list screen

pub mod character_card;
pub mod filter_bar;
pub mod loading_indicator;

pub use character_card::CharacterCard;
pub use filter_bar::FilterBar;
pub use loading_indicator::LoadingIndicator;
