//! Character list state management
//!
//! Wraps the `CharacterListModel` in a signal so every mutation re-renders
//! the screen. All logic lives in the model.

use dioxus::prelude::*;
use rickview_domain::{Character, FilterCriteria};

use crate::application::view_models::CharacterListModel;
use crate::application::ServiceError;

#[derive(Clone, Copy)]
pub struct CharacterListState {
    pub model: Signal<CharacterListModel>,
}

impl CharacterListState {
    /// Create a new state in the loading phase
    pub fn new() -> Self {
        Self {
            model: Signal::new(CharacterListModel::new()),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.model.read().is_loading()
    }

    pub fn criteria(&self) -> FilterCriteria {
        self.model.read().criteria().clone()
    }

    pub fn apply_load_result(&mut self, result: Result<Vec<Character>, ServiceError>) {
        self.model.write().apply_load_result(result);
    }

    pub fn set_status(&mut self, status: String) {
        self.model.write().set_status(status);
    }

    pub fn set_location_substring(&mut self, location: String) {
        self.model.write().set_location_substring(location);
    }

    pub fn clear_filters(&mut self) {
        self.model.write().clear_filters();
    }
}

impl Default for CharacterListState {
    fn default() -> Self {
        Self::new()
    }
}
