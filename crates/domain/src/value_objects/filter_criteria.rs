//! Filter criteria for the character list
//!
//! Two independent predicates, AND-combined. An empty string disables its
//! predicate. Both comparisons are case-insensitive; values are otherwise
//! used exactly as entered (no trimming).

use serde::{Deserialize, Serialize};

use crate::entities::Character;
use crate::value_objects::StatusOption;

/// The user-selected status and location filters
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Exact status to match; empty means any status
    pub status: String,
    /// Substring of the last known location name; empty means any location
    pub location_substring: String,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_location_substring(mut self, location: impl Into<String>) -> Self {
        self.location_substring = location.into();
        self
    }

    /// The selected status as a picker option, if it is one of the known values
    pub fn status_option(&self) -> Option<StatusOption> {
        self.status.parse().ok()
    }

    pub fn is_status_active(&self) -> bool {
        !self.status.is_empty()
    }

    pub fn is_location_active(&self) -> bool {
        !self.location_substring.is_empty()
    }

    /// Whether any predicate is active
    pub fn is_active(&self) -> bool {
        self.is_status_active() || self.is_location_active()
    }

    /// Whether a character satisfies every active predicate
    pub fn matches(&self, character: &Character) -> bool {
        self.matches_status(character) && self.matches_location(character)
    }

    fn matches_status(&self, character: &Character) -> bool {
        !self.is_status_active() || character.status.to_lowercase() == self.status.to_lowercase()
    }

    fn matches_location(&self, character: &Character) -> bool {
        !self.is_location_active()
            || character
                .location
                .name
                .to_lowercase()
                .contains(&self.location_substring.to_lowercase())
    }
}
