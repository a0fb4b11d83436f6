//! Status filter options offered by the list screen

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

/// A selectable status filter value
///
/// The literal values mirror what the character API reports. They are not
/// normalised: `Unknown` is lower-case while the other two are capitalised.
/// Matching against character statuses is case-insensitive, so the casing
/// only affects what the filter carries, never what it matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusOption {
    #[serde(rename = "Alive")]
    Alive,
    #[serde(rename = "Dead")]
    Dead,
    #[serde(rename = "unknown")]
    Unknown,
}

impl StatusOption {
    /// All options in picker order
    pub fn all() -> &'static [StatusOption] {
        &[StatusOption::Alive, StatusOption::Dead, StatusOption::Unknown]
    }

    /// The literal filter value
    pub fn value(&self) -> &'static str {
        match self {
            StatusOption::Alive => "Alive",
            StatusOption::Dead => "Dead",
            StatusOption::Unknown => "unknown",
        }
    }

    /// Label for UI pickers
    pub fn display_name(&self) -> &'static str {
        match self {
            StatusOption::Alive => "Alive",
            StatusOption::Dead => "Dead",
            StatusOption::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for StatusOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for StatusOption {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "alive" => Ok(StatusOption::Alive),
            "dead" => Ok(StatusOption::Dead),
            "unknown" => Ok(StatusOption::Unknown),
            _ => Err(DomainError::parse(format!("Unknown status option: {}", s))),
        }
    }
}

impl From<StatusOption> for String {
    fn from(option: StatusOption) -> Self {
        option.value().to_string()
    }
}
