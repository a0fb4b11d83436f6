//! Value objects - Immutable objects defined by their attributes

mod filter_criteria;
mod status_option;

pub use filter_criteria::FilterCriteria;
pub use status_option::StatusOption;
