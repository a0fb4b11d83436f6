//! Filter engine
//!
//! Derives the displayed subset of characters from the full data set.

use crate::entities::Character;
use crate::value_objects::FilterCriteria;

/// Characters from `data` matching every active predicate in `criteria`, in
/// their original order.
///
/// With no active predicate the result is a copy of `data`.
pub fn filter_characters(data: &[Character], criteria: &FilterCriteria) -> Vec<Character> {
    if !criteria.is_active() {
        return data.to_vec();
    }

    data.iter()
        .filter(|character| criteria.matches(character))
        .cloned()
        .collect()
}
