//! Character list view model
//!
//! Holds the full character set, the active filter criteria, and the derived
//! subset the screen displays. The screen stores one of these in a signal;
//! everything here is synchronous and usable without a UI runtime.
//!
//! Lifecycle: `Loading -> Loaded`. The first load result (success or failure)
//! moves to `Loaded`, which is terminal; later results are ignored so the
//! loaded data is never replaced.

use rickview_domain::{filter_characters, Character, FilterCriteria};

use crate::application::ServiceError;

/// Load state of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum LoadPhase {
    #[default]
    Loading,
    Loaded,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CharacterListModel {
    phase: LoadPhase,
    data: Vec<Character>,
    filtered: Vec<Character>,
    criteria: FilterCriteria,
}

impl CharacterListModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// Full data set, in fetch order
    pub fn data(&self) -> &[Character] {
        &self.data
    }

    /// Characters matching the current criteria, in fetch order
    pub fn filtered(&self) -> &[Character] {
        &self.filtered
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Apply the outcome of the initial fetch.
    ///
    /// Failures are logged and swallowed: the list stays empty and the screen
    /// stops loading.
    pub fn apply_load_result(&mut self, result: Result<Vec<Character>, ServiceError>) {
        if self.phase == LoadPhase::Loaded {
            tracing::warn!("Ignoring character load result; list is already loaded");
            return;
        }

        match result {
            Ok(characters) => {
                tracing::info!(count = characters.len(), "Loaded characters");
                self.data = characters;
                self.refilter();
            }
            Err(e) => {
                tracing::error!(error = %e, network = e.is_network(), "Failed to load characters");
            }
        }

        self.phase = LoadPhase::Loaded;
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.criteria.status = status.into();
        self.refilter();
    }

    pub fn set_location_substring(&mut self, location: impl Into<String>) {
        self.criteria.location_substring = location.into();
        self.refilter();
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.refilter();
    }

    pub fn clear_filters(&mut self) {
        self.set_criteria(FilterCriteria::default());
    }

    fn refilter(&mut self) {
        self.filtered = filter_characters(&self.data, &self.criteria);
        tracing::trace!(
            shown = self.filtered.len(),
            total = self.data.len(),
            "Recomputed filtered characters"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::api::Api;
    use crate::application::services::CharacterService;
    use crate::infrastructure::testing::fixtures::{api_request_failed, character_page_json};
    use crate::ports::outbound::MockRawApiPort;
    use rickview_domain::StatusOption;
    use std::sync::Arc;

    fn two_planets() -> Vec<Character> {
        vec![
            Character::new(1, "Rick Sanchez")
                .with_status("Alive")
                .with_location("Earth"),
            Character::new(2, "Birdperson")
                .with_status("Dead")
                .with_location("Mars"),
        ]
    }

    fn ids(characters: &[Character]) -> Vec<u64> {
        characters.iter().map(|c| c.id).collect()
    }

    fn loaded() -> CharacterListModel {
        let mut model = CharacterListModel::new();
        model.apply_load_result(Ok(two_planets()));
        model
    }

    #[test]
    fn starts_loading_and_empty() {
        let model = CharacterListModel::new();
        assert!(model.is_loading());
        assert!(model.data().is_empty());
        assert!(model.filtered().is_empty());
    }

    #[test]
    fn successful_load_shows_everything() {
        let model = loaded();
        assert!(!model.is_loading());
        assert_eq!(model.filtered(), model.data());
        assert_eq!(ids(model.filtered()), vec![1, 2]);
    }

    #[test]
    fn failed_load_stops_loading_with_empty_list() {
        let mut model = CharacterListModel::new();
        model.apply_load_result(Err(ServiceError::from(api_request_failed("offline"))));

        assert!(!model.is_loading());
        assert!(model.data().is_empty());
        assert!(model.filtered().is_empty());
    }

    #[test]
    fn status_filter_is_case_insensitive() {
        let mut model = loaded();
        model.set_status("alive");
        assert_eq!(ids(model.filtered()), vec![1]);
    }

    #[test]
    fn location_filter_matches_substring() {
        let mut model = loaded();
        model.set_location_substring("ars");
        assert_eq!(ids(model.filtered()), vec![2]);

        // "ar" is also part of "Earth"
        model.set_location_substring("ar");
        assert_eq!(ids(model.filtered()), vec![1, 2]);
    }

    #[test]
    fn filters_combine_and_clear() {
        let mut model = loaded();
        model.set_status(StatusOption::Alive);
        model.set_location_substring("mars");
        assert!(model.filtered().is_empty());

        model.set_status("");
        assert_eq!(ids(model.filtered()), vec![2]);

        model.clear_filters();
        assert_eq!(model.filtered(), model.data());
        assert!(!model.criteria().is_active());
    }

    #[test]
    fn criteria_entered_while_loading_apply_on_arrival() {
        let mut model = CharacterListModel::new();
        model.set_status("Dead");
        assert!(model.filtered().is_empty());

        model.apply_load_result(Ok(two_planets()));
        assert_eq!(ids(model.filtered()), vec![2]);
        assert_eq!(model.data().len(), 2);
    }

    #[test]
    fn data_is_not_replaced_after_load() {
        let mut model = loaded();
        model.apply_load_result(Ok(vec![Character::new(99, "Mr. Poopybutthole")]));
        assert_eq!(ids(model.data()), vec![1, 2]);

        model.apply_load_result(Err(ServiceError::from(api_request_failed("late"))));
        assert_eq!(ids(model.data()), vec![1, 2]);
    }

    #[tokio::test]
    async fn fetch_failure_does_not_propagate() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .times(1)
            .returning(|_| Err(api_request_failed("connection refused")));
        let service = CharacterService::new(Api::new(Arc::new(raw)));

        let mut model = CharacterListModel::new();
        let result = service.list_characters().await;
        model.apply_load_result(result);

        assert!(!model.is_loading());
        assert!(model.filtered().is_empty());
    }

    #[tokio::test]
    async fn fetch_then_filter() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .times(1)
            .returning(|_| Ok(character_page_json()));
        let service = CharacterService::new(Api::new(Arc::new(raw)));

        let mut model = CharacterListModel::new();
        let result = service.list_characters().await;
        model.apply_load_result(result);
        assert_eq!(ids(model.filtered()), vec![1, 2]);

        model.set_location_substring("EARTH");
        assert_eq!(ids(model.filtered()), vec![1]);
    }
}
