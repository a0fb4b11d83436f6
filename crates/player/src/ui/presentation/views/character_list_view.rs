//! Character List View - the app's only screen
//!
//! Issues the character fetch once on mount, shows a loading indicator until
//! it completes, then renders the filter bar and the filtered cards. A failed
//! fetch is logged by the view model and leaves an empty list.

use dioxus::prelude::*;

use crate::presentation::components::{CharacterCard, FilterBar, LoadingIndicator};
use crate::presentation::services::use_character_service;
use crate::presentation::state::CharacterListState;

#[component]
pub fn CharacterListView() -> Element {
    let character_service = use_character_service();
    let state = use_context::<CharacterListState>();

    // Initial load; `use_hook` runs once per mount
    use_hook(move || {
        let svc = character_service.clone();
        let mut state = state;
        spawn(async move {
            tracing::debug!("Requesting character collection");
            let result = svc.list_characters().await;
            state.apply_load_result(result);
        });
    });

    if state.is_loading() {
        return rsx! {
            LoadingIndicator {}
        };
    }

    let model = state.model.read();
    let shown = model.filtered().len();
    let total = model.data().len();

    let view = rsx! {
        div {
            class: "character-screen",

            FilterBar {}

            div {
                class: "character-count",
                "Showing {shown} of {total}"
            }

            div {
                class: "character-list",
                for character in model.filtered() {
                    CharacterCard {
                        key: "{character.id}",
                        character: character.clone(),
                    }
                }
            }
        }
    };

    drop(model);
    view
}
