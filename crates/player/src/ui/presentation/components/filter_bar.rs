//! Filter Bar - status picker and location search

use dioxus::prelude::*;
use rickview_domain::StatusOption;

use crate::presentation::state::CharacterListState;

/// Status `select` plus a location substring input.
///
/// Every change updates the shared `CharacterListState`, which recomputes
/// the visible list synchronously.
#[component]
pub fn FilterBar() -> Element {
    let mut state = use_context::<CharacterListState>();
    let criteria = state.criteria();
    let is_active = criteria.is_active();
    // Statuses outside the picker's options show as "All statuses"
    let selected_status = criteria
        .status_option()
        .map(|choice| choice.value())
        .unwrap_or_default();

    rsx! {
        div {
            class: "filter-bar",

            select {
                class: "filter-status",
                value: "{selected_status}",
                onchange: move |e| state.set_status(e.value()),

                option { value: "", "All statuses" }
                {StatusOption::all().iter().map(|choice| {
                    let value = choice.value();
                    let label = choice.display_name();
                    rsx! {
                        option {
                            key: "{value}",
                            value: "{value}",
                            "{label}"
                        }
                    }
                })}
            }

            input {
                class: "filter-location",
                r#type: "text",
                placeholder: "Filter by location",
                value: "{criteria.location_substring}",
                oninput: move |e| state.set_location_substring(e.value()),
            }

            if is_active {
                button {
                    class: "filter-clear",
                    onclick: move |_| state.clear_filters(),
                    "Clear"
                }
            }
        }
    }
}
