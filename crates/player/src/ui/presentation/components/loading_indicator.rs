use dioxus::prelude::*;

/// Centered spinner shown while the character list is loading
#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            class: "loading-indicator",
            role: "progressbar",
            div { class: "spinner" }
        }
    }
}
