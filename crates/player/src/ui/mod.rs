use dioxus::prelude::*;

pub mod presentation;

use crate::config::ShellKind;
use presentation::state::CharacterListState;
use presentation::views::CharacterListView;

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the runner (see `crates/player/src/runner.rs`).
    let shell = use_context::<ShellKind>();

    // Must be created inside an active Dioxus runtime.
    use_context_provider(CharacterListState::new);

    rsx! {
        document::Stylesheet {
            href: asset!("/assets/css/main.css"),
        }

        {
            match shell {
                ShellKind::Desktop => rsx! {
                    DesktopShell {
                        CharacterListView {}
                    }
                },
                ShellKind::Mobile => rsx! {
                    MobileShell {
                        CharacterListView {}
                    }
                },
            }
        }
    }
}

#[component]
fn DesktopShell(children: Element) -> Element {
    rsx! {
        div {
            class: "shell shell-desktop",
            {children}
        }
    }
}

#[component]
fn MobileShell(children: Element) -> Element {
    rsx! {
        div {
            class: "shell shell-mobile",
            {children}
        }
    }
}
