//! Character Card - one row of the character list

use dioxus::prelude::*;
use rickview_domain::Character;

/// Props for CharacterCard
#[derive(Props, Clone, PartialEq)]
pub struct CharacterCardProps {
    pub character: Character,
}

/// Avatar, name, and metadata lines for a single character
#[component]
pub fn CharacterCard(props: CharacterCardProps) -> Element {
    let character = &props.character;
    let first_seen = character.first_seen_label();

    rsx! {
        div {
            class: "character-card",

            img {
                class: "character-avatar",
                src: "{character.image}",
                alt: "{character.name}",
            }

            div {
                class: "character-details",

                div {
                    class: "character-name",
                    "{character.name}"
                }
                div { "Status: {character.status}" }
                div { "Species: {character.species}" }
                div { "Gender: {character.gender}" }
                div { "Last Known Location: {character.location.name}" }
                div { "First Seen In: {first_seen}" }
            }
        }
    }
}
