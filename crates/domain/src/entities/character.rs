//! Character entity - a show character as returned by the character API
//!
//! Only the fields the list screen displays or filters on are modelled.
//! Anything else in the payload (origin, type, url, created) is ignored
//! during deserialization.

use serde::{Deserialize, Serialize};

/// Placeholder shown when a character has no recorded episodes
pub const NO_EPISODE_PLACEHOLDER: &str = "-";

/// A character record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Unique id, used as the list row key
    pub id: u64,
    pub name: String,
    /// Free-form status ("Alive", "Dead", "unknown"); compared case-insensitively
    pub status: String,
    pub species: String,
    pub gender: String,
    /// Avatar image URI
    pub image: String,
    /// Last known location
    pub location: CharacterLocation,
    /// Episode identifiers in airing order
    #[serde(default)]
    pub episode: Vec<String>,
}

/// Last known location of a character
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CharacterLocation {
    pub name: String,
}

impl CharacterLocation {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Character {
    /// Build a character with the given id and name; remaining fields start empty.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            status: String::new(),
            species: String::new(),
            gender: String::new(),
            image: String::new(),
            location: CharacterLocation::default(),
            episode: Vec::new(),
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_species(mut self, species: impl Into<String>) -> Self {
        self.species = species.into();
        self
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = gender.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_location(mut self, name: impl Into<String>) -> Self {
        self.location = CharacterLocation::new(name);
        self
    }

    pub fn with_episodes(mut self, episodes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.episode = episodes.into_iter().map(Into::into).collect();
        self
    }

    /// The episode the character first appeared in, if any
    pub fn first_episode(&self) -> Option<&str> {
        self.episode.first().map(String::as_str)
    }

    /// First episode for display, falling back to a placeholder
    pub fn first_seen_label(&self) -> &str {
        self.first_episode().unwrap_or(NO_EPISODE_PLACEHOLDER)
    }
}

/// Response envelope of the character collection endpoint
///
/// The endpoint also sends an `info` block with paging links; only the first
/// page is ever requested, so it is not modelled.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CharacterPage {
    #[serde(default)]
    pub results: Vec<Character>,
}

impl CharacterPage {
    pub fn into_results(self) -> Vec<Character> {
        self.results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rick_json() -> serde_json::Value {
        json!({
            "id": 1,
            "name": "Rick Sanchez",
            "status": "Alive",
            "species": "Human",
            "type": "",
            "gender": "Male",
            "origin": { "name": "Earth (C-137)", "url": "https://rickandmortyapi.com/api/location/1" },
            "location": { "name": "Citadel of Ricks", "url": "https://rickandmortyapi.com/api/location/3" },
            "image": "https://rickandmortyapi.com/api/character/avatar/1.jpeg",
            "episode": [
                "https://rickandmortyapi.com/api/episode/1",
                "https://rickandmortyapi.com/api/episode/2"
            ],
            "url": "https://rickandmortyapi.com/api/character/1",
            "created": "2017-11-04T18:48:46.250Z"
        })
    }

    #[test]
    fn test_character_deserializes_and_ignores_extra_fields() {
        let character: Character = serde_json::from_value(rick_json()).unwrap();

        assert_eq!(character.id, 1);
        assert_eq!(character.name, "Rick Sanchez");
        assert_eq!(character.status, "Alive");
        assert_eq!(character.species, "Human");
        assert_eq!(character.gender, "Male");
        assert_eq!(character.location.name, "Citadel of Ricks");
        assert_eq!(
            character.image,
            "https://rickandmortyapi.com/api/character/avatar/1.jpeg"
        );
        assert_eq!(character.episode.len(), 2);
    }

    #[test]
    fn test_first_episode_is_first_in_list() {
        let character: Character = serde_json::from_value(rick_json()).unwrap();
        assert_eq!(
            character.first_episode(),
            Some("https://rickandmortyapi.com/api/episode/1")
        );
    }

    #[test]
    fn test_builder_sets_every_card_field() {
        let character = Character::new(2, "Morty Smith")
            .with_status("Alive")
            .with_species("Human")
            .with_gender("Male")
            .with_image("https://rickandmortyapi.com/api/character/avatar/2.jpeg")
            .with_location("Citadel of Ricks")
            .with_episodes(["https://rickandmortyapi.com/api/episode/1"]);

        let decoded: Character = serde_json::from_value(json!({
            "id": 2,
            "name": "Morty Smith",
            "status": "Alive",
            "species": "Human",
            "gender": "Male",
            "image": "https://rickandmortyapi.com/api/character/avatar/2.jpeg",
            "location": { "name": "Citadel of Ricks" },
            "episode": ["https://rickandmortyapi.com/api/episode/1"]
        }))
        .unwrap();

        assert_eq!(character, decoded);
        assert_eq!(
            character.first_seen_label(),
            "https://rickandmortyapi.com/api/episode/1"
        );
    }

    #[test]
    fn test_first_seen_label_without_episodes() {
        let character = Character::new(7, "Abradolf Lincler");
        assert_eq!(character.first_episode(), None);
        assert_eq!(character.first_seen_label(), NO_EPISODE_PLACEHOLDER);
    }

    #[test]
    fn test_missing_episode_field_defaults_to_empty() {
        let mut value = rick_json();
        value.as_object_mut().unwrap().remove("episode");

        let character: Character = serde_json::from_value(value).unwrap();
        assert!(character.episode.is_empty());
    }

    #[test]
    fn test_page_keeps_result_order_and_ignores_info() {
        let mut morty = rick_json();
        morty["id"] = json!(2);
        morty["name"] = json!("Morty Smith");

        let page: CharacterPage = serde_json::from_value(json!({
            "info": { "count": 826, "pages": 42, "next": "https://rickandmortyapi.com/api/character?page=2", "prev": null },
            "results": [rick_json(), morty]
        }))
        .unwrap();

        let ids: Vec<u64> = page.into_results().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_page_missing_results_is_an_empty_page() {
        let page: CharacterPage = serde_json::from_value(json!({})).unwrap();
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_character_with_wrong_id_type_fails() {
        let mut value = rick_json();
        value["id"] = json!("one");
        assert!(serde_json::from_value::<Character>(value).is_err());
    }
}
