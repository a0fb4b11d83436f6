//! Simple test fixtures used across unit tests.

use serde_json::{json, Value};

use crate::ports::outbound::ApiError;

pub fn api_request_failed(msg: &str) -> ApiError {
    ApiError::RequestFailed(msg.to_string())
}

/// A character object shaped like the real API payload
pub fn character_json(id: u64, name: &str, status: &str, location: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "status": status,
        "species": "Human",
        "type": "",
        "gender": "Male",
        "origin": { "name": "Earth (C-137)", "url": "" },
        "location": { "name": location, "url": "" },
        "image": format!("https://rickandmortyapi.com/api/character/avatar/{id}.jpeg"),
        "episode": [
            "https://rickandmortyapi.com/api/episode/1",
            "https://rickandmortyapi.com/api/episode/2"
        ],
        "url": format!("https://rickandmortyapi.com/api/character/{id}"),
        "created": "2017-11-04T18:48:46.250Z"
    })
}

/// The two-character page used by most scenarios: an Alive character on
/// Earth and a Dead one on Mars
pub fn character_page_json() -> Value {
    json!({
        "info": { "count": 2, "pages": 1, "next": null, "prev": null },
        "results": [
            character_json(1, "Rick Sanchez", "Alive", "Earth"),
            character_json(2, "Birdperson", "Dead", "Mars")
        ]
    })
}
