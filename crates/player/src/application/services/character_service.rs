//! Character Service - fetches the character collection
//!
//! One GET against the collection endpoint; only the first page of results
//! is used.

use rickview_domain::{Character, CharacterPage};

use crate::application::api::Api;
use crate::application::ServiceError;

/// Path of the character collection, relative to the API base URL
pub const CHARACTERS_PATH: &str = "/character";

/// Character service for the list screen
///
/// Depends only on the typed `Api` wrapper, not on a concrete HTTP client.
#[derive(Clone)]
pub struct CharacterService {
    api: Api,
}

impl CharacterService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// Fetch the character collection, in API order
    pub async fn list_characters(&self) -> Result<Vec<Character>, ServiceError> {
        let page: CharacterPage = self.api.get(CHARACTERS_PATH).await?;
        tracing::debug!(count = page.results.len(), "Fetched character page");
        Ok(page.into_results())
    }
}
