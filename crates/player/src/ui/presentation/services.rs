//! Service providers for the presentation layer
//!
//! Components use these hooks to reach application services without
//! depending on infrastructure implementations.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::api::Api;
use crate::application::services::CharacterService;

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services {
    pub character: Arc<CharacterService>,
}

impl Services {
    pub fn new(api: Api) -> Self {
        Self {
            character: Arc::new(CharacterService::new(api)),
        }
    }
}

/// Hook to access the CharacterService from context
pub fn use_character_service() -> Arc<CharacterService> {
    let services = use_context::<Services>();
    services.character.clone()
}
