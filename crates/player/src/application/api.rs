//! Typed API wrapper for application services.
//!
//! `Api` wraps an `Arc<dyn RawApiPort>` and decodes JSON bodies into typed
//! values via serde_json, so services never touch `serde_json::Value`.

use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::ports::outbound::{ApiError, RawApiPort};

#[derive(Clone)]
pub struct Api {
    raw: Arc<dyn RawApiPort>,
}

impl Api {
    pub fn new(raw: Arc<dyn RawApiPort>) -> Self {
        Self { raw }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let value = self.raw.get_json(path).await?;
        serde_json::from_value(value).map_err(|e| ApiError::ParseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockRawApiPort;
    use rickview_domain::CharacterPage;
    use serde_json::json;

    #[tokio::test]
    async fn get_decodes_typed_body() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .returning(|_| Ok(json!({ "results": [] })));

        let api = Api::new(Arc::new(raw));
        let page: CharacterPage = api.get("/character").await.unwrap();
        assert!(page.results.is_empty());
    }

    #[tokio::test]
    async fn get_reports_shape_mismatch_as_parse_error() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .returning(|_| Ok(json!({ "results": "not a list" })));

        let api = Api::new(Arc::new(raw));
        let result = api.get::<CharacterPage>("/character").await;
        assert!(matches!(result, Err(ApiError::ParseError(_))));
    }
}
