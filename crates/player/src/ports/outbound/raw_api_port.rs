//! Raw API Port - Object-safe HTTP boundary
//!
//! Typed, generic reads are not object-safe, so the composition root stores an
//! `Arc<dyn RawApiPort>` that deals in `serde_json::Value`. The application
//! layer provides the typed wrapper (`Api`) on top.

use async_trait::async_trait;
use serde_json::Value;

use super::ApiError;

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait RawApiPort: Send + Sync {
    /// GET `path` relative to the configured base URL and return the JSON body
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;
}
