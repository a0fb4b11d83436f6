//! Service layer error types

use thiserror::Error;

use crate::ports::outbound::ApiError;

/// Errors that can occur in service operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The HTTP call failed or returned an unusable body
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

impl ServiceError {
    /// Whether the failure happened before a response was received
    pub fn is_network(&self) -> bool {
        matches!(self, ServiceError::Api(ApiError::RequestFailed(_)))
    }
}
