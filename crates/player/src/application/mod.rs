//! Application layer - services and view models between the UI and the ports

pub mod api;
pub mod error;
pub mod services;
pub mod view_models;

pub use error::ServiceError;
