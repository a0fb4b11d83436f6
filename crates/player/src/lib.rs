//! Rickview player crate.
//!
//! A single Dioxus screen that lists characters from the character API and
//! filters them by status and last known location. Contains the UI,
//! application logic, and the HTTP adapter.

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod runner;
pub mod ui;

pub use ui::presentation;

// Re-export commonly used entrypoints
pub use config::{PlayerConfig, ShellKind};
pub use ui::app;
