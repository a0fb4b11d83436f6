//! Configuration types for the player runner.
//!
//! Everything here is optional; with no environment set the screen talks to
//! the public character API in the mobile layout.

use std::str::FromStr;

/// Default base URL of the character API
pub const DEFAULT_API_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// Overrides the API base URL
pub const API_BASE_URL_ENV: &str = "RICKVIEW_API_BASE_URL";

/// Selects the layout shell (`desktop` or `mobile`)
pub const SHELL_ENV: &str = "RICKVIEW_SHELL";

/// Shell variant for UI layout selection.
/// This is passed via Dioxus context from the runner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShellKind {
    Desktop,
    #[default]
    Mobile,
}

impl ShellKind {
    /// Initial window size in logical pixels
    pub fn window_size(&self) -> (f64, f64) {
        match self {
            ShellKind::Desktop => (1024.0, 768.0),
            ShellKind::Mobile => (420.0, 860.0),
        }
    }
}

impl FromStr for ShellKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desktop" => Ok(Self::Desktop),
            "mobile" => Ok(Self::Mobile),
            other => Err(format!("unknown shell kind: {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerConfig {
    pub api_base_url: String,
    pub shell: ShellKind,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            shell: ShellKind::default(),
        }
    }
}

impl PlayerConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Invalid values are logged and replaced by their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_base_url = match lookup(API_BASE_URL_ENV) {
            Some(raw) => match validate_base_url(&raw) {
                Ok(url) => url,
                Err(reason) => {
                    tracing::warn!(value = %raw, %reason, "Invalid {API_BASE_URL_ENV}, using default");
                    DEFAULT_API_BASE_URL.to_string()
                }
            },
            None => DEFAULT_API_BASE_URL.to_string(),
        };

        let shell = match lookup(SHELL_ENV) {
            Some(raw) => raw.parse::<ShellKind>().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Invalid {SHELL_ENV}, using default");
                ShellKind::default()
            }),
            None => ShellKind::default(),
        };

        Self {
            api_base_url,
            shell,
        }
    }
}

fn validate_base_url(raw: &str) -> Result<String, String> {
    let url = url::Url::parse(raw.trim()).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(format!("unsupported scheme: {other}")),
    }
    if url.cannot_be_a_base() {
        return Err("URL cannot be a base".to_string());
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}
