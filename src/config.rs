//! Host configuration parsed from environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read once at start-up. The client half is shipped to the browser inside
//! the SSR shell, so both renders agree on the content service location and
//! the assistant typing delay.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use client::config::ClientConfig;
use client::state::assistant::{DEFAULT_TYPING_DELAY_MS, MAX_TYPING_DELAY_MS};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {value}")]
    InvalidPort { value: String },

    #[error("invalid ASSISTANT_TYPING_DELAY_MS: {value}")]
    InvalidTypingDelay { value: String },

    #[error(transparent)]
    Client(#[from] client::config::ConfigError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub client: ClientConfig,
}

impl AppConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CONTENT_API_BASE_URL`: content service base URL, default same origin
    /// - `ASSISTANT_TYPING_DELAY_MS`: default 1500, capped at 10000
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is set but malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match read("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort { value: raw })?,
            None => DEFAULT_PORT,
        };
        let typing_delay_ms = match read("ASSISTANT_TYPING_DELAY_MS") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTypingDelay { value: raw })?
                .min(MAX_TYPING_DELAY_MS),
            None => DEFAULT_TYPING_DELAY_MS,
        };
        let base_url = read("CONTENT_API_BASE_URL").unwrap_or_default();

        Ok(Self { port, client: ClientConfig::new(&base_url, typing_delay_ms)? })
    }
}
