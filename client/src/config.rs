//! Runtime configuration shared by the SSR host and the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host reads its environment once at start-up and embeds the result in
//! the HTML shell as a `<meta>` tag. `hydrate()` reads that tag back so both
//! renders see the same immutable values.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::state::assistant::{DEFAULT_TYPING_DELAY_MS, TypingDelay};

/// `name` attribute of the `<meta>` tag carrying the serialized config.
pub const META_NAME: &str = "code4college-config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("content base URL must start with http:// or https://: {0}")]
    InvalidBaseUrl(String),

    #[error("client config could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the content service, without a trailing slash. Empty means
    /// same origin.
    pub content_base_url: String,
    /// Assistant typing delay in milliseconds (clamped when used).
    pub typing_delay_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            content_base_url: String::new(),
            typing_delay_ms: DEFAULT_TYPING_DELAY_MS,
        }
    }
}

impl ClientConfig {
    /// Build a config, validating and normalizing the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if a non-empty base URL is not http(s).
    pub fn new(content_base_url: &str, typing_delay_ms: u64) -> Result<Self, ConfigError> {
        Ok(Self {
            content_base_url: normalize_base_url(content_base_url)?,
            typing_delay_ms,
        })
    }

    pub fn typing_delay(&self) -> TypingDelay {
        TypingDelay::from_millis(self.typing_delay_ms)
    }

    /// JSON payload for the shell `<meta>` tag.
    pub fn to_meta_content(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Parse the shell `<meta>` payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not valid config JSON or carries an
    /// invalid base URL.
    pub fn from_meta_content(raw: &str) -> Result<Self, ConfigError> {
        let decoded: Self = serde_json::from_str(raw)?;
        Self::new(&decoded.content_base_url, decoded.typing_delay_ms)
    }

    /// Read the config embedded by the host, falling back to defaults.
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Self {
        let selector = format!("meta[name=\"{META_NAME}\"]");
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.query_selector(&selector).ok().flatten())
            .and_then(|el| el.get_attribute("content"));
        let Some(raw) = raw else {
            leptos::logging::warn!("no {META_NAME} meta tag, using default client config");
            return Self::default();
        };
        match Self::from_meta_content(&raw) {
            Ok(config) => config,
            Err(e) => {
                leptos::logging::warn!("ignoring malformed client config: {e}");
                Self::default()
            }
        }
    }
}

/// Trim whitespace and trailing slashes; require http(s) unless empty.
///
/// # Errors
///
/// Returns an error if a non-empty URL lacks an http(s) scheme.
pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidBaseUrl(raw.trim().to_owned()));
    }
    Ok(trimmed.to_owned())
}
