//! REST gateway for the tutorial content service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error, since content is only ever
//! fetched by pages mounted in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, ContentError>`; callers render the error
//! inline instead of panicking.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use super::error::ContentError;
use super::types::{TutorialDetail, TutorialSummary};
use crate::config::ClientConfig;

/// Everything except RFC 3986 unreserved characters is escaped in ids.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

fn tutorials_endpoint(base_url: &str) -> String {
    format!("{base_url}/api/tutorials")
}

fn tutorial_endpoint(base_url: &str, id: &str) -> String {
    let segment = utf8_percent_encode(id, PATH_SEGMENT);
    format!("{base_url}/api/tutorials/{segment}")
}

/// Fetch the ordered tutorial index from `GET /api/tutorials`.
///
/// # Errors
///
/// Returns a `ContentError` on network failure, non-success status, or an
/// undecodable body.
pub async fn fetch_tutorial_index(config: &ClientConfig) -> Result<Vec<TutorialSummary>, ContentError> {
    let url = tutorials_endpoint(&config.content_base_url);
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ContentError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ContentError::from_status(resp.status(), None));
        }
        resp.json::<Vec<TutorialSummary>>()
            .await
            .map_err(|e| ContentError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ContentError::Network("not available on server".to_owned()))
    }
}

/// Fetch one tutorial from `GET /api/tutorials/{id}`.
///
/// # Errors
///
/// Returns `ContentError::NotFound` on 404, otherwise a fetch/decode failure.
pub async fn fetch_tutorial_detail(config: &ClientConfig, id: &str) -> Result<TutorialDetail, ContentError> {
    let url = tutorial_endpoint(&config.content_base_url, id);
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ContentError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ContentError::from_status(resp.status(), Some(id)));
        }
        resp.json::<TutorialDetail>()
            .await
            .map_err(|e| ContentError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, id);
        Err(ContentError::Network("not available on server".to_owned()))
    }
}
