//! Wire DTOs for the tutorial content service.
//!
//! DESIGN
//! ======
//! These mirror the JSON the content service returns for
//! `GET /api/tutorials` and `GET /api/tutorials/{id}`. Index order is
//! display order, so the summary list is kept as a plain `Vec`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// One entry of the tutorial index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorialSummary {
    /// Stable topic identifier (e.g. `"html"`).
    pub id: String,
    /// Display title.
    pub title: String,
}

/// A full tutorial as returned by the detail endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorialDetail {
    /// Stable topic identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Language tag driving the live preview (e.g. `"html"`, `"python"`).
    pub language: String,
    /// Markdown lesson body.
    #[serde(default)]
    pub content: String,
    /// Initial example source for the editor.
    #[serde(default)]
    pub code: String,
}
