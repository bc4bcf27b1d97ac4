//! Content gateway failure taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Every variant is recoverable: the requesting page renders
//! [`ContentError::user_message`] inline and stays usable. There is no retry
//! loop.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("content request failed: {0}")]
    Network(String),

    #[error("content service responded with status {0}")]
    Status(u16),

    #[error("content response could not be decoded: {0}")]
    Decode(String),

    #[error("tutorial `{id}` not found")]
    NotFound { id: String },
}

impl ContentError {
    /// Classify a non-success HTTP status. A 404 on a detail request is
    /// `NotFound`; everything else is a plain status failure.
    pub fn from_status(status: u16, requested_id: Option<&str>) -> Self {
        match (status, requested_id) {
            (404, Some(id)) => Self::NotFound { id: id.to_owned() },
            _ => Self::Status(status),
        }
    }

    /// Inline message for a failed tutorial detail load.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound { .. } => "Error: Could not find this tutorial.".to_owned(),
            other => format!("Error: {other}"),
        }
    }
}

/// Inline message for a failed tutorial index load.
pub const INDEX_UNAVAILABLE_MESSAGE: &str = "Error: Could not load tutorials. Is the backend server running?";
