//! Tutorial content load state and the learner's editor buffer.
//!
//! DESIGN
//! ======
//! A detail fetch is tagged with a [`FetchTicket`] when it is issued. Its
//! result is applied only while that exact ticket is still the pending one,
//! which discards slow responses for a tutorial the learner already left
//! (including A → B → A, where the topic ids alone would collide).

#[cfg(test)]
#[path = "tutorial_test.rs"]
mod tutorial_test;

use crate::net::error::ContentError;
use crate::net::types::{TutorialDetail, TutorialSummary};

/// Tag identifying one issued detail fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    topic_id: String,
    seq: u64,
}

impl FetchTicket {
    pub(crate) fn new(topic_id: impl Into<String>, seq: u64) -> Self {
        Self { topic_id: topic_id.into(), seq }
    }

    pub fn topic_id(&self) -> &str {
        &self.topic_id
    }
}

/// Learner-edited copy of a tutorial's example code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorBuffer {
    text: String,
}

impl EditorBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

/// Detail-view load lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TutorialLoad {
    /// No tutorial view is mounted.
    #[default]
    Idle,
    Loading {
        ticket: FetchTicket,
    },
    Ready {
        detail: TutorialDetail,
        editor: EditorBuffer,
    },
    Failed {
        error: ContentError,
    },
}

/// Coarse phase, cheap to compare in reactive memos.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Ready,
    Failed(String),
}

impl TutorialLoad {
    pub fn phase(&self) -> LoadPhase {
        match self {
            Self::Idle => LoadPhase::Idle,
            Self::Loading { .. } => LoadPhase::Loading,
            Self::Ready { .. } => LoadPhase::Ready,
            Self::Failed { error } => LoadPhase::Failed(error.user_message()),
        }
    }

    pub fn detail(&self) -> Option<&TutorialDetail> {
        match self {
            Self::Ready { detail, .. } => Some(detail),
            _ => None,
        }
    }

    pub fn editor(&self) -> Option<&EditorBuffer> {
        match self {
            Self::Ready { editor, .. } => Some(editor),
            _ => None,
        }
    }

    pub(crate) fn editor_mut(&mut self) -> Option<&mut EditorBuffer> {
        match self {
            Self::Ready { editor, .. } => Some(editor),
            _ => None,
        }
    }

    /// Apply a fetch result if `ticket` is still the pending one.
    pub(crate) fn resolve(&mut self, ticket: &FetchTicket, result: Result<TutorialDetail, ContentError>) -> bool {
        match self {
            Self::Loading { ticket: pending } if pending == ticket => {}
            _ => return false,
        }
        *self = match result {
            Ok(detail) => {
                let editor = EditorBuffer::new(detail.code.clone());
                Self::Ready { detail, editor }
            }
            Err(error) => Self::Failed { error },
        };
        true
    }
}

/// Tutorial index as seen by a list or ticker component.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum IndexLoad {
    #[default]
    Loading,
    Ready(Vec<TutorialSummary>),
    Failed(ContentError),
}

impl IndexLoad {
    pub fn from_result(result: Result<Vec<TutorialSummary>, ContentError>) -> Self {
        match result {
            Ok(index) => Self::Ready(index),
            Err(error) => Self::Failed(error),
        }
    }

    /// Loaded entries in index order; empty while loading or after failure.
    pub fn entries(&self) -> &[TutorialSummary] {
        match self {
            Self::Ready(index) => index,
            _ => &[],
        }
    }
}
