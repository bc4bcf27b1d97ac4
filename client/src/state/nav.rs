//! Navigation state machine for the top-level view.
//!
//! DESIGN
//! ======
//! `View` is an immutable tagged value. Every navigation action produces a
//! brand-new `View` through [`transition`]; nothing mutates a view in place
//! and no transition performs I/O. Whichever page mounts for the new view is
//! responsible for fetching its own data.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Course title carried by the certificate view. Never blank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseTitle(String);

impl CourseTitle {
    /// Build a title, rejecting empty or whitespace-only input.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return None;
        }
        Some(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The single active top-level screen and its payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Home,
    TutorialList,
    TutorialDetail {
        topic_id: String,
    },
    Exercises,
    Certificate {
        title: CourseTitle,
    },
}

impl View {
    /// Topic id the assistant should use for this view, if any.
    pub fn topic_id(&self) -> Option<&str> {
        match self {
            Self::TutorialDetail { topic_id } => Some(topic_id.as_str()),
            _ => None,
        }
    }
}

/// Closed set of user navigation actions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavAction {
    Home,
    TutorialList,
    Exercises,
    Tutorial(String),
    Certificate(CourseTitle),
    BackToList,
}

/// Apply `action` to `current`, producing the next view.
///
/// Total over every (view, action) pair. Every action currently names its
/// destination outright, so the current view does not influence the result.
pub fn transition(_current: &View, action: NavAction) -> View {
    match action {
        NavAction::Home => View::Home,
        NavAction::TutorialList | NavAction::BackToList => View::TutorialList,
        NavAction::Exercises => View::Exercises,
        NavAction::Tutorial(topic_id) => View::TutorialDetail { topic_id },
        NavAction::Certificate(title) => View::Certificate { title },
    }
}

/// Fold `actions` left-to-right starting from `View::Home`.
pub fn replay<I>(actions: I) -> View
where
    I: IntoIterator<Item = NavAction>,
{
    actions
        .into_iter()
        .fold(View::Home, |view, action| transition(&view, action))
}
