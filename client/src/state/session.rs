//! Session controller: the one owner of view, learner, tutorial load state,
//! editor buffer, and assistant conversation.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides a single `RwSignal<Session>` through Leptos context. Pages
//! and components read derived slices through `Memo`s and mutate only through
//! the methods below, so every invariant lives in one place.
//!
//! DESIGN
//! ======
//! - Navigation never performs I/O. A detail page asks for a [`FetchTicket`]
//!   when it mounts and hands the result back with the same ticket.
//! - `nav_seq` advances on every dispatch, including repeated navigation to
//!   an equal view, so the mounted page always re-runs its fetch.
//! - The assistant follows the active topic on every navigation.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::logging::log;

use crate::net::error::ContentError;
use crate::net::types::TutorialDetail;
use crate::state::assistant::{AssistantState, PendingReply};
use crate::state::auth::Learner;
use crate::state::knowledge::KnowledgeBase;
use crate::state::nav::{CourseTitle, NavAction, View, transition};
use crate::state::preview::{self, PreviewOutput};
use crate::state::tutorial::{EditorBuffer, FetchTicket, TutorialLoad};

/// Result of the certificate gate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CertificateAccess {
    Granted { learner_name: String, title: CourseTitle },
    Denied,
}

#[derive(Clone, Debug)]
pub struct Session {
    kb: Arc<KnowledgeBase>,
    view: View,
    nav_seq: u64,
    learner: Option<Learner>,
    tutorial: TutorialLoad,
    next_fetch_seq: u64,
    assistant: AssistantState,
}

impl Session {
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        Self {
            kb,
            view: View::Home,
            nav_seq: 0,
            learner: None,
            tutorial: TutorialLoad::Idle,
            next_fetch_seq: 0,
            assistant: AssistantState::default(),
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn nav_seq(&self) -> u64 {
        self.nav_seq
    }

    pub fn learner(&self) -> Option<&Learner> {
        self.learner.as_ref()
    }

    pub fn learner_name(&self) -> Option<&str> {
        self.learner.as_ref().map(Learner::name)
    }

    pub fn tutorial(&self) -> &TutorialLoad {
        &self.tutorial
    }

    pub fn editor(&self) -> Option<&EditorBuffer> {
        self.tutorial.editor()
    }

    pub fn assistant(&self) -> &AssistantState {
        &self.assistant
    }

    // =========================================================================
    // Navigation and identity
    // =========================================================================

    pub fn dispatch(&mut self, action: NavAction) {
        self.view = transition(&self.view, action);
        self.nav_seq = self.nav_seq.wrapping_add(1);
        self.tutorial = TutorialLoad::Idle;
        let name = self.learner.as_ref().map(Learner::name);
        self.assistant.sync_topic(&self.kb, self.view.topic_id(), name);
    }

    /// Sign in under a trimmed, non-blank name. Returns `false` for blank input.
    pub fn sign_in(&mut self, raw_name: &str) -> bool {
        match Learner::sign_in(raw_name) {
            Some(learner) => {
                self.learner = Some(learner);
                true
            }
            None => false,
        }
    }

    pub fn sign_out(&mut self) {
        self.learner = None;
        self.dispatch(NavAction::Home);
    }

    pub fn certificate_access(&self) -> CertificateAccess {
        match (&self.view, &self.learner) {
            (View::Certificate { title }, Some(learner)) => CertificateAccess::Granted {
                learner_name: learner.name().to_owned(),
                title: title.clone(),
            },
            _ => CertificateAccess::Denied,
        }
    }

    // =========================================================================
    // Tutorial content
    // =========================================================================

    /// Issue a ticket for the current detail view. `None` off a detail view.
    pub fn begin_tutorial_fetch(&mut self) -> Option<FetchTicket> {
        let topic_id = self.view.topic_id()?.to_owned();
        self.next_fetch_seq = self.next_fetch_seq.wrapping_add(1);
        let ticket = FetchTicket::new(topic_id, self.next_fetch_seq);
        self.tutorial = TutorialLoad::Loading { ticket: ticket.clone() };
        Some(ticket)
    }

    /// Apply a fetch result. Returns `false` when the ticket is stale.
    pub fn finish_tutorial_fetch(&mut self, ticket: &FetchTicket, result: Result<TutorialDetail, ContentError>) -> bool {
        let applied = self.view.topic_id() == Some(ticket.topic_id()) && self.tutorial.resolve(ticket, result);
        if !applied {
            log!("discarding stale tutorial result for {}", ticket.topic_id());
        }
        applied
    }

    pub fn edit_code(&mut self, text: impl Into<String>) {
        if let Some(editor) = self.tutorial.editor_mut() {
            editor.set(text);
        }
    }

    /// Restore the editor to the tutorial's example code.
    pub fn reset_code(&mut self) {
        let Some(code) = self.tutorial.detail().map(|detail| detail.code.clone()) else {
            return;
        };
        self.edit_code(code);
    }

    /// Output for the current editor contents, once a tutorial is loaded.
    pub fn preview(&self) -> Option<PreviewOutput> {
        let detail = self.tutorial.detail()?;
        let editor = self.tutorial.editor()?;
        Some(preview::render(&detail.language, editor.text()))
    }

    // =========================================================================
    // Assistant
    // =========================================================================

    pub fn toggle_assistant(&mut self) {
        let name = self.learner.as_ref().map(Learner::name);
        self.assistant.toggle(&self.kb, self.view.topic_id(), name);
    }

    pub fn close_assistant(&mut self) {
        self.assistant.close();
    }

    pub fn submit_to_assistant(&mut self, input: &str) -> Option<PendingReply> {
        self.assistant.submit(&self.kb, input)
    }

    pub fn deliver_reply(&mut self, reply: PendingReply) -> bool {
        self.assistant.deliver(reply)
    }
}
