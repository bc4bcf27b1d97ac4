//! Rule-based assistant dialogue engine and panel state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The assistant answers from the static knowledge base only. A reply is
//! computed as soon as the learner sends a message, then held back for a
//! short "typing" delay by the panel before [`AssistantState::deliver`]
//! appends it.
//!
//! CANCELLATION
//! ============
//! Each pending reply carries the generation it was issued under. Closing
//! the panel or switching topic bumps the generation, so a reply that lands
//! afterwards is dropped instead of leaking into the fresh conversation.

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

use std::time::Duration;

use super::knowledge::{KnowledgeBase, TopicConfig};

/// Reply used when no trigger matches.
pub const FALLBACK_REPLY: &str =
    "I'm not sure how to answer that. Try asking about a specific term or for an 'example'.";

pub const DEFAULT_TYPING_DELAY_MS: u64 = 1500;
pub const MAX_TYPING_DELAY_MS: u64 = 10_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    fn assistant(text: impl Into<String>) -> Self {
        Self { sender: Sender::Assistant, text: text.into() }
    }

    fn user(text: impl Into<String>) -> Self {
        Self { sender: Sender::User, text: text.into() }
    }
}

/// Append-only message history for one open assistant session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConversationLog {
    messages: Vec<ChatMessage>,
}

impl ConversationLog {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }
}

/// Bounded delay before an assistant reply appears.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingDelay(Duration);

impl TypingDelay {
    /// Delay of `ms` milliseconds, clamped to [`MAX_TYPING_DELAY_MS`].
    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms.min(MAX_TYPING_DELAY_MS)))
    }

    pub fn as_duration(self) -> Duration {
        self.0
    }
}

impl Default for TypingDelay {
    fn default() -> Self {
        Self::from_millis(DEFAULT_TYPING_DELAY_MS)
    }
}

/// `"Hello {name}! {greeting}"`, using "there" when nobody is signed in.
pub fn greeting_text(config: &TopicConfig, user_name: Option<&str>) -> String {
    let name = user_name.filter(|n| !n.trim().is_empty()).unwrap_or("there");
    format!("Hello {name}! {}", config.greeting)
}

/// All tips as one message, blank-line separated, in declared order.
pub fn tips_text(config: &TopicConfig) -> String {
    config.tips.join("\n\n")
}

/// Reply for `input`: first matching rule, else [`FALLBACK_REPLY`].
pub fn reply_for(config: &TopicConfig, input: &str) -> String {
    config.match_rule(input).unwrap_or(FALLBACK_REPLY).to_owned()
}

/// Fresh log seeded with the greeting and tips for `topic_id`.
pub fn open_session(kb: &KnowledgeBase, topic_id: Option<&str>, user_name: Option<&str>) -> ConversationLog {
    let config = kb.resolve(topic_id);
    let mut log = ConversationLog::default();
    log.push(ChatMessage::assistant(greeting_text(config, user_name)));
    log.push(ChatMessage::assistant(tips_text(config)));
    log
}

/// Append the learner's message and return the reply to deliver later.
///
/// Blank input is ignored and leaves `log` untouched.
pub fn respond(kb: &KnowledgeBase, log: &mut ConversationLog, input: &str, topic_id: Option<&str>) -> Option<String> {
    if input.trim().is_empty() {
        return None;
    }
    log.push(ChatMessage::user(input));
    Some(reply_for(kb.resolve(topic_id), input))
}

/// Reply waiting out the typing delay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingReply {
    generation: u64,
    text: String,
}

impl PendingReply {
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Assistant panel state: open flag, active topic, log, and typing indicator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssistantState {
    open: bool,
    topic_id: Option<String>,
    log: ConversationLog,
    typing: bool,
    generation: u64,
}

impl AssistantState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    pub fn topic_id(&self) -> Option<&str> {
        self.topic_id.as_deref()
    }

    /// Open the panel. Only a closed → open transition reseeds the log.
    pub fn open(&mut self, kb: &KnowledgeBase, topic_id: Option<&str>, user_name: Option<&str>) {
        if self.open {
            return;
        }
        self.open = true;
        self.reseed(kb, topic_id, user_name);
    }

    /// Close the panel and cancel any pending reply.
    pub fn close(&mut self) {
        self.open = false;
        self.cancel_pending();
    }

    pub fn toggle(&mut self, kb: &KnowledgeBase, topic_id: Option<&str>, user_name: Option<&str>) {
        if self.open {
            self.close();
        } else {
            self.open(kb, topic_id, user_name);
        }
    }

    /// Follow a navigation context change. Returns `true` when the open
    /// conversation was reset for a new topic.
    pub fn sync_topic(&mut self, kb: &KnowledgeBase, topic_id: Option<&str>, user_name: Option<&str>) -> bool {
        if !self.open || self.topic_id.as_deref() == topic_id {
            return false;
        }
        self.reseed(kb, topic_id, user_name);
        true
    }

    /// Record the learner's message and start the typing indicator.
    ///
    /// Returns `None` when the panel is closed, a reply is already pending,
    /// or the input is blank.
    pub fn submit(&mut self, kb: &KnowledgeBase, input: &str) -> Option<PendingReply> {
        if !self.open || self.typing {
            return None;
        }
        let text = respond(kb, &mut self.log, input, self.topic_id.as_deref())?;
        self.typing = true;
        Some(PendingReply { generation: self.generation, text })
    }

    /// Append a pending reply if it still belongs to this conversation.
    pub fn deliver(&mut self, reply: PendingReply) -> bool {
        if !self.open || reply.generation != self.generation {
            return false;
        }
        self.log.push(ChatMessage::assistant(reply.text));
        self.typing = false;
        true
    }

    fn reseed(&mut self, kb: &KnowledgeBase, topic_id: Option<&str>, user_name: Option<&str>) {
        self.cancel_pending();
        self.topic_id = topic_id.map(str::to_owned);
        self.log = open_session(kb, topic_id, user_name);
    }

    fn cancel_pending(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.typing = false;
    }
}
