//! Static per-topic assistant knowledge base.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loaded once at start-up from the embedded `knowledge.yaml` and shared
//! read-only (behind an `Arc`) by the session controller. Rule order in the
//! YAML document is significant and is preserved exactly.

#[cfg(test)]
#[path = "knowledge_test.rs"]
mod knowledge_test;

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Id of the fallback topic every knowledge base must define.
pub const DEFAULT_TOPIC: &str = "default";

const EMBEDDED_KNOWLEDGE: &str = include_str!("knowledge.yaml");

#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("knowledge base parse failed: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("knowledge base has no `default` topic")]
    MissingDefault,

    #[error("topic `{topic}` has an empty trigger")]
    EmptyTrigger { topic: String },
}

/// One trigger → response pair. Triggers are stored lowercased.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub trigger: String,
    pub response: String,
}

/// Greeting, tips, and ordered rules for one topic.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TopicConfig {
    pub greeting: String,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_ordered_rules")]
    pub rules: Vec<Rule>,
}

impl TopicConfig {
    /// Response bound to the first rule whose trigger occurs in `input`,
    /// compared case-insensitively. Declaration order breaks ties.
    pub fn match_rule(&self, input: &str) -> Option<&str> {
        let lowered = input.to_lowercase();
        self.rules
            .iter()
            .find(|rule| lowered.contains(rule.trigger.as_str()))
            .map(|rule| rule.response.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KnowledgeBase {
    default: TopicConfig,
    topics: HashMap<String, TopicConfig>,
}

impl KnowledgeBase {
    /// Parse the knowledge base compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded YAML is malformed or fails validation.
    pub fn embedded() -> Result<Self, KnowledgeError> {
        Self::from_yaml(EMBEDDED_KNOWLEDGE)
    }

    /// Parse and validate a knowledge base document.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed YAML, a missing `default` topic, or an
    /// empty trigger.
    pub fn from_yaml(raw: &str) -> Result<Self, KnowledgeError> {
        let topics: HashMap<String, TopicConfig> = serde_yaml::from_str(raw)?;
        Self::from_topics(topics)
    }

    fn from_topics(mut topics: HashMap<String, TopicConfig>) -> Result<Self, KnowledgeError> {
        for (topic, config) in &topics {
            if config.rules.iter().any(|rule| rule.trigger.is_empty()) {
                return Err(KnowledgeError::EmptyTrigger { topic: topic.clone() });
            }
        }
        let default = topics.remove(DEFAULT_TOPIC).ok_or(KnowledgeError::MissingDefault)?;
        Ok(Self { default, topics })
    }

    /// Embedded knowledge base, or a single generic topic if it fails to load.
    pub fn load_or_fallback() -> Self {
        match Self::embedded() {
            Ok(kb) => kb,
            Err(e) => {
                leptos::logging::warn!("assistant knowledge base unavailable, using fallback: {e}");
                Self::fallback()
            }
        }
    }

    /// Minimal knowledge base holding only the `default` topic.
    pub fn fallback() -> Self {
        let default = TopicConfig {
            greeting: "Hello! I'm your Code Assistant. How can I help you today?".to_owned(),
            tips: vec!["You can ask me for definitions, code examples, or best practices.".to_owned()],
            rules: Vec::new(),
        };
        Self {
            default,
            topics: HashMap::new(),
        }
    }

    /// Config for `topic_id` by exact match, falling back to `default`.
    pub fn resolve(&self, topic_id: Option<&str>) -> &TopicConfig {
        topic_id
            .and_then(|id| self.topics.get(id))
            .unwrap_or(&self.default)
    }
}

/// Read a YAML mapping into rules, keeping document order and lowercasing
/// triggers.
fn deserialize_ordered_rules<'de, D>(deserializer: D) -> Result<Vec<Rule>, D::Error>
where
    D: Deserializer<'de>,
{
    struct RulesVisitor;

    impl<'de> Visitor<'de> for RulesVisitor {
        type Value = Vec<Rule>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a mapping of trigger to response")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut rules = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((trigger, response)) = map.next_entry::<String, String>()? {
                rules.push(Rule {
                    trigger: trigger.to_lowercase(),
                    response,
                });
            }
            Ok(rules)
        }
    }

    deserializer.deserialize_map(RulesVisitor)
}
