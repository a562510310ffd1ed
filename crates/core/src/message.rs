//! Message and transcript domain types.
//!
//! These are the value objects that flow through a chat session:
//! the user submits a question → a user message is appended → a provider
//! produces a reply → an assistant message is appended.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::format::{ContentSegment, format};

/// Unique identifier for a chat session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The role of a message sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The learner
    User,
    /// The tutor
    Assistant,
}

/// A code sample attached to a message, displayed after its text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSample {
    pub language: String,
    pub code: String,
}

impl CodeSample {
    pub fn new(language: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            code: code.into(),
        }
    }
}

/// A single message in a transcript. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique message ID
    pub id: String,

    /// Who sent this message
    pub role: Role,

    /// The raw text content, in the formatter's markup vocabulary
    pub content: String,

    /// Code samples shown after the content
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub code_blocks: Vec<CodeSample>,

    /// Timestamp
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content.into(), Vec::new())
    }

    /// Create a new assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content.into(), Vec::new())
    }

    /// Create an assistant message with attached code samples.
    pub fn assistant_with_code(content: impl Into<String>, code_blocks: Vec<CodeSample>) -> Self {
        Self::new(Role::Assistant, content.into(), code_blocks)
    }

    fn new(role: Role, content: String, code_blocks: Vec<CodeSample>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content,
            code_blocks,
            timestamp: Utc::now(),
        }
    }

    /// Display segments: the formatted content followed by one code block
    /// per attached sample.
    pub fn segments(&self) -> Vec<ContentSegment> {
        let mut segments = format(&self.content);
        segments.extend(
            self.code_blocks
                .iter()
                .map(|sample| ContentSegment::code_block(&sample.language, sample.code.clone())),
        );
        segments
    }
}

/// The ordered, append-only message history of one session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message. This is the only mutation a transcript allows.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}
