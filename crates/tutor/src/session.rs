//! One learner's chat session.

use chrono::{DateTime, Utc};
use dsamentor_core::{Level, SessionId, Transcript};
use serde::Serialize;

/// Selected level and topic plus the transcript so far.
#[derive(Debug, Clone, Serialize)]
pub struct ChatSession {
    pub id: SessionId,
    pub level: Level,
    /// Topic picked in the sidebar; `None` means general questions.
    pub topic: Option<String>,
    pub transcript: Transcript,
    pub created_at: DateTime<Utc>,
}

impl ChatSession {
    pub fn new(level: Level) -> Self {
        Self {
            id: SessionId::new(),
            level,
            topic: None,
            transcript: Transcript::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_topic(mut self, topic: Option<String>) -> Self {
        self.set_topic(topic);
        self
    }

    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    /// Select a topic. Blank names clear the selection.
    pub fn set_topic(&mut self, topic: Option<String>) {
        self.topic = topic
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(Level::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_empty() {
        let session = ChatSession::new(Level::Advanced);
        assert_eq!(session.level, Level::Advanced);
        assert!(session.topic.is_none());
        assert!(session.transcript.is_empty());
    }

    #[test]
    fn blank_topic_clears_selection() {
        let mut session = ChatSession::default().with_topic(Some("  Stack ".into()));
        assert_eq!(session.topic.as_deref(), Some("Stack"));
        session.set_topic(Some("   ".into()));
        assert!(session.topic.is_none());
    }
}
