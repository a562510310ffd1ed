//! Provider trait: the abstraction over reply generators.
//!
//! A Provider takes one learner question (plus the selected level and
//! topic) and produces one reply. Implementations: the local tutor, which
//! answers from static explanation data, and the Gemini proxy.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;
use crate::level::Level;
use crate::message::CodeSample;

/// A single reply request. One request is in flight per submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderRequest {
    /// The free-form question text
    pub question: String,

    /// Requested explanation depth
    #[serde(default)]
    pub level: Level,

    /// Topic selected in the sidebar, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

impl ProviderRequest {
    pub fn new(question: impl Into<String>, level: Level, topic: Option<String>) -> Self {
        Self {
            question: question.into(),
            level,
            topic,
        }
    }
}

/// A generated reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderResponse {
    /// Reply text in the formatter's markup vocabulary
    pub reply: String,

    /// Code samples to show after the reply text
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub code_blocks: Vec<CodeSample>,

    /// Which backend/model produced the reply
    pub model: String,
}

/// The core Provider trait.
///
/// The tutor and the gateway call `complete()` without knowing which
/// backend answers.
#[async_trait]
pub trait Provider: Send + Sync {
    /// A human-readable name for this provider (e.g., "local", "gemini").
    fn name(&self) -> &str;

    /// Produce a reply for one question.
    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, ProviderError>;

    /// Health check: can we reach the backend?
    async fn health_check(&self) -> Result<bool, ProviderError> {
        Ok(true)
    }
}
