//! Local tutor provider: answers from the built-in explanation tables.
//!
//! No network and no API key. A reply is chosen in this order:
//!
//! 1. a canned quick answer whose triggers all appear in the question
//! 2. a quiz, when the question asks for one and a topic resolves
//! 3. the assembled explanation for the topic
//! 4. the generic fallback text
//!
//! The topic is the one mentioned in the question, else the one selected in
//! the sidebar.

use async_trait::async_trait;
use dsamentor_core::error::ProviderError;
use dsamentor_core::provider::{Provider, ProviderRequest, ProviderResponse};
use dsamentor_knowledge::{
    ExplanationCatalog, assemble, build_quiz, fallback_text, quick_answer, wants_quiz,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

const MODEL_NAME: &str = "local-tutor";

pub struct LocalTutorProvider {
    catalog: Arc<ExplanationCatalog>,
    /// Simulated thinking time before each reply.
    delay: Duration,
}

impl LocalTutorProvider {
    pub fn new(catalog: Arc<ExplanationCatalog>) -> Self {
        Self {
            catalog,
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn answer(&self, request: &ProviderRequest) -> ProviderResponse {
        if let Some(reply) = quick_answer(&request.question) {
            debug!("Answering with a quick answer");
            return text_reply(reply.to_string());
        }

        let topic = self.catalog.detect_topic(&request.question).or_else(|| {
            request
                .topic
                .as_deref()
                .and_then(|t| self.catalog.explain(t, request.level))
                .map(|e| e.key)
        });

        if let Some(topic) = topic {
            if wants_quiz(&request.question) {
                if let Some(explanation) = self.catalog.explain(topic, request.level) {
                    debug!(topic, "Answering with a quiz");
                    return text_reply(build_quiz(&explanation));
                }
            }
            if let Some(reply) = assemble(&self.catalog, topic, request.level) {
                debug!(topic, level = %request.level, "Answering with an explanation");
                return ProviderResponse {
                    reply: reply.content,
                    code_blocks: reply.code_samples,
                    model: MODEL_NAME.into(),
                };
            }
        }

        text_reply(fallback_text(
            &self.catalog,
            request.topic.as_deref(),
            request.level,
        ))
    }
}

fn text_reply(reply: String) -> ProviderResponse {
    ProviderResponse {
        reply,
        code_blocks: Vec::new(),
        model: MODEL_NAME.into(),
    }
}

#[async_trait]
impl Provider for LocalTutorProvider {
    fn name(&self) -> &str {
        "local"
    }

    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.answer(&request))
    }
}
