//! The send flow: question in, reply appended.

use std::sync::Arc;

use dsamentor_core::provider::{Provider, ProviderRequest, ProviderResponse};
use dsamentor_core::{Message, ProviderError};
use tracing::{info, warn};

use crate::session::ChatSession;

/// Shown when the provider answers with nothing.
pub const EMPTY_REPLY_TEXT: &str = "Sorry, I couldn't generate a response.";

/// Shown when the provider call fails.
pub const FAILURE_TEXT: &str = "Something went wrong while contacting the AI service.";

/// The user message and the reply produced for it.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub user: Message,
    pub reply: Message,
}

/// Drives one provider on behalf of chat sessions.
pub struct Tutor {
    provider: Arc<dyn Provider>,
}

impl Tutor {
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Ask once, without a session. Errors are returned, not recovered.
    pub async fn ask(&self, request: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        self.provider.complete(request).await
    }

    /// Submit `text` to `session`.
    ///
    /// Blank input is ignored and yields `None`. Otherwise the user message
    /// and exactly one reply are appended, in that order. Provider failures
    /// become a fixed apology message rather than an error.
    pub async fn send(&self, session: &mut ChatSession, text: &str) -> Option<Exchange> {
        if text.trim().is_empty() {
            return None;
        }

        let user = Message::user(text);
        session.transcript.push(user.clone());

        let request = ProviderRequest::new(text, session.level, session.topic.clone());
        let reply = match self.provider.complete(request).await {
            Ok(resp) if resp.reply.trim().is_empty() => Message::assistant(EMPTY_REPLY_TEXT),
            Ok(resp) => {
                info!(
                    session = %session.id,
                    provider = self.provider.name(),
                    model = %resp.model,
                    "Reply generated"
                );
                Message::assistant_with_code(resp.reply, resp.code_blocks)
            }
            Err(ProviderError::EmptyReply) => Message::assistant(EMPTY_REPLY_TEXT),
            Err(e) => {
                warn!(session = %session.id, error = %e, "Provider call failed");
                Message::assistant(FAILURE_TEXT)
            }
        };
        session.transcript.push(reply.clone());

        Some(Exchange { user, reply })
    }
}
