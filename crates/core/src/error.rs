//! Error types for the DSA Mentor domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! The formatter and the catalog have no error outcomes; only reply
//! generation and startup can fail.

use thiserror::Error;

/// The top-level error type for DSA Mentor startup and CLI operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures while producing a reply.
///
/// All of these are recovered where they occur: the chat session turns them
/// into a single apology message, the stateless proxy into a 500 payload.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("API request failed: {message} (status: {status_code})")]
    Api { status_code: u16, message: String },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response from provider: {0}")]
    InvalidResponse(String),

    #[error("Provider returned an empty reply")]
    EmptyReply,
}

impl ProviderError {
    /// HTTP status that best describes this failure to a client.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Api { status_code, .. } => *status_code,
            Self::AuthenticationFailed(_) => 401,
            Self::NotConfigured(_) => 503,
            Self::Network(_) | Self::InvalidResponse(_) => 502,
            Self::EmptyReply => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_displays_correctly() {
        let err = ProviderError::Api {
            status_code: 429,
            message: "Resource exhausted".into(),
        };
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("Resource exhausted"));
    }

    #[test]
    fn io_and_serde_errors_convert() {
        let io: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "notes.md").into();
        assert!(matches!(io, Error::Io(_)));
        assert!(io.to_string().starts_with("I/O error"));

        let serde: Error = serde_json::from_str::<u8>("nope").unwrap_err().into();
        assert!(matches!(serde, Error::Serialization(_)));
    }

    #[test]
    fn status_codes_follow_failure_kind() {
        assert_eq!(ProviderError::AuthenticationFailed("bad key".into()).status_code(), 401);
        assert_eq!(ProviderError::Network("reset".into()).status_code(), 502);
        assert_eq!(
            ProviderError::Api { status_code: 404, message: "no model".into() }.status_code(),
            404
        );
    }
}
