//! # DSA Mentor Core
//!
//! Domain types, the message-content formatter, and the provider trait for
//! the DSA Mentor tutoring chat. This crate has no framework dependencies;
//! every other crate in the workspace depends inward on it.
//!
//! ## Layout
//!
//! - [`format`]: raw reply text → ordered display segments
//! - [`message`]: messages, code samples, and the append-only transcript
//! - [`level`]: explanation difficulty levels
//! - [`provider`]: the abstraction over reply generators (local or remote)
//! - [`error`]: error taxonomy shared across crates

pub mod error;
pub mod format;
pub mod level;
pub mod message;
pub mod provider;

// Re-export key types at crate root for ergonomics
pub use error::{Error, ProviderError, Result};
pub use format::{ContentSegment, InlineSpan, format};
pub use level::Level;
pub use message::{CodeSample, Message, Role, SessionId, Transcript};
pub use provider::{Provider, ProviderRequest, ProviderResponse};
