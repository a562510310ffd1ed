//! Chat sessions for DSA Mentor.
//!
//! A [`ChatSession`] holds the learner's selected level and topic and the
//! append-only transcript. The [`Tutor`] runs one submission at a time:
//!
//! 1. ignore blank input
//! 2. append the user message
//! 3. ask the provider with the session's level and topic
//! 4. append exactly one reply (or a fallback message on failure)

pub mod session;
pub mod tutor;

pub use session::ChatSession;
pub use tutor::{EMPTY_REPLY_TEXT, Exchange, FAILURE_TEXT, Tutor};
