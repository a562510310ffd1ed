//! # DSA Mentor Knowledge
//!
//! Static teaching material and the code that turns it into replies:
//!
//! - [`topics`]: the sidebar topic tree
//! - [`explanations`]: per-topic, per-level explanation records
//! - [`catalog`]: normalized lookup over those records
//! - [`assembler`]: record → reply text in the formatter's vocabulary
//! - [`quick`] and [`quiz`]: canned answers and generated quizzes

pub mod assembler;
pub mod catalog;
pub mod explanations;
pub mod quick;
pub mod quiz;
pub mod topics;

pub use assembler::{AssembledReply, assemble, build_explanation_text, fallback_text};
pub use catalog::{Explanation, ExplanationCatalog, normalize_key};
pub use explanations::{CodeExample, Complexity, ExplanationRecord, TopicExplanations};
pub use quick::quick_answer;
pub use quiz::{build_quiz, wants_quiz};
pub use topics::{TOPICS, Topic, display_title, resolve_topic};
