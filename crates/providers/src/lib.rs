//! Reply generators for DSA Mentor.
//!
//! All providers implement the `dsamentor_core::Provider` trait.
//! The router selects the correct provider based on configuration.

pub mod gemini;
pub mod local;
pub mod router;

pub use gemini::GeminiProvider;
pub use local::LocalTutorProvider;
pub use router::{ProviderRouter, build_from_config};
