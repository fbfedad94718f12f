//! Domain Layer
//!
//! Prompts, the chat transcript, trust assessments, and the text
//! generator port.

pub mod embedded_json;
pub mod generator;
pub mod prompt;
pub mod transcript;
pub mod trust;

// Re-exports
pub use embedded_json::{EmbeddedJsonError, parse_embedded_json};
pub use generator::{LocalTextGenerator, TextGenerator};
pub use transcript::{ChatMessage, Role, Transcript};
pub use trust::TrustAssessment;
