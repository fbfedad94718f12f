//! Assistant Client Module
//!
//! Generative-text features backed by a single completion endpoint.
//!
//! Clean Architecture structure:
//! - `domain/` - Prompts, transcript, trust assessment, generator port
//! - `application/` - Chat coach and trust score use cases
//! - `infra/` - Gemini `generateContent` client
//! - `presentation/` - Page View Bindings
//!
//! ## Features
//! - Soft-skills chat coach with a running conversation
//! - Trust score (0-5) estimated from free-text reviews

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{AssistantError, AssistantResult};
pub use infra::gemini::GeminiClient;
pub use presentation::state::AssistantAppState;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use crate::domain::generator::TextGenerator;
    use crate::error::{AssistantError, AssistantResult};
    use crate::presentation::state::AssistantAppState;

    /// Generator replaying queued replies and recording every prompt
    pub struct ScriptedGenerator {
        configured: bool,
        replies: Mutex<VecDeque<AssistantResult<String>>>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedGenerator {
        pub fn new() -> Self {
            Self {
                configured: true,
                replies: Mutex::new(VecDeque::new()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        /// Generator without an API key
        pub fn unconfigured() -> Self {
            Self {
                configured: false,
                ..Self::new()
            }
        }

        pub fn reply(&self, reply: AssistantResult<String>) {
            self.replies.lock().unwrap().push_back(reply);
        }

        pub fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    impl TextGenerator for ScriptedGenerator {
        fn ensure_configured(&self) -> AssistantResult<()> {
            if self.configured {
                Ok(())
            } else {
                Err(AssistantError::MissingApiKey)
            }
        }

        async fn generate(&self, prompt: &str) -> AssistantResult<String> {
            self.ensure_configured()?;
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(AssistantError::Transport("no scripted reply".into())))
        }
    }

    pub fn state(generator: ScriptedGenerator) -> AssistantAppState<ScriptedGenerator> {
        AssistantAppState::new(Arc::new(generator))
    }
}
