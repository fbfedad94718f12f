//! Chat Coach Use Case
//!
//! Sends the conversation so far to the generator and appends the reply.

use std::sync::Arc;

use crate::domain::generator::TextGenerator;
use crate::domain::prompt::coach_prompt;
use crate::domain::transcript::Transcript;
use crate::error::AssistantResult;

/// Shown when the model answered without any text
pub const EMPTY_REPLY_FALLBACK: &str = "I'm sorry, I couldn't generate a response.";

/// Chat coach use case
pub struct ChatCoachUseCase<G: TextGenerator> {
    generator: Arc<G>,
}

impl<G: TextGenerator> ChatCoachUseCase<G> {
    pub fn new(generator: Arc<G>) -> Self {
        Self { generator }
    }

    /// Add `input` to the transcript and append the coach's reply
    ///
    /// Blank input is ignored (`Ok(false)`). A missing API key is reported
    /// before the message is added. Once added, the user's message stays in
    /// the transcript even if the call fails.
    pub async fn send(&self, transcript: &mut Transcript, input: &str) -> AssistantResult<bool> {
        let message = input.trim();
        if message.is_empty() {
            return Ok(false);
        }
        self.generator.ensure_configured()?;

        transcript.push_user(message);
        let reply = self.generator.generate(&coach_prompt(transcript)).await?;

        let reply = if reply.trim().is_empty() {
            tracing::warn!("Coach reply was empty");
            EMPTY_REPLY_FALLBACK.to_string()
        } else {
            reply
        };
        transcript.push_coach(reply);
        tracing::debug!(turns = transcript.turns().len(), "Coach replied");
        Ok(true)
    }
}
