//! Coach Chat Page

use platform::notify::NotificationSink;

use crate::application::ChatCoachUseCase;
use crate::domain::generator::TextGenerator;
use crate::domain::transcript::{ChatMessage, Transcript};
use crate::presentation::dto::COACH_FAILED;
use crate::presentation::state::AssistantAppState;

/// Chat coach View Binding
pub struct CoachChatPage<G> {
    state: AssistantAppState<G>,
    transcript: Transcript,
    input: String,
    pending: bool,
}

impl<G: TextGenerator> CoachChatPage<G> {
    pub fn new(state: AssistantAppState<G>) -> Self {
        Self {
            state,
            transcript: Transcript::new(),
            input: String::new(),
            pending: false,
        }
    }

    pub fn messages(&self) -> impl Iterator<Item = &ChatMessage> {
        self.transcript.messages()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    /// True while a reply is awaited
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Send the input box
    ///
    /// The input is cleared as soon as the message is accepted, whether or
    /// not the reply arrives. Returns `true` when a reply was appended.
    pub async fn send(&mut self, sink: &dyn NotificationSink) -> bool {
        let input = self.input.clone();
        let coach = ChatCoachUseCase::new(self.state.generator.clone());

        self.pending = true;
        let turns_before = self.transcript.turns().len();
        let result = coach.send(&mut self.transcript, &input).await;
        self.pending = false;

        if self.transcript.turns().len() > turns_before {
            self.input.clear();
        }
        match result {
            Ok(replied) => replied,
            Err(err) => {
                sink.report(&err.into_app_error_or(COACH_FAILED));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prompt::COACH_GREETING;
    use crate::domain::transcript::Role;
    use crate::error::AssistantError;
    use crate::test_support::{ScriptedGenerator, state};
    use platform::notify::{Level, Notice, RecordingSink};

    #[tokio::test]
    async fn test_greeting_then_reply() {
        let generator = ScriptedGenerator::new();
        generator.reply(Ok("Practice out loud.".into()));
        let sink = RecordingSink::new();

        let mut page = state(generator).coach_chat_page();
        assert_eq!(page.messages().next().unwrap().content, COACH_GREETING);

        page.input_mut().push_str("Interview tips?");
        assert!(page.send(&sink).await);

        let roles: Vec<_> = page.messages().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::Coach, Role::User, Role::Coach]);
        assert_eq!(page.input(), "");
        assert!(!page.is_pending());
        assert!(sink.notices().is_empty());
    }

    #[tokio::test]
    async fn test_upstream_failure_reported() {
        let generator = ScriptedGenerator::new();
        generator.reply(Err(AssistantError::Upstream {
            status: 429,
            message: "Quota exceeded".into(),
        }));
        let sink = RecordingSink::new();

        let mut page = state(generator).coach_chat_page();
        page.input_mut().push_str("Hi");
        assert!(!page.send(&sink).await);

        assert_eq!(page.messages().count(), 2);
        assert_eq!(page.input(), "");
        assert_eq!(sink.last().unwrap(), Notice::new(Level::Error, "Quota exceeded"));
    }

    #[tokio::test]
    async fn test_missing_key_keeps_input() {
        let sink = RecordingSink::new();

        let mut page = state(ScriptedGenerator::unconfigured()).coach_chat_page();
        page.input_mut().push_str("Hi");
        assert!(!page.send(&sink).await);

        assert_eq!(page.input(), "Hi");
        assert_eq!(page.messages().count(), 1);
        assert_eq!(sink.last().unwrap().level, Level::Error);
    }
}
