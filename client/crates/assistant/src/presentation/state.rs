//! Shared state for assistant pages

use std::sync::Arc;

use crate::domain::generator::TextGenerator;
use crate::presentation::{CoachChatPage, TrustScorePage};

/// Text generator shared by every assistant page
pub struct AssistantAppState<G> {
    pub generator: Arc<G>,
}

impl<G> Clone for AssistantAppState<G> {
    fn clone(&self) -> Self {
        Self {
            generator: Arc::clone(&self.generator),
        }
    }
}

impl<G: TextGenerator> AssistantAppState<G> {
    pub fn new(generator: Arc<G>) -> Self {
        Self { generator }
    }

    pub fn coach_chat_page(&self) -> CoachChatPage<G> {
        CoachChatPage::new(self.clone())
    }

    pub fn trust_score_page(&self) -> TrustScorePage<G> {
        TrustScorePage::new(self.clone())
    }
}
