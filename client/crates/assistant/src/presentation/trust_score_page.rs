//! Trust Score Page

use platform::notify::NotificationSink;

use crate::application::TrustScoreUseCase;
use crate::domain::generator::TextGenerator;
use crate::domain::trust::TrustAssessment;
use crate::presentation::dto::{TRUST_FAILED, trust_calculated};
use crate::presentation::state::AssistantAppState;

/// Trust score View Binding
pub struct TrustScorePage<G> {
    state: AssistantAppState<G>,
    reviews: String,
    assessment: Option<TrustAssessment>,
    pending: bool,
}

impl<G: TextGenerator> TrustScorePage<G> {
    pub fn new(state: AssistantAppState<G>) -> Self {
        Self {
            state,
            reviews: String::new(),
            assessment: None,
            pending: false,
        }
    }

    pub fn reviews(&self) -> &str {
        &self.reviews
    }

    pub fn reviews_mut(&mut self) -> &mut String {
        &mut self.reviews
    }

    /// Latest successful assessment; kept when a later attempt fails
    pub fn assessment(&self) -> Option<&TrustAssessment> {
        self.assessment.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub async fn calculate(&mut self, sink: &dyn NotificationSink) -> bool {
        let use_case = TrustScoreUseCase::new(self.state.generator.clone());

        self.pending = true;
        let result = use_case.estimate(&self.reviews).await;
        self.pending = false;

        match result {
            Ok(assessment) => {
                sink.success(&trust_calculated(&assessment.display_score()));
                self.assessment = Some(assessment);
                true
            }
            Err(err) => {
                sink.report(&err.into_app_error_or(TRUST_FAILED));
                false
            }
        }
    }
}
