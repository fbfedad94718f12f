//! Trust Score Use Case
//!
//! Asks the generator to rate a user from free-text reviews and reads the
//! JSON object embedded in its reply.

use std::sync::Arc;

use crate::domain::embedded_json::parse_embedded_json;
use crate::domain::generator::TextGenerator;
use crate::domain::prompt::trust_prompt;
use crate::domain::trust::TrustAssessment;
use crate::error::{AssistantError, AssistantResult};

/// Trust score use case
pub struct TrustScoreUseCase<G: TextGenerator> {
    generator: Arc<G>,
}

impl<G: TextGenerator> TrustScoreUseCase<G> {
    pub fn new(generator: Arc<G>) -> Self {
        Self { generator }
    }

    pub async fn estimate(&self, reviews: &str) -> AssistantResult<TrustAssessment> {
        if reviews.trim().is_empty() {
            return Err(AssistantError::NoReviews);
        }
        self.generator.ensure_configured()?;

        let reply = self.generator.generate(&trust_prompt(reviews)).await?;
        let assessment = parse_embedded_json(&reply).and_then(TrustAssessment::from_json)?;

        tracing::info!(score = assessment.score, "Trust score estimated");
        Ok(assessment)
    }
}
