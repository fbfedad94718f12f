//! Trust Assessment
//!
//! Score and rationale extracted from a generated reply.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::embedded_json::EmbeddedJsonError;

pub const MAX_SCORE: f64 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct TrustAssessment {
    /// 0.0 to 5.0
    pub score: f64,
    pub analysis: String,
}

#[derive(Debug, Deserialize)]
struct AssessmentRecord {
    score: Value,
    #[serde(default)]
    analysis: Option<String>,
}

impl TrustAssessment {
    /// Read `{score, analysis}`; the score is clamped to `0..=5`
    ///
    /// A score that is missing or not a finite number makes the whole
    /// reply unusable.
    pub fn from_json(value: Value) -> Result<Self, EmbeddedJsonError> {
        let record: AssessmentRecord =
            serde_json::from_value(value).map_err(|e| EmbeddedJsonError::Invalid(e.to_string()))?;

        let score = match &record.score {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
        .filter(|s| s.is_finite())
        .ok_or_else(|| EmbeddedJsonError::Invalid(format!("score is not a number: {}", record.score)))?;

        Ok(Self {
            score: score.clamp(0.0, MAX_SCORE),
            analysis: record.analysis.unwrap_or_default(),
        })
    }

    /// Score as shown to the user, e.g. `4.2/5`
    pub fn display_score(&self) -> String {
        format!("{:.1}/{}", self.score, MAX_SCORE)
    }
}
