//! Assistant Error Types
//!
//! Failures of the generative features, integrated with the unified
//! `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::embedded_json::EmbeddedJsonError;

/// Assistant-specific result type alias
pub type AssistantResult<T> = Result<T, AssistantError>;

/// Assistant-specific error variants
#[derive(Debug, Error)]
pub enum AssistantError {
    /// No API key configured; detected before any request
    #[error("Please add your Gemini API key to use this feature.")]
    MissingApiKey,

    /// Trust score requested without any review text
    #[error("Please enter some reviews to calculate trust score.")]
    NoReviews,

    /// The endpoint answered with a non-success status
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// No response from the endpoint
    #[error("Network error: {0}")]
    Transport(String),

    /// Reply body is not the expected JSON
    #[error("Unexpected response from the AI service: {0}")]
    Decode(String),

    /// Generated text did not carry the requested JSON object
    #[error("Invalid response format")]
    MalformedResponse(#[from] EmbeddedJsonError),
}

impl AssistantError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AssistantError::MissingApiKey => ErrorKind::Configuration,
            AssistantError::NoReviews => ErrorKind::Validation,
            AssistantError::Upstream { .. } => ErrorKind::Server,
            AssistantError::Transport(_) => ErrorKind::Transport,
            AssistantError::Decode(_) | AssistantError::MalformedResponse(_) => {
                ErrorKind::MalformedResponse
            }
        }
    }

    /// HTTP status, when the endpoint answered
    pub fn status(&self) -> Option<u16> {
        match self {
            AssistantError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self.status() {
            Some(status) => err.with_status(status),
            None => err,
        }
    }

    /// Convert for display; transport failures use `fallback`
    pub fn into_app_error_or(self, fallback: &str) -> AppError {
        self.log();
        match self {
            AssistantError::Transport(_) => {
                AppError::new(ErrorKind::Transport, fallback.to_string()).with_source(self)
            }
            other => other.to_app_error(),
        }
    }

    fn log(&self) {
        if self.kind().is_unexpected() {
            tracing::error!(error = %self, "Assistant request failed");
        } else {
            tracing::warn!(error = %self, "Assistant request rejected");
        }
    }
}

impl From<AssistantError> for AppError {
    fn from(err: AssistantError) -> Self {
        err.log();
        err.to_app_error()
    }
}
