//! Community Error Types
//!
//! Community-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::input::MissingFields;
use platform::client::GatewayError;
use thiserror::Error;

/// Community-specific result type alias
pub type CommunityResult<T> = Result<T, CommunityError>;

/// Community-specific error variants
#[derive(Debug, Error)]
pub enum CommunityError {
    /// Required form fields left blank
    #[error(transparent)]
    MissingFields(#[from] MissingFields),

    /// Post not found
    #[error("Post not found")]
    PostNotFound,

    /// Exchange request not found
    #[error("Exchange request not found")]
    ExchangeRequestNotFound,

    /// Backend call failed
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl CommunityError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CommunityError::MissingFields(_) => ErrorKind::Validation,
            CommunityError::PostNotFound | CommunityError::ExchangeRequestNotFound => {
                ErrorKind::NotFound
            }
            CommunityError::Gateway(e) => e.kind(),
        }
    }

    /// HTTP status, when the backend answered
    pub fn status(&self) -> Option<u16> {
        match self {
            CommunityError::Gateway(e) => e.status(),
            _ => None,
        }
    }

    /// Server-provided message, when the backend sent one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            CommunityError::Gateway(e) => e.server_message(),
            _ => None,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            CommunityError::Gateway(e) => AppError::from(e.clone()),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Convert for display; backend failures without a server message use
    /// `fallback`
    pub fn into_app_error_or(self, fallback: &str) -> AppError {
        self.log();
        match self {
            CommunityError::Gateway(e) => e.into_app_error_or(fallback),
            other => other.to_app_error(),
        }
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        match self {
            CommunityError::Gateway(e) if e.kind().is_unexpected() => {
                tracing::error!(error = %e, "Community request failed");
            }
            CommunityError::Gateway(e) if e.is_unauthorized() => {
                tracing::warn!(error = %e, "Community request unauthorized");
            }
            _ => {
                tracing::debug!(error = %self, "Community error");
            }
        }
    }
}

impl From<CommunityError> for AppError {
    fn from(err: CommunityError) -> Self {
        err.log();
        err.to_app_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(
            CommunityError::MissingFields(MissingFields::new(vec!["title"])).kind(),
            ErrorKind::Validation
        );
        assert_eq!(CommunityError::PostNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(
            CommunityError::Gateway(GatewayError::Status {
                status: 400,
                message: Some("Already joined".into())
            })
            .kind(),
            ErrorKind::Conflict
        );
    }

    #[test]
    fn test_status_and_message() {
        let err = CommunityError::Gateway(GatewayError::Status {
            status: 400,
            message: Some("Already joined".into()),
        });
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.server_message(), Some("Already joined"));
        assert_eq!(CommunityError::PostNotFound.status(), None);
    }

    #[test]
    fn test_validation_keeps_message() {
        let app = CommunityError::MissingFields(MissingFields::new(vec!["title", "content"]))
            .into_app_error_or("Error posting...");
        assert_eq!(app.kind(), ErrorKind::Validation);
        assert!(app.message().starts_with("Please fill in all required fields"));
    }
}
