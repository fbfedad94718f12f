//! Account Error Types
//!
//! Account-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::input::MissingFields;
use platform::client::GatewayError;
use thiserror::Error;

/// Account-specific result type alias
pub type AccountResult<T> = Result<T, AccountError>;

/// Account-specific error variants
#[derive(Debug, Error)]
pub enum AccountError {
    /// Rejected locally before any request
    #[error("{0}")]
    InvalidInput(String),

    /// Required form fields left blank
    #[error(transparent)]
    MissingFields(#[from] MissingFields),

    /// No such user
    #[error("User not found")]
    UserNotFound,

    /// Operation needs a stored credential
    #[error("Not signed in")]
    NotSignedIn,

    /// Backend call failed
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl AccountError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::InvalidInput(_) | AccountError::MissingFields(_) => {
                ErrorKind::Validation
            }
            AccountError::UserNotFound => ErrorKind::NotFound,
            AccountError::NotSignedIn => ErrorKind::Unauthorized,
            AccountError::Gateway(e) => e.kind(),
        }
    }

    /// Server-provided message, when the backend sent one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            AccountError::Gateway(e) => e.server_message(),
            _ => None,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            AccountError::Gateway(e) => AppError::from(e.clone()),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Convert for display; backend failures without a server message use
    /// `fallback`
    pub fn into_app_error_or(self, fallback: &str) -> AppError {
        self.log();
        match self {
            AccountError::Gateway(e) => e.into_app_error_or(fallback),
            other => other.to_app_error(),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AccountError::Gateway(e) if e.kind().is_unexpected() => {
                tracing::error!(error = %e, "Account request failed");
            }
            AccountError::Gateway(e) if e.is_unauthorized() => {
                tracing::warn!(error = %e, "Account request unauthorized");
            }
            _ => {
                tracing::debug!(error = %self, "Account error");
            }
        }
    }
}

impl From<AccountError> for AppError {
    fn from(err: AccountError) -> Self {
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
            AccountError::InvalidInput("Username is required".into()).kind(),
            ErrorKind::Validation
        );
        assert_eq!(AccountError::UserNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(
            AccountError::Gateway(GatewayError::Status {
                status: 401,
                message: None
            })
            .kind(),
            ErrorKind::Unauthorized
        );
    }

    #[test]
    fn test_fallback_only_without_server_message() {
        let err = AccountError::Gateway(GatewayError::Status {
            status: 409,
            message: Some("Username already taken".into()),
        });
        assert_eq!(
            err.into_app_error_or("Something went wrong").message(),
            "Username already taken"
        );

        let err = AccountError::Gateway(GatewayError::Status {
            status: 500,
            message: None,
        });
        let app = err.into_app_error_or("Something went wrong");
        assert_eq!(app.message(), "Something went wrong");
        assert_eq!(app.status(), Some(500));
    }

    #[test]
    fn test_local_errors_keep_their_message() {
        let app: AppError = AccountError::MissingFields(MissingFields::new(vec!["username"])).into();
        assert_eq!(app.kind(), ErrorKind::Validation);
        assert!(app.message().contains("username"));
    }
}
