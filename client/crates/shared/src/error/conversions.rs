//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from common error types to [`AppError`].

use super::app_error::AppError;
use crate::input::MissingFields;

// ============================================================================
// Standard library conversions
// ============================================================================

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::transport("I/O operation failed").with_source(err)
    }
}

// ============================================================================
// Local validation
// ============================================================================

impl From<MissingFields> for AppError {
    fn from(err: MissingFields) -> Self {
        AppError::validation(err.to_string()).with_source(err)
    }
}

// ============================================================================
// serde_json conversions
// ============================================================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::malformed(format!("Unexpected response format: {}", err)).with_source(err)
    }
}

// ============================================================================
// reqwest conversions (feature-gated)
// ============================================================================

#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            let status = status.as_u16();
            return AppError::from_status(status, format!("Request failed with status {}", status))
                .with_source(err);
        }
        if err.is_decode() {
            return AppError::malformed("Response body could not be decoded").with_source(err);
        }
        // connect / timeout / request builder failures: nothing came back
        AppError::transport("Network error, please check your connection").with_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::kind::ErrorKind;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
        let app_err: AppError = io_err.into();
        assert_eq!(app_err.kind(), ErrorKind::Transport);
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let app_err: AppError = json_err.into();
        assert_eq!(app_err.kind(), ErrorKind::MalformedResponse);
    }

    #[test]
    fn test_missing_fields_conversion() {
        let missing = MissingFields::new(vec!["title"]);
        let app_err: AppError = missing.into();
        assert_eq!(app_err.kind(), ErrorKind::Validation);
        assert_eq!(
            app_err.message(),
            "Please fill in all required fields (title)"
        );
    }
}
