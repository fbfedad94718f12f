//! Username Value Object
//!
//! The public handle of a user. It is also the path segment of the profile
//! endpoint (`/user/:username`), so surrounding whitespace is stripped and
//! `/` is rejected.

use std::fmt;

use serde::Serialize;

use crate::error::{AccountError, AccountResult};

/// Validated username
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    pub fn new(raw: &str) -> AccountResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AccountError::InvalidInput("Username is required".into()));
        }
        if trimmed.contains('/') {
            return Err(AccountError::InvalidInput(
                "Username cannot contain '/'".into(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Route of this user's profile page
    pub fn profile_path(&self) -> String {
        format!("/user/{}", self.0)
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
