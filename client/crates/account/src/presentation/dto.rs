//! Form DTOs

use std::fmt;

pub use crate::domain::entity::new_account::SignUpFields;

/// Sign-in form input
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SignInDraft {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for SignInDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInDraft")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Navigation target after signing out
pub const SIGNED_OUT_ROUTE: &str = "/auth";

// ============================================================================
// Notice texts
// ============================================================================

pub const SIGNED_IN: &str = "You've successfully signed in.";
pub const SIGN_IN_FAILED: &str = "Invalid credentials";
pub const ACCOUNT_CREATED: &str = "Welcome to bytee! Let's get started.";
pub const SIGN_IN_REQUIRED: &str = "Your account has been created. Please sign in to continue.";
pub const SIGN_UP_FAILED: &str = "Something went wrong";
pub const PROFILE_LOAD_FAILED: &str = "Failed to load user profile";
