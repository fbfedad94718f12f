//! Password Value Object
//!
//! Password typed by the user, held only long enough to be sent to the
//! backend. Hashing and policy are server concerns; locally the password
//! only has to be non-empty.
//!
//! ## Security
//! - Memory is zeroized on drop
//! - Debug output is redacted

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{AccountError, AccountResult};

/// Clear-text password from user input
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Password(String);

impl Password {
    /// Wrap user input; an empty password is rejected
    ///
    /// Whitespace is significant and kept as typed.
    pub fn new(raw: String) -> AccountResult<Self> {
        if raw.is_empty() {
            return Err(AccountError::InvalidInput("Password is required".into()));
        }
        Ok(Self(raw))
    }

    /// Clear text, for the request body only
    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Password").field(&"[REDACTED]").finish()
    }
}
