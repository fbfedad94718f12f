//! New Account Entity
//!
//! Registration data after the sign-up form rules have been applied.

use std::fmt;

use kernel::input::{non_blank, parse_optional_number, require_filled, split_list};

use crate::domain::value_object::{password::Password, username::Username};
use crate::error::AccountResult;

/// Raw sign-up form fields, as typed
#[derive(Clone, Default, PartialEq)]
pub struct SignUpFields {
    pub username: String,
    pub password: String,
    pub email: String,
    pub bio: String,
    pub about: String,
    /// Comma-separated
    pub tags: String,
    pub passing_year: String,
    /// Comma-separated
    pub skills_required: String,
    /// Comma-separated
    pub skills_offered: String,
}

impl fmt::Debug for SignUpFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpFields")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Validated registration
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: Username,
    pub password: Password,
    pub email: String,
    /// Omitted from the request when blank
    pub bio: Option<String>,
    /// Omitted from the request when blank
    pub about: Option<String>,
    pub tags: Vec<String>,
    /// Omitted from the request when blank or not a number
    pub passing_year: Option<i32>,
    pub skills_required: Vec<String>,
    pub skills_offered: Vec<String>,
}

impl NewAccount {
    /// Apply the form rules
    ///
    /// Username, password and email are required. List fields are split on
    /// commas with blank pieces dropped.
    pub fn from_fields(fields: &SignUpFields) -> AccountResult<Self> {
        require_filled(&[
            ("username", fields.username.as_str()),
            ("password", fields.password.as_str()),
            ("email", fields.email.as_str()),
        ])?;

        Ok(Self {
            username: Username::new(&fields.username)?,
            password: Password::new(fields.password.clone())?,
            email: fields.email.trim().to_string(),
            bio: non_blank(&fields.bio),
            about: non_blank(&fields.about),
            tags: split_list(&fields.tags),
            passing_year: parse_optional_number(&fields.passing_year),
            skills_required: split_list(&fields.skills_required),
            skills_offered: split_list(&fields.skills_offered),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AccountError;

    fn fields() -> SignUpFields {
        SignUpFields {
            username: "ada".into(),
            password: "secret".into(),
            email: "ada@example.com".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_optional_fields_absent_when_blank() {
        let account = NewAccount::from_fields(&fields()).unwrap();
        assert_eq!(account.bio, None);
        assert_eq!(account.about, None);
        assert_eq!(account.passing_year, None);
        assert!(account.tags.is_empty());
        assert!(account.skills_offered.is_empty());
    }

    #[test]
    fn test_lists_and_year_parsed() {
        let mut input = fields();
        input.tags = "rust, , web ".into();
        input.skills_offered = "React, Node".into();
        input.passing_year = "2026".into();

        let account = NewAccount::from_fields(&input).unwrap();
        assert_eq!(account.tags, vec!["rust", "web"]);
        assert_eq!(account.skills_offered, vec!["React", "Node"]);
        assert_eq!(account.passing_year, Some(2026));
    }

    #[test]
    fn test_required_fields() {
        let mut input = fields();
        input.email = " ".into();
        let err = NewAccount::from_fields(&input).unwrap_err();
        match err {
            AccountError::MissingFields(missing) => assert_eq!(missing.fields(), &["email"]),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
