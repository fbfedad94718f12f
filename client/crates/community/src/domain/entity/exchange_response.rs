//! Exchange Response Entity
//!
//! A member's answer to an exchange request. Append-only from the client.

use chrono::{DateTime, Utc};
use kernel::id::{ExchangeResponseId, UserId};
use kernel::input::{parse_amount, require_filled, split_list};

use crate::error::CommunityResult;

/// Exchange response entity
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeResponse {
    pub id: ExchangeResponseId,
    pub responder_username: String,
    pub responder: Option<UserId>,
    pub message: String,
    pub skills_offered: Vec<String>,
    pub credits_offered: u32,
    pub created_at: Option<DateTime<Utc>>,
}

impl ExchangeResponse {
    /// Profile route of the responder
    pub fn responder_path(&self) -> String {
        format!("/user/{}", self.responder_username)
    }
}

/// Response form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExchangeResponseFields {
    pub message: String,
    pub credits_offered: String,
    /// Comma-separated
    pub skills_offered: String,
}

/// Validated new response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExchangeResponse {
    pub message: String,
    pub credits_offered: u32,
    pub skills_offered: Vec<String>,
}

impl NewExchangeResponse {
    pub fn from_fields(fields: &ExchangeResponseFields) -> CommunityResult<Self> {
        require_filled(&[("message", fields.message.as_str())])?;
        Ok(Self {
            message: fields.message.clone(),
            credits_offered: parse_amount(&fields.credits_offered),
            skills_offered: split_list(&fields.skills_offered),
        })
    }
}
