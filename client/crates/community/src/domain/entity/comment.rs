//! Comment Entity
//!
//! Append-only from the client's point of view.

use chrono::{DateTime, Utc};
use kernel::id::CommentId;
use kernel::input::require_filled;

use crate::error::CommunityResult;

/// Comment entity
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: CommentId,
    pub author_username: String,
    pub content: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Validated new comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub content: String,
}

impl NewComment {
    pub fn new(content: &str) -> CommunityResult<Self> {
        require_filled(&[("comment", content)])?;
        Ok(Self {
            content: content.to_string(),
        })
    }
}
