//! Post Entity
//!
//! Forum post. Vote score and comment count change only server-side and
//! are observed after a refetch.

use chrono::{DateTime, Utc};
use kernel::id::PostId;
use kernel::input::require_filled;

use crate::error::CommunityResult;

/// Post entity
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author_username: String,
    pub avatar: Option<String>,
    pub vote_score: i64,
    pub comment_count: u64,
    pub created_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Route of the post detail page
    pub fn detail_path(&self) -> String {
        format!("/post/{}", self.id)
    }
}

/// New-post form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFields {
    pub title: String,
    pub content: String,
}

/// Validated new post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

impl NewPost {
    /// Title and content are both required
    pub fn from_fields(fields: &PostFields) -> CommunityResult<Self> {
        require_filled(&[
            ("title", fields.title.as_str()),
            ("content", fields.content.as_str()),
        ])?;
        Ok(Self {
            title: fields.title.clone(),
            content: fields.content.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommunityError;

    #[test]
    fn test_requires_title_and_content() {
        let err = NewPost::from_fields(&PostFields {
            title: "  ".into(),
            content: "body".into(),
        })
        .unwrap_err();
        match err {
            CommunityError::MissingFields(missing) => assert_eq!(missing.fields(), &["title"]),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_keeps_text_as_typed() {
        let post = NewPost::from_fields(&PostFields {
            title: "Hello ".into(),
            content: "World".into(),
        })
        .unwrap();
        assert_eq!(post.title, "Hello ");
    }
}
