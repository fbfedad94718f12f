//! Forum Use Cases
//!
//! Posts, votes and comments.

use std::sync::Arc;

use kernel::id::PostId;

use crate::domain::entity::{
    comment::{Comment, NewComment},
    post::{NewPost, Post, PostFields},
};
use crate::domain::repository::PostRepository;
use crate::domain::value_object::vote_direction::VoteDirection;
use crate::error::CommunityResult;

/// Forum use case
pub struct ForumUseCase<P: PostRepository> {
    post_repo: Arc<P>,
}

impl<P: PostRepository> ForumUseCase<P> {
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn list_posts(&self) -> CommunityResult<Vec<Post>> {
        self.post_repo.list().await
    }

    pub async fn get_post(&self, id: &PostId) -> CommunityResult<Post> {
        self.post_repo.find_by_id(id).await
    }

    pub async fn create_post(&self, fields: &PostFields) -> CommunityResult<()> {
        let post = NewPost::from_fields(fields)?;
        self.post_repo.create(&post).await?;
        tracing::info!(title = %post.title, "Post created");
        Ok(())
    }

    pub async fn vote(&self, id: &PostId, direction: VoteDirection) -> CommunityResult<()> {
        self.post_repo.vote(id, direction).await?;
        tracing::debug!(post_id = %id, %direction, "Vote cast");
        Ok(())
    }

    pub async fn list_comments(&self, id: &PostId) -> CommunityResult<Vec<Comment>> {
        self.post_repo.list_comments(id).await
    }

    pub async fn add_comment(&self, id: &PostId, content: &str) -> CommunityResult<()> {
        let comment = NewComment::new(content)?;
        self.post_repo.add_comment(id, &comment).await?;
        tracing::debug!(post_id = %id, "Comment added");
        Ok(())
    }
}
