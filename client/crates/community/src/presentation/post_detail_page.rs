//! Post Detail Page
//!
//! One post with its comments. Voting refreshes the post; commenting
//! refreshes the comment list.

use std::sync::Arc;

use kernel::error::app_error::AppResult;
use kernel::id::PostId;
use platform::notify::NotificationSink;
use platform::view::{Collection, Draft, LoadState};

use crate::application::ForumUseCase;
use crate::domain::entity::{comment::Comment, post::Post};
use crate::domain::repository::{EventRepository, ExchangeRepository, PostRepository};
use crate::domain::value_object::vote_direction::VoteDirection;
use crate::presentation::dto::{
    COMMENT_FAILED, COMMENTS_LOAD_FAILED, POST_LOAD_FAILED, VOTE_FAILED,
};
use crate::presentation::state::CommunityAppState;

async fn fetch_post<P: PostRepository>(repo: Arc<P>, id: PostId) -> AppResult<Post> {
    ForumUseCase::new(repo)
        .get_post(&id)
        .await
        .map_err(|e| e.into_app_error_or(POST_LOAD_FAILED))
}

async fn fetch_comments<P: PostRepository>(repo: Arc<P>, id: PostId) -> AppResult<Vec<Comment>> {
    ForumUseCase::new(repo)
        .list_comments(&id)
        .await
        .map_err(|e| e.into_app_error_or(COMMENTS_LOAD_FAILED))
}

/// Post detail page View Binding
pub struct PostDetailPage<P, E, X> {
    state: CommunityAppState<P, E, X>,
    post_id: PostId,
    post: Collection<Post>,
    comments: Collection<Vec<Comment>>,
    comment: Draft<String>,
}

impl<P, E, X> PostDetailPage<P, E, X>
where
    P: PostRepository,
    E: EventRepository,
    X: ExchangeRepository,
{
    pub fn new(state: CommunityAppState<P, E, X>, post_id: PostId) -> Self {
        Self {
            state,
            post_id,
            post: Collection::new(),
            comments: Collection::new(),
            comment: Draft::new(),
        }
    }

    pub fn post_id(&self) -> &PostId {
        &self.post_id
    }

    pub fn state(&self) -> &LoadState<Post> {
        self.post.state()
    }

    pub fn post(&self) -> Option<&Post> {
        self.post.snapshot()
    }

    pub fn comments(&self) -> &[Comment] {
        self.comments.snapshot().map_or(&[], Vec::as_slice)
    }

    pub fn comment_draft(&self) -> &str {
        self.comment.get()
    }

    pub fn comment_draft_mut(&mut self) -> &mut String {
        self.comment.edit()
    }

    /// Fetch the post, then its comments once the post is known
    pub async fn load(&mut self, sink: &dyn NotificationSink) -> bool {
        let repo = self.state.post_repo.clone();
        if !self
            .post
            .refresh(fetch_post(repo.clone(), self.post_id.clone()), sink)
            .await
        {
            return false;
        }
        self.comments
            .refresh(fetch_comments(repo, self.post_id.clone()), sink)
            .await
    }

    /// Vote, then refetch the post so the new score shows
    pub async fn vote(&mut self, direction: VoteDirection, sink: &dyn NotificationSink) -> bool {
        let repo = self.state.post_repo.clone();
        let forum = ForumUseCase::new(repo.clone());
        let id = self.post_id.clone();
        let mutation = async move {
            forum
                .vote(&id, direction)
                .await
                .map_err(|e| e.into_app_error_or(VOTE_FAILED))
        };
        self.post
            .mutate_then_refresh(mutation, fetch_post(repo, self.post_id.clone()), sink, None)
            .await
            .is_ok()
    }

    /// Post the comment draft, then refetch the comments
    pub async fn add_comment(&mut self, sink: &dyn NotificationSink) -> bool {
        let repo = self.state.post_repo.clone();
        let forum = ForumUseCase::new(repo.clone());
        let id = self.post_id.clone();
        let mutation = self.comment.submit(|content| async move {
            forum
                .add_comment(&id, &content)
                .await
                .map_err(|e| e.into_app_error_or(COMMENT_FAILED))
        });
        self.comments
            .mutate_then_refresh(mutation, fetch_comments(repo, self.post_id.clone()), sink, None)
            .await
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::fixture;
    use platform::client::Method;
    use platform::notify::{Level, RecordingSink};
    use serde_json::json;

    fn script_post(fx: &crate::test_support::Fixture) {
        fx.gateway.respond(
            Method::GET,
            "/post/p1",
            json!({"post": {"_id": "p1", "title": "Hello", "commentCount": 0}}),
        );
        fx.gateway
            .respond(Method::GET, "/post/p1/comments", json!({"comments": []}));
    }

    #[tokio::test]
    async fn test_load_post_then_comments() {
        let fx = fixture();
        script_post(&fx);
        let sink = RecordingSink::new();

        let mut page = fx.state().post_detail_page(PostId::new("p1"));
        assert!(page.load(&sink).await);

        assert_eq!(page.post().unwrap().title, "Hello");
        assert!(page.comments().is_empty());
        let paths: Vec<_> = fx.gateway.calls().into_iter().map(|c| c.path).collect();
        assert_eq!(paths, vec!["/post/p1", "/post/p1/comments"]);
    }

    #[tokio::test]
    async fn test_missing_post_skips_comments() {
        let fx = fixture();
        fx.gateway.fail_status(Method::GET, "/post/p1", 404, None);
        let sink = RecordingSink::new();

        let mut page = fx.state().post_detail_page(PostId::new("p1"));
        assert!(!page.load(&sink).await);

        assert_eq!(fx.gateway.calls().len(), 1);
        assert!(page.state().error().is_some());
    }

    #[tokio::test]
    async fn test_comment_refetches_comments_only() {
        let fx = fixture();
        fx.sign_in();
        script_post(&fx);
        fx.gateway.respond(
            Method::GET,
            "/post/p1/comments",
            json!({"comments": [{"_id": "c1", "content": "First!", "authorUsername": "ada"}]}),
        );
        fx.gateway
            .respond(Method::POST, "/post/p1/comments", json!({"message": "ok"}));
        let sink = RecordingSink::new();

        let mut page = fx.state().post_detail_page(PostId::new("p1"));
        page.load(&sink).await;
        *page.comment_draft_mut() = "First!".into();
        assert!(page.add_comment(&sink).await);

        assert_eq!(page.comments().len(), 1);
        assert_eq!(page.comment_draft(), "");
        assert_eq!(fx.gateway.calls_to(Method::GET, "/post/p1"), 1);
        assert_eq!(fx.gateway.calls_to(Method::GET, "/post/p1/comments"), 2);
    }

    #[tokio::test]
    async fn test_failed_comment_keeps_draft() {
        let fx = fixture();
        script_post(&fx);
        fx.gateway.fail_status(Method::POST, "/post/p1/comments", 500, None);
        let sink = RecordingSink::new();

        let mut page = fx.state().post_detail_page(PostId::new("p1"));
        page.load(&sink).await;
        *page.comment_draft_mut() = "First!".into();
        assert!(!page.add_comment(&sink).await);

        assert_eq!(page.comment_draft(), "First!");
        let notice = sink.last().unwrap();
        assert_eq!(notice.level, Level::Error);
        assert_eq!(notice.message, COMMENT_FAILED);
    }

    #[tokio::test]
    async fn test_vote_refreshes_post() {
        let fx = fixture();
        fx.sign_in();
        script_post(&fx);
        fx.gateway.respond(
            Method::GET,
            "/post/p1",
            json!({"post": {"_id": "p1", "title": "Hello", "voteScore": 1}}),
        );
        fx.gateway.respond(Method::POST, "/post/p1/vote", json!({}));
        let sink = RecordingSink::new();

        let mut page = fx.state().post_detail_page(PostId::new("p1"));
        page.load(&sink).await;
        assert!(page.vote(VoteDirection::Up, &sink).await);

        assert_eq!(page.post().unwrap().vote_score, 1);
        assert_eq!(fx.gateway.calls_to(Method::GET, "/post/p1/comments"), 1);
    }
}
