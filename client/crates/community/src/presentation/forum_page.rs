//! Forum Page
//!
//! Post list with voting and a new-post dialog.

use std::sync::Arc;

use kernel::error::app_error::AppResult;
use kernel::id::PostId;
use platform::notify::NotificationSink;
use platform::view::{Collection, Draft, LoadState};

use crate::application::ForumUseCase;
use crate::domain::entity::post::{Post, PostFields};
use crate::domain::repository::{EventRepository, ExchangeRepository, PostRepository};
use crate::domain::value_object::vote_direction::VoteDirection;
use crate::presentation::dto::{POST_CREATE_FAILED, POSTS_LOAD_FAILED, VOTE_FAILED};
use crate::presentation::state::CommunityAppState;

async fn fetch_posts<P: PostRepository>(repo: Arc<P>) -> AppResult<Vec<Post>> {
    ForumUseCase::new(repo)
        .list_posts()
        .await
        .map_err(|e| e.into_app_error_or(POSTS_LOAD_FAILED))
}

/// Forum page View Binding
pub struct ForumPage<P, E, X> {
    state: CommunityAppState<P, E, X>,
    posts: Collection<Vec<Post>>,
    draft: Draft<PostFields>,
}

impl<P, E, X> ForumPage<P, E, X>
where
    P: PostRepository,
    E: EventRepository,
    X: ExchangeRepository,
{
    pub fn new(state: CommunityAppState<P, E, X>) -> Self {
        Self {
            state,
            posts: Collection::new(),
            draft: Draft::new(),
        }
    }

    pub fn state(&self) -> &LoadState<Vec<Post>> {
        self.posts.state()
    }

    /// Posts in server order; empty until the first load settles
    pub fn posts(&self) -> &[Post] {
        self.posts.snapshot().map_or(&[], Vec::as_slice)
    }

    pub fn fetch_count(&self) -> u64 {
        self.posts.fetch_count()
    }

    pub fn draft(&self) -> &PostFields {
        self.draft.get()
    }

    pub fn draft_mut(&mut self) -> &mut PostFields {
        self.draft.edit()
    }

    /// Fetch the post list (on mount)
    pub async fn load(&mut self, sink: &dyn NotificationSink) -> bool {
        let fetch = fetch_posts(self.state.post_repo.clone());
        self.posts.refresh(fetch, sink).await
    }

    /// Vote, then refetch the list so the new score shows
    pub async fn vote(
        &mut self,
        post_id: &PostId,
        direction: VoteDirection,
        sink: &dyn NotificationSink,
    ) -> bool {
        let forum = ForumUseCase::new(self.state.post_repo.clone());
        let mutation = async move {
            forum
                .vote(post_id, direction)
                .await
                .map_err(|e| e.into_app_error_or(VOTE_FAILED))
        };
        let fetch = fetch_posts(self.state.post_repo.clone());
        self.posts
            .mutate_then_refresh(mutation, fetch, sink, None)
            .await
            .is_ok()
    }

    /// Submit the new-post dialog
    ///
    /// The draft is kept when the post is rejected.
    pub async fn create_post(&mut self, sink: &dyn NotificationSink) -> bool {
        let forum = ForumUseCase::new(self.state.post_repo.clone());
        let mutation = self.draft.submit(|fields| async move {
            forum
                .create_post(&fields)
                .await
                .map_err(|e| e.into_app_error_or(POST_CREATE_FAILED))
        });
        let fetch = fetch_posts(self.state.post_repo.clone());
        self.posts
            .mutate_then_refresh(mutation, fetch, sink, None)
            .await
            .is_ok()
    }
}
