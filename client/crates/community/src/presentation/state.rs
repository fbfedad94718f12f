//! Shared state for community pages

use std::sync::Arc;

use kernel::id::{ExchangeRequestId, PostId};

use crate::domain::repository::{EventRepository, ExchangeRepository, PostRepository};
use crate::presentation::{
    EventBoardPage, ExchangeBoardPage, ExchangeDetailPage, ForumPage, PostDetailPage,
};

/// Repositories shared by every community page
pub struct CommunityAppState<P, E, X> {
    pub post_repo: Arc<P>,
    pub event_repo: Arc<E>,
    pub exchange_repo: Arc<X>,
}

impl<P, E, X> Clone for CommunityAppState<P, E, X> {
    fn clone(&self) -> Self {
        Self {
            post_repo: Arc::clone(&self.post_repo),
            event_repo: Arc::clone(&self.event_repo),
            exchange_repo: Arc::clone(&self.exchange_repo),
        }
    }
}

impl<P, E, X> CommunityAppState<P, E, X>
where
    P: PostRepository,
    E: EventRepository,
    X: ExchangeRepository,
{
    pub fn new(post_repo: Arc<P>, event_repo: Arc<E>, exchange_repo: Arc<X>) -> Self {
        Self {
            post_repo,
            event_repo,
            exchange_repo,
        }
    }

    pub fn forum_page(&self) -> ForumPage<P, E, X> {
        ForumPage::new(self.clone())
    }

    pub fn post_detail_page(&self, post_id: PostId) -> PostDetailPage<P, E, X> {
        PostDetailPage::new(self.clone(), post_id)
    }

    pub fn event_board_page(&self) -> EventBoardPage<P, E, X> {
        EventBoardPage::new(self.clone())
    }

    pub fn exchange_board_page(&self) -> ExchangeBoardPage<P, E, X> {
        ExchangeBoardPage::new(self.clone())
    }

    pub fn exchange_detail_page(&self, request_id: ExchangeRequestId) -> ExchangeDetailPage<P, E, X> {
        ExchangeDetailPage::new(self.clone(), request_id)
    }
}
