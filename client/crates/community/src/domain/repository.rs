//! Repository Traits
//!
//! Interfaces to the post, event and skill-exchange resource families.
//! Implementations are in the infrastructure layer.

use kernel::id::{EventId, ExchangeRequestId, PostId};

use crate::domain::entity::{
    comment::{Comment, NewComment},
    event::{Event, NewEvent},
    exchange_request::{ExchangeRequest, NewExchangeRequest},
    exchange_response::{ExchangeResponse, NewExchangeResponse},
    post::{NewPost, Post},
};
use crate::domain::value_object::vote_direction::VoteDirection;
use crate::error::CommunityResult;

/// Forum posts, votes and comments
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// All posts, in server order
    async fn list(&self) -> CommunityResult<Vec<Post>>;

    async fn find_by_id(&self, id: &PostId) -> CommunityResult<Post>;

    async fn create(&self, post: &NewPost) -> CommunityResult<()>;

    /// Cast a vote; the new score is observed on the next fetch
    async fn vote(&self, id: &PostId, direction: VoteDirection) -> CommunityResult<()>;

    async fn list_comments(&self, id: &PostId) -> CommunityResult<Vec<Comment>>;

    async fn add_comment(&self, id: &PostId, comment: &NewComment) -> CommunityResult<()>;
}

/// Community events
#[trait_variant::make(EventRepository: Send)]
pub trait LocalEventRepository {
    async fn list(&self) -> CommunityResult<Vec<Event>>;

    async fn create(&self, event: &NewEvent) -> CommunityResult<()>;

    /// Join an event as the signed-in user
    ///
    /// Returns the server's confirmation message, when it sent one.
    async fn join(&self, id: &EventId) -> CommunityResult<Option<String>>;
}

/// Skill exchange requests and their responses
#[trait_variant::make(ExchangeRepository: Send)]
pub trait LocalExchangeRepository {
    async fn list_requests(&self) -> CommunityResult<Vec<ExchangeRequest>>;

    async fn create_request(&self, request: &NewExchangeRequest) -> CommunityResult<()>;

    async fn find_request(&self, id: &ExchangeRequestId) -> CommunityResult<ExchangeRequest>;

    async fn list_responses(&self, id: &ExchangeRequestId)
    -> CommunityResult<Vec<ExchangeResponse>>;

    async fn add_response(
        &self,
        id: &ExchangeRequestId,
        response: &NewExchangeResponse,
    ) -> CommunityResult<()>;
}
