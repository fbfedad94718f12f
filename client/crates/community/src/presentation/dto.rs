//! Community DTOs
//!
//! Form inputs bound by the pages and the notice texts they report.

pub use crate::domain::entity::event::EventFields;
pub use crate::domain::entity::exchange_request::ExchangeRequestFields;
pub use crate::domain::entity::exchange_response::ExchangeResponseFields;
pub use crate::domain::entity::post::PostFields;

// Forum
pub const POSTS_LOAD_FAILED: &str = "Couldn't fetch posts.";
pub const POST_CREATE_FAILED: &str = "Error posting...";
pub const VOTE_FAILED: &str = "Error while voting...";
pub const POST_LOAD_FAILED: &str = "Failed to load post";
pub const COMMENTS_LOAD_FAILED: &str = "Failed to load comments";
pub const COMMENT_FAILED: &str = "Error while commenting...";

// Events
pub const EVENTS_LOAD_FAILED: &str = "Failed to load events";
pub const EVENT_CREATED: &str = "Event created successfully!";
pub const EVENT_CREATE_FAILED: &str = "Error creating event";
pub const EVENT_JOINED: &str = "Joined event successfully!";
pub const EVENT_ALREADY_JOINED: &str = "Already joined this event";
pub const EVENT_JOIN_FAILED: &str = "Error joining event";

// Skill exchange
pub const EXCHANGES_LOAD_FAILED: &str = "Failed to load skill exchanges";
pub const EXCHANGE_CREATED: &str = "Exchange request created successfully!";
pub const EXCHANGE_CREATE_FAILED: &str = "Failed to create exchange request";
pub const EXCHANGE_LOAD_FAILED: &str = "Failed to load exchange request";
pub const RESPONSES_LOAD_FAILED: &str = "Failed to load responses";
pub const RESPONSE_FAILED: &str = "Error submitting response";
