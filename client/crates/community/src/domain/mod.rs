//! Domain Layer
//!
//! Contains entities, value objects, and repository traits for posts,
//! events and skill exchanges.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{
    comment::{Comment, NewComment},
    event::{Event, EventFields, NewEvent},
    exchange_request::{ExchangeRequest, ExchangeRequestFields, NewExchangeRequest},
    exchange_response::{ExchangeResponse, ExchangeResponseFields, NewExchangeResponse},
    post::{NewPost, Post, PostFields},
};
pub use repository::{EventRepository, ExchangeRepository, PostRepository};
pub use value_object::{
    duration::{DurationUnit, ExchangeDuration},
    exchange_status::ExchangeStatus,
    location_type::LocationType,
    vote_direction::VoteDirection,
};
