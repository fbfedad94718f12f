//! Application Layer
//!
//! Use cases for posts, events and skill exchanges. Each use case
//! validates form input locally and issues no request when it fails.

pub mod event;
pub mod exchange;
pub mod forum;

// Re-exports
pub use event::EventUseCase;
pub use exchange::ExchangeUseCase;
pub use forum::ForumUseCase;
