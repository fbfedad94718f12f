//! Presentation Layer
//!
//! Form DTOs, shared page state, and the View Bindings of the forum,
//! event and skill-exchange pages.

pub mod dto;
pub mod event_board_page;
pub mod exchange_board_page;
pub mod exchange_detail_page;
pub mod forum_page;
pub mod post_detail_page;
pub mod state;

pub use event_board_page::{EventBoardPage, JoinOutcome};
pub use exchange_board_page::ExchangeBoardPage;
pub use exchange_detail_page::ExchangeDetailPage;
pub use forum_page::ForumPage;
pub use post_detail_page::PostDetailPage;
pub use state::CommunityAppState;
