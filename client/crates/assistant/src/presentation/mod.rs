//! Presentation Layer
//!
//! View Bindings of the chat coach and trust score pages.

pub mod coach_chat_page;
pub mod dto;
pub mod state;
pub mod trust_score_page;

pub use coach_chat_page::CoachChatPage;
pub use state::AssistantAppState;
pub use trust_score_page::TrustScorePage;
