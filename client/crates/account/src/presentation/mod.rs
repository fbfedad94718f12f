//! Presentation Layer
//!
//! Form DTOs, shared page state, and the View Bindings of the account
//! pages.

pub mod dto;
pub mod profile_page;
pub mod session_bar;
pub mod sign_in_form;
pub mod sign_up_form;
pub mod state;

pub use profile_page::ProfilePage;
pub use session_bar::SessionBar;
pub use sign_in_form::SignInForm;
pub use sign_up_form::{SignUpForm, SignUpOutcome};
pub use state::AccountAppState;
