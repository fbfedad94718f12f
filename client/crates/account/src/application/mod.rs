//! Application Layer
//!
//! Use cases for the user resource family.

pub mod current_user;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;
pub mod view_profile;

// Re-exports
pub use current_user::CurrentUserUseCase;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
pub use sign_up::{SignUpOutput, SignUpUseCase};
pub use view_profile::ViewProfileUseCase;
