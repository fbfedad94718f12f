//! Domain Layer
//!
//! Contains entities, value objects, and the user repository trait.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{new_account::NewAccount, user_profile::UserProfile};
pub use repository::{LocalUserRepository, UserRepository};
pub use value_object::{password::Password, username::Username};
