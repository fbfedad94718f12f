//! Repository Traits
//!
//! Interface to the user resource family. Implementation is in the
//! infrastructure layer.

use platform::storage::Credential;

use crate::domain::entity::{new_account::NewAccount, user_profile::UserProfile};
use crate::domain::value_object::{password::Password, username::Username};
use crate::error::AccountResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Exchange username and password for a credential
    ///
    /// `None` when the backend accepted the login without returning a token.
    async fn login(&self, username: &Username, password: &Password)
    -> AccountResult<Option<Credential>>;

    /// Register a new account, returning a credential when the backend
    /// signs the new user in directly
    async fn create(&self, account: &NewAccount) -> AccountResult<Option<Credential>>;

    /// Public profile of any user
    async fn find_by_username(&self, username: &Username) -> AccountResult<UserProfile>;

    /// Profile of the user the stored credential belongs to
    async fn find_self(&self) -> AccountResult<UserProfile>;
}
