//! Current User Use Case
//!
//! Resolves who is signed in. Any failure to load the profile is treated as
//! a dead session: the credential is dropped and the user is anonymous.

use std::sync::Arc;

use platform::storage::TokenStore;

use crate::domain::entity::user_profile::UserProfile;
use crate::domain::repository::UserRepository;

/// Current user use case
pub struct CurrentUserUseCase<U, T: ?Sized>
where
    U: UserRepository,
    T: TokenStore,
{
    user_repo: Arc<U>,
    tokens: Arc<T>,
}

impl<U, T> CurrentUserUseCase<U, T>
where
    U: UserRepository,
    T: TokenStore + ?Sized,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<T>) -> Self {
        Self { user_repo, tokens }
    }

    /// `None` without any request when no credential is stored
    pub async fn execute(&self) -> Option<UserProfile> {
        self.tokens.get()?;

        match self.user_repo.find_self().await {
            Ok(profile) => Some(profile),
            Err(e) => {
                tracing::warn!(error = %e, "Stored credential rejected, signing out");
                self.tokens.clear();
                None
            }
        }
    }
}
