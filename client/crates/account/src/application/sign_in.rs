//! Sign In Use Case
//!
//! Exchanges username and password for a credential and stores it.

use std::sync::Arc;

use platform::storage::TokenStore;

use crate::domain::repository::UserRepository;
use crate::domain::value_object::{password::Password, username::Username};
use crate::error::AccountResult;

/// Sign in input
pub struct SignInInput {
    pub username: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInOutput {
    pub username: Username,
    /// False when the backend accepted the login without issuing a token
    pub signed_in: bool,
}

/// Sign in use case
pub struct SignInUseCase<U, T: ?Sized>
where
    U: UserRepository,
    T: TokenStore,
{
    user_repo: Arc<U>,
    tokens: Arc<T>,
}

impl<U, T> SignInUseCase<U, T>
where
    U: UserRepository,
    T: TokenStore + ?Sized,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<T>) -> Self {
        Self { user_repo, tokens }
    }

    pub async fn execute(&self, input: SignInInput) -> AccountResult<SignInOutput> {
        let username = Username::new(&input.username)?;
        let password = Password::new(input.password)?;

        let credential = self.user_repo.login(&username, &password).await?;

        let signed_in = match credential {
            Some(credential) => {
                self.tokens.set(&credential);
                tracing::info!(%username, "User signed in");
                true
            }
            None => {
                tracing::warn!(%username, "Login accepted without a token");
                false
            }
        };

        Ok(SignInOutput {
            username,
            signed_in,
        })
    }
}
