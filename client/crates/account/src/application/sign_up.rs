//! Sign Up Use Case
//!
//! Registers a new account. When the backend returns a token the new user
//! is signed in directly; otherwise they have to sign in separately.

use std::sync::Arc;

use platform::storage::TokenStore;

use crate::domain::entity::new_account::{NewAccount, SignUpFields};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::username::Username;
use crate::error::AccountResult;

/// Sign up output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpOutput {
    pub username: Username,
    /// False when the account was created but no token was issued
    pub signed_in: bool,
}

/// Sign up use case
pub struct SignUpUseCase<U, T: ?Sized>
where
    U: UserRepository,
    T: TokenStore,
{
    user_repo: Arc<U>,
    tokens: Arc<T>,
}

impl<U, T> SignUpUseCase<U, T>
where
    U: UserRepository,
    T: TokenStore + ?Sized,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<T>) -> Self {
        Self { user_repo, tokens }
    }

    pub async fn execute(&self, fields: &SignUpFields) -> AccountResult<SignUpOutput> {
        let account = NewAccount::from_fields(fields)?;

        let credential = self.user_repo.create(&account).await?;
        let signed_in = match credential {
            Some(credential) => {
                self.tokens.set(&credential);
                true
            }
            None => false,
        };

        tracing::info!(
            username = %account.username,
            signed_in,
            "Account created"
        );

        Ok(SignUpOutput {
            username: account.username.clone(),
            signed_in,
        })
    }
}
