//! Shared state for account pages

use std::sync::Arc;

use platform::storage::TokenStore;

use crate::domain::repository::UserRepository;
use crate::presentation::{ProfilePage, SessionBar, SignInForm, SignUpForm};

/// Repository and Token Store shared by every account page
pub struct AccountAppState<U, T: ?Sized> {
    pub user_repo: Arc<U>,
    pub tokens: Arc<T>,
}

impl<U, T: ?Sized> Clone for AccountAppState<U, T> {
    fn clone(&self) -> Self {
        Self {
            user_repo: Arc::clone(&self.user_repo),
            tokens: Arc::clone(&self.tokens),
        }
    }
}

impl<U, T> AccountAppState<U, T>
where
    U: UserRepository,
    T: TokenStore + ?Sized,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<T>) -> Self {
        Self { user_repo, tokens }
    }

    pub fn sign_in_form(&self) -> SignInForm<U, T> {
        SignInForm::new(self.clone())
    }

    pub fn sign_up_form(&self) -> SignUpForm<U, T> {
        SignUpForm::new(self.clone())
    }

    pub fn profile_page(&self) -> ProfilePage<U, T> {
        ProfilePage::new(self.clone())
    }

    pub fn session_bar(&self) -> SessionBar<U, T> {
        SessionBar::new(self.clone())
    }
}
