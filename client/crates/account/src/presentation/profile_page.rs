//! Profile Page
//!
//! Displays one user's public profile.

use platform::notify::NotificationSink;
use platform::storage::TokenStore;
use platform::view::{Collection, LoadState};

use crate::application::ViewProfileUseCase;
use crate::domain::entity::user_profile::UserProfile;
use crate::domain::repository::UserRepository;
use crate::presentation::dto::PROFILE_LOAD_FAILED;
use crate::presentation::state::AccountAppState;

/// Profile page View Binding
pub struct ProfilePage<U, T: ?Sized> {
    state: AccountAppState<U, T>,
    profile: Collection<UserProfile>,
}

impl<U, T> ProfilePage<U, T>
where
    U: UserRepository,
    T: TokenStore + ?Sized,
{
    pub fn new(state: AccountAppState<U, T>) -> Self {
        Self {
            state,
            profile: Collection::new(),
        }
    }

    pub fn state(&self) -> &LoadState<UserProfile> {
        self.profile.state()
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.snapshot()
    }

    /// Fetch `username`'s profile (on mount or when the route changes)
    pub async fn load(&mut self, username: &str, sink: &dyn NotificationSink) -> bool {
        let use_case = ViewProfileUseCase::new(self.state.user_repo.clone());
        let fetch = async move {
            use_case
                .execute(username)
                .await
                .map_err(|e| e.into_app_error_or(PROFILE_LOAD_FAILED))
        };
        self.profile.refresh(fetch, sink).await
    }
}
