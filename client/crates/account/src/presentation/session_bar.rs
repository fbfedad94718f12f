//! Session Bar
//!
//! Navigation-bar view of who is signed in, with sign-out.

use platform::storage::TokenStore;

use crate::application::{CurrentUserUseCase, SignOutUseCase};
use crate::domain::entity::user_profile::UserProfile;
use crate::domain::repository::UserRepository;
use crate::presentation::dto::SIGNED_OUT_ROUTE;
use crate::presentation::state::AccountAppState;

/// Session bar View Binding
pub struct SessionBar<U, T: ?Sized> {
    state: AccountAppState<U, T>,
    user: Option<UserProfile>,
}

impl<U, T> SessionBar<U, T>
where
    U: UserRepository,
    T: TokenStore + ?Sized,
{
    pub fn new(state: AccountAppState<U, T>) -> Self {
        Self { state, user: None }
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Link target of the user menu
    pub fn profile_path(&self) -> Option<String> {
        self.user.as_ref().map(UserProfile::profile_path)
    }

    /// Resolve the signed-in user (on mount and after navigation)
    pub async fn refresh(&mut self) {
        let use_case =
            CurrentUserUseCase::new(self.state.user_repo.clone(), self.state.tokens.clone());
        self.user = use_case.execute().await;
    }

    /// Forget the credential; returns the route to navigate to
    pub fn sign_out(&mut self) -> &'static str {
        SignOutUseCase::new(self.state.tokens.clone()).execute();
        self.user = None;
        SIGNED_OUT_ROUTE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{fixture, state};
    use platform::client::Method;
    use platform::storage::Credential;
    use serde_json::json;

    #[tokio::test]
    async fn test_sign_out_makes_next_call_anonymous() {
        let (gw, tokens, repo) = fixture();
        tokens.set(&Credential::new("t").unwrap());
        gw.respond(Method::GET, "/user/me", json!({"username": "ada"}));
        gw.respond(Method::GET, "/user/ada", json!({"username": "ada"}));
        let app = state(repo, tokens.clone());

        let mut bar = app.session_bar();
        bar.refresh().await;
        assert_eq!(bar.profile_path().as_deref(), Some("/user/ada"));
        assert!(gw.last_call().unwrap().authenticated);

        assert_eq!(bar.sign_out(), "/auth");
        assert!(!bar.is_signed_in());
        assert!(tokens.get().is_none());

        let sink = platform::notify::RecordingSink::new();
        app.profile_page().load("ada", &sink).await;
        assert!(!gw.last_call().unwrap().authenticated);
    }

    #[tokio::test]
    async fn test_rejected_credential_is_dropped() {
        let (gw, tokens, repo) = fixture();
        tokens.set(&Credential::new("expired").unwrap());
        gw.fail_status(Method::GET, "/user/me", 401, Some("jwt expired"));

        let mut bar = state(repo, tokens.clone()).session_bar();
        bar.refresh().await;
        assert!(!bar.is_signed_in());
        assert!(tokens.get().is_none());
    }
}
