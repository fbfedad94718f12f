//! View Profile Use Case
//!
//! Loads the public profile of any user.

use std::sync::Arc;

use crate::domain::entity::user_profile::UserProfile;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::username::Username;
use crate::error::AccountResult;

/// View profile use case
pub struct ViewProfileUseCase<U: UserRepository> {
    user_repo: Arc<U>,
}

impl<U: UserRepository> ViewProfileUseCase<U> {
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, username: &str) -> AccountResult<UserProfile> {
        let username = Username::new(username)?;
        let profile = self.user_repo.find_by_username(&username).await?;
        tracing::debug!(%username, "Profile loaded");
        Ok(profile)
    }

    /// Profile of the signed-in user
    pub async fn execute_self(&self) -> AccountResult<UserProfile> {
        self.user_repo.find_self().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AccountError;
    use crate::test_support::fixture;
    use platform::client::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_loads_profile() {
        let (gw, _tokens, repo) = fixture();
        gw.respond(Method::GET, "/user/ada", json!({"username": "ada", "bio": "hi"}));

        let profile = ViewProfileUseCase::new(repo).execute("ada").await.unwrap();
        assert_eq!(profile.bio.as_deref(), Some("hi"));
    }

    #[tokio::test]
    async fn test_missing_user() {
        let (gw, _tokens, repo) = fixture();
        gw.fail_status(Method::GET, "/user/ghost", 404, None);

        let err = ViewProfileUseCase::new(repo).execute("ghost").await.unwrap_err();
        assert!(matches!(err, AccountError::UserNotFound));
    }
}
