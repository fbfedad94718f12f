//! HTTP Repository Implementation
//!
//! User resource family over the platform Gateway.

use std::sync::Arc;

use platform::client::{Gateway, GatewayError, Method, decode};
use platform::storage::Credential;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entity::{new_account::NewAccount, user_profile::UserProfile};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{password::Password, username::Username};
use crate::error::{AccountError, AccountResult};

/// Gateway-backed user repository
pub struct HttpUserRepository<G> {
    gateway: Arc<G>,
}

impl<G: Gateway + Sync> HttpUserRepository<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }
}

impl<G> Clone for HttpUserRepository<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
        }
    }
}

// ============================================================================
// Wire records
// ============================================================================

#[derive(Debug, Serialize)]
struct LoginBody<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateAccountBody<'a> {
    username: &'a str,
    password: &'a str,
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    bio: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    about: Option<&'a str>,
    tags: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    passing_year: Option<i32>,
    skills_required: &'a [String],
    skills_offered: &'a [String],
}

impl<'a> From<&'a NewAccount> for CreateAccountBody<'a> {
    fn from(account: &'a NewAccount) -> Self {
        Self {
            username: account.username.as_str(),
            password: account.password.expose(),
            email: &account.email,
            bio: account.bio.as_deref(),
            about: account.about.as_deref(),
            tags: &account.tags,
            passing_year: account.passing_year,
            skills_required: &account.skills_required,
            skills_offered: &account.skills_offered,
        }
    }
}

/// `{ token }` returned by login and (sometimes) account creation
#[derive(Debug, Default, Deserialize)]
struct TokenRecord {
    #[serde(default)]
    token: Option<String>,
}

impl TokenRecord {
    fn into_credential(self) -> Option<Credential> {
        self.token.and_then(Credential::new)
    }
}

/// User as served by `/user/:username` and `/user/me`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserRecord {
    username: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    avatar: Option<String>,
    #[serde(default)]
    bio: Option<String>,
    #[serde(default)]
    about: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    passing_year: Option<i32>,
    #[serde(default)]
    trust_score: Option<f64>,
    #[serde(default)]
    credits: Option<i64>,
    #[serde(default)]
    skills_offered: Vec<String>,
    #[serde(default)]
    skills_required: Vec<String>,
}

impl UserRecord {
    fn into_profile(self) -> UserProfile {
        UserProfile {
            username: self.username,
            email: self.email,
            avatar: self.avatar,
            bio: self.bio,
            about: self.about,
            tags: self.tags,
            passing_year: self.passing_year,
            trust_score: self.trust_score,
            credits: self.credits,
            skills_offered: self.skills_offered,
            skills_required: self.skills_required,
        }
    }
}

/// Profile bodies arrive either as `{ user: {...} }` or bare
fn decode_profile(body: Value) -> Result<UserProfile, GatewayError> {
    let body = match body {
        Value::Object(mut map) if map.get("user").is_some_and(Value::is_object) => {
            map.remove("user").unwrap_or_default()
        }
        other => other,
    };
    decode::<UserRecord>(body).map(UserRecord::into_profile)
}

/// Token bodies may be empty
fn decode_token(body: Value) -> Result<Option<Credential>, GatewayError> {
    if body.is_null() {
        return Ok(None);
    }
    decode::<TokenRecord>(body).map(TokenRecord::into_credential)
}

fn not_found_as_missing_user(err: GatewayError) -> AccountError {
    match err.status() {
        Some(404) => AccountError::UserNotFound,
        _ => AccountError::Gateway(err),
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl<G: Gateway + Sync> UserRepository for HttpUserRepository<G> {
    async fn login(
        &self,
        username: &Username,
        password: &Password,
    ) -> AccountResult<Option<Credential>> {
        let body = serde_json::to_value(LoginBody {
            username: username.as_str(),
            password: password.expose(),
        })
        .map_err(|e| GatewayError::Decode(e.to_string()))?;

        let response = self
            .gateway
            .request(Method::POST, "/user/login", Some(body))
            .await?;
        Ok(decode_token(response)?)
    }

    async fn create(&self, account: &NewAccount) -> AccountResult<Option<Credential>> {
        let body = serde_json::to_value(CreateAccountBody::from(account))
            .map_err(|e| GatewayError::Decode(e.to_string()))?;

        let response = self
            .gateway
            .request(Method::POST, "/user/create", Some(body))
            .await?;
        Ok(decode_token(response)?)
    }

    async fn find_by_username(&self, username: &Username) -> AccountResult<UserProfile> {
        let path = format!("/user/{}", username.as_str());
        let response = self
            .gateway
            .request(Method::GET, &path, None)
            .await
            .map_err(not_found_as_missing_user)?;
        Ok(decode_profile(response)?)
    }

    async fn find_self(&self) -> AccountResult<UserProfile> {
        let response = self.gateway.request(Method::GET, "/user/me", None).await?;
        Ok(decode_profile(response)?)
    }
}
