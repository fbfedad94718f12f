//! HTTP Gateway
//!
//! The single chokepoint for outbound calls to the backend REST API.
//!
//! - Prefixes every path with the configured base URL
//! - Attaches `Authorization: Bearer <token>` when a credential is stored,
//!   and proceeds anonymously otherwise
//! - Serializes bodies as JSON
//! - Never retries; a 401 clears the stored credential

use std::sync::Arc;

use kernel::error::{app_error::AppError, kind::ErrorKind};
use reqwest::header;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::config::{ClientConfig, join_url};
use crate::storage::TokenStore;

pub use reqwest::Method;

/// Gateway failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The server answered with a non-success status
    #[error("HTTP {status}: {}", message.as_deref().unwrap_or("no message"))]
    Status {
        status: u16,
        /// `message` field of the error body, when the server sent one
        message: Option<String>,
    },

    /// No response was received
    #[error("Network error: {0}")]
    Transport(String),

    /// A success response whose body is not the expected JSON
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl GatewayError {
    /// HTTP status, when a response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-provided message, when present
    pub fn server_message(&self) -> Option<&str> {
        match self {
            GatewayError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            GatewayError::Status { status, .. } => ErrorKind::from_status(*status),
            GatewayError::Transport(_) => ErrorKind::Transport,
            GatewayError::Decode(_) => ErrorKind::MalformedResponse,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind() == ErrorKind::Unauthorized
    }

    /// Convert for display, preferring the server message over `fallback`
    pub fn into_app_error_or(self, fallback: &str) -> AppError {
        let message = self
            .server_message()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string());
        let mut err = AppError::new(self.kind(), message);
        if let Some(status) = self.status() {
            err = err.with_status(status);
        }
        err.with_source(self)
    }
}

impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> Self {
        match &err {
            GatewayError::Status { status, message } => {
                let text = message
                    .clone()
                    .unwrap_or_else(|| format!("Request failed with status {}", status));
                AppError::from_status(*status, text).with_source(err)
            }
            GatewayError::Transport(_) => {
                AppError::transport("Network error, please check your connection").with_source(err)
            }
            GatewayError::Decode(_) => {
                AppError::malformed("Unexpected response from server").with_source(err)
            }
        }
    }
}

/// Gateway port
///
/// Resource clients depend on this trait rather than on reqwest so they
/// can be exercised against a scripted gateway.
#[trait_variant::make(Gateway: Send)]
pub trait LocalGateway {
    /// Issue one request and return the decoded JSON body
    ///
    /// An empty success body yields `Value::Null`.
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, GatewayError>;
}

/// Decode a JSON body into a typed value
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, GatewayError> {
    serde_json::from_value(value).map_err(|e| GatewayError::Decode(e.to_string()))
}

/// Extract the error message from an error body
///
/// Looks at `message`, then `error` (string), then `error.message`.
pub fn server_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    let text = value
        .get("message")
        .and_then(Value::as_str)
        .or_else(|| value.get("error").and_then(Value::as_str))
        .or_else(|| {
            value
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(Value::as_str)
        })?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// reqwest-backed gateway
pub struct HttpGateway<S> {
    client: reqwest::Client,
    base_url: String,
    tokens: Arc<S>,
}

impl<S: TokenStore> HttpGateway<S> {
    pub fn new(config: &ClientConfig, tokens: Arc<S>) -> Self {
        Self::with_client(reqwest::Client::new(), config, tokens)
    }

    /// Use a preconfigured reqwest client (proxies, custom TLS, ...)
    pub fn with_client(client: reqwest::Client, config: &ClientConfig, tokens: Arc<S>) -> Self {
        Self {
            client,
            base_url: config.api_base.clone(),
            tokens,
        }
    }

    /// The Token Store this gateway reads on every call
    pub fn tokens(&self) -> &Arc<S> {
        &self.tokens
    }
}

impl<S: TokenStore> Gateway for HttpGateway<S> {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, GatewayError> {
        let url = join_url(&self.base_url, path);
        let mut request = self.client.request(method.clone(), &url);

        let authenticated = match self.tokens.get() {
            Some(credential) => {
                request = request.header(header::AUTHORIZATION, credential.bearer());
                true
            }
            None => false,
        };

        if let Some(body) = &body {
            request = request.json(body);
        }

        tracing::debug!(%method, path, authenticated, "Gateway request");

        let response = request.send().await.map_err(|e| {
            tracing::warn!(%method, path, error = %e, "Gateway transport failure");
            GatewayError::Transport(e.to_string())
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            self.tokens.clear();
            tracing::info!(%method, path, "Credential rejected, signed out");
        }

        let bytes = response.bytes().await;

        if !status.is_success() {
            // An unreadable error body still carries its status
            let message = bytes.ok().and_then(|b| server_message(&b));
            tracing::debug!(%method, path, status = status.as_u16(), "Gateway non-success status");
            return Err(GatewayError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = bytes.map_err(|e| GatewayError::Transport(e.to_string()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::warn!(%method, path, error = %e, "Gateway response is not JSON");
            GatewayError::Decode(e.to_string())
        })
    }
}
