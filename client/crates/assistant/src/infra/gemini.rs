//! Gemini Text Generator
//!
//! `generateContent` over reqwest. The API key travels as the `key` URL
//! parameter, so it is kept out of every logged error.

use platform::config::ClientConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::generator::TextGenerator;
use crate::error::{AssistantError, AssistantResult};

/// reqwest-backed generator
pub struct GeminiClient {
    client: reqwest::Client,
    url: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(url: impl Into<String>, api_key: Option<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url, api_key)
    }

    /// Endpoint and key from the client configuration
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(
            config.generative_url.clone(),
            config.generative_api_key.clone(),
        )
    }

    pub fn with_client(
        client: reqwest::Client,
        url: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client,
            url: url.into(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        }
    }

    fn key(&self) -> AssistantResult<&str> {
        self.api_key.as_deref().ok_or(AssistantError::MissingApiKey)
    }
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("url", &self.url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

// ============================================================================
// Wire records
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateBody<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

impl<'a> GenerateBody<'a> {
    fn new(prompt: &'a str) -> Self {
        Self {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct GenerateReply {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ReplyPart>,
}

#[derive(Debug, Default, Deserialize)]
struct ReplyPart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateReply {
    /// `candidates[0].content.parts[0].text`, or empty
    fn into_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .unwrap_or_default()
    }
}

/// `error.message` of a failure body, else `API error: <status>`
fn upstream_message(status: u16, body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("API error: {status}"))
}

// ============================================================================
// Text Generator Implementation
// ============================================================================

impl TextGenerator for GeminiClient {
    fn ensure_configured(&self) -> AssistantResult<()> {
        self.key().map(|_| ())
    }

    async fn generate(&self, prompt: &str) -> AssistantResult<String> {
        let key = self.key()?;

        tracing::debug!(prompt_len = prompt.len(), "Generative request");

        let response = self
            .client
            .post(&self.url)
            .query(&[("key", key)])
            .json(&GenerateBody::new(prompt))
            .send()
            .await
            .map_err(|e| AssistantError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| AssistantError::Transport(e.without_url().to_string()))?;

        if !status.is_success() {
            let message = upstream_message(status.as_u16(), &bytes);
            tracing::warn!(status = status.as_u16(), %message, "Generative endpoint error");
            return Err(AssistantError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let reply: GenerateReply =
            serde_json::from_slice(&bytes).map_err(|e| AssistantError::Decode(e.to_string()))?;
        Ok(reply.into_text())
    }
}
