//! Scripted Gateway
//!
//! In-memory `Gateway` for resource-client and page tests. Responses are
//! queued per `(method, path)` route and every call is recorded.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use reqwest::Method;
use serde_json::Value;

use crate::client::{Gateway, GatewayError};
use crate::storage::TokenStore;

/// One request seen by the scripted gateway
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    /// Whether a credential was stored when the call was made
    pub authenticated: bool,
}

type Route = (Method, String);

/// Gateway replaying queued responses
///
/// The last response queued for a route is repeated once the queue is
/// down to it, so a refetch sees the same data unless more is queued.
/// A route with nothing queued fails with `GatewayError::Transport`.
#[derive(Default)]
pub struct ScriptedGateway {
    routes: Mutex<HashMap<Route, VecDeque<Result<Value, GatewayError>>>>,
    calls: Mutex<Vec<RecordedCall>>,
    tokens: Option<Arc<dyn TokenStore>>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the credential from `tokens` and clear it on a scripted 401,
    /// the way `HttpGateway` does
    pub fn with_tokens(tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            tokens: Some(tokens),
            ..Self::default()
        }
    }

    /// Queue a success body
    pub fn respond(&self, method: Method, path: &str, body: Value) -> &Self {
        self.push(method, path, Ok(body))
    }

    /// Queue a failure
    pub fn fail(&self, method: Method, path: &str, err: GatewayError) -> &Self {
        self.push(method, path, Err(err))
    }

    /// Queue a non-success status with an optional server message
    pub fn fail_status(
        &self,
        method: Method,
        path: &str,
        status: u16,
        message: Option<&str>,
    ) -> &Self {
        self.fail(
            method,
            path,
            GatewayError::Status {
                status,
                message: message.map(str::to_string),
            },
        )
    }

    /// Every call so far, in order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of calls made to one route
    pub fn calls_to(&self, method: Method, path: &str) -> usize {
        self.calls()
            .iter()
            .filter(|call| call.method == method && call.path == path)
            .count()
    }

    /// Most recent call, if any
    pub fn last_call(&self) -> Option<RecordedCall> {
        self.calls().pop()
    }

    fn push(&self, method: Method, path: &str, response: Result<Value, GatewayError>) -> &Self {
        self.routes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .entry((method, path.to_string()))
            .or_default()
            .push_back(response);
        self
    }

    fn next_response(&self, method: &Method, path: &str) -> Result<Value, GatewayError> {
        let mut routes = self
            .routes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let queue = routes.get_mut(&(method.clone(), path.to_string()));
        match queue {
            Some(queue) if queue.len() > 1 => queue
                .pop_front()
                .unwrap_or_else(|| Err(unscripted(method, path))),
            Some(queue) => queue
                .front()
                .cloned()
                .unwrap_or_else(|| Err(unscripted(method, path))),
            None => Err(unscripted(method, path)),
        }
    }
}

fn unscripted(method: &Method, path: &str) -> GatewayError {
    GatewayError::Transport(format!("no scripted response for {} {}", method, path))
}

impl Gateway for ScriptedGateway {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, GatewayError> {
        let authenticated = self
            .tokens
            .as_ref()
            .is_some_and(|tokens| tokens.get().is_some());

        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(RecordedCall {
                method: method.clone(),
                path: path.to_string(),
                body,
                authenticated,
            });

        let response = self.next_response(&method, path);
        if let (Err(err), Some(tokens)) = (&response, &self.tokens) {
            if err.status() == Some(401) {
                tokens.clear();
            }
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{Credential, MemoryTokenStore};
    use serde_json::json;

    #[tokio::test]
    async fn test_replays_in_order_and_repeats_last() {
        let gw = ScriptedGateway::new();
        gw.respond(Method::GET, "/post", json!({"posts": [1]}))
            .respond(Method::GET, "/post", json!({"posts": [1, 2]}));

        let first = gw.request(Method::GET, "/post", None).await.unwrap();
        let second = gw.request(Method::GET, "/post", None).await.unwrap();
        let third = gw.request(Method::GET, "/post", None).await.unwrap();

        assert_eq!(first, json!({"posts": [1]}));
        assert_eq!(second, json!({"posts": [1, 2]}));
        assert_eq!(third, second);
        assert_eq!(gw.calls_to(Method::GET, "/post"), 3);
    }

    #[tokio::test]
    async fn test_unscripted_route_is_transport_error() {
        let gw = ScriptedGateway::new();
        let err = gw.request(Method::GET, "/event/all", None).await.unwrap_err();
        assert!(matches!(err, GatewayError::Transport(_)));
    }

    #[tokio::test]
    async fn test_records_authentication_and_clears_on_401() {
        let tokens = Arc::new(MemoryTokenStore::with_credential(
            Credential::new("t").unwrap(),
        ));
        let gw = ScriptedGateway::with_tokens(tokens.clone());
        gw.fail_status(Method::GET, "/user/me", 401, None);

        let err = gw.request(Method::GET, "/user/me", None).await.unwrap_err();
        assert!(err.is_unauthorized());
        assert!(gw.last_call().unwrap().authenticated);
        assert!(tokens.get().is_none());

        let _ = gw.request(Method::GET, "/user/me", None).await;
        assert!(!gw.last_call().unwrap().authenticated);
    }
}
