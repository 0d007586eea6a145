//! Stateless HTTP request builder and reply interpreter for the forum API.
//!
//! # Design
//! `ForumClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that validates its
//! input and produces an `HttpRequest`, and a `parse_*` method that consumes
//! the `Reply`. The per-resource methods live in `users.rs`, `posts.rs` and
//! friends; this module holds what they share.
//!
//! Success replies are passed through as raw JSON. Failures go through the
//! operation's `ErrorPolicy` to pick the message.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, Reply};
use crate::policy::{ErrorPolicy, Failure};

/// Synchronous, stateless client for the forum API.
///
/// Builds `HttpRequest` values and interprets replies without touching the
/// network. Pair it with a `Transport`, or use `ForumApi` which does so.
#[derive(Debug, Clone)]
pub struct ForumClient {
    base_url: String,
}

impl ForumClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// A body-less request, with a bearer header when `token` is given.
    pub(crate) fn request(&self, method: HttpMethod, path: &str, token: Option<&str>) -> HttpRequest {
        let mut headers = Vec::new();
        if let Some(token) = token {
            headers.push(("authorization".to_string(), format!("Bearer {token}")));
        }
        HttpRequest {
            method,
            url: format!("{}{path}", self.base_url),
            headers,
            body: None,
        }
    }

    pub(crate) fn json_request<T: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        token: Option<&str>,
        payload: &T,
    ) -> Result<HttpRequest, ClientError> {
        let body = serde_json::to_vec(payload)?;
        let mut req = self.request(method, path, token);
        req.headers
            .push(("content-type".to_string(), "application/json".to_string()));
        req.body = Some(body);
        Ok(req)
    }
}

/// Apply `policy` to a reply. `Ok(None)` only when the policy swallows the
/// failure.
pub(crate) fn interpret(reply: Reply, policy: &ErrorPolicy) -> Result<Option<Value>, ClientError> {
    let failure = match reply {
        Ok(response) if response.is_success() => return Ok(Some(decode_body(&response.body))),
        Ok(response) => Failure::from_response(&response),
        Err(err) => Failure::from_transport(&err),
    };
    match policy.resolve(&failure) {
        Some(message) => {
            debug!(status = ?failure.status, %message, "call failed");
            Err(ClientError::Remote {
                status: failure.status,
                message,
            })
        }
        None => {
            warn!(
                status = ?failure.status,
                cause = %failure.transport_message,
                "call failed; error swallowed"
            );
            Ok(None)
        }
    }
}

/// Apply `policy` to a reply whose policy never swallows.
pub(crate) fn passthrough(reply: Reply, policy: &ErrorPolicy) -> Result<Value, ClientError> {
    interpret(reply, policy).map(Option::unwrap_or_default)
}

/// JSON bodies decode as-is; anything else is handed back as a JSON string,
/// and an empty body as `null`.
fn decode_body(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}
