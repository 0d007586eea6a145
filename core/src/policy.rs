//! Error-message selection for failed calls.
//!
//! # Design
//! Each operation owns an `ErrorPolicy`: an ordered list of extractors tried
//! against the failed reply, then a terminal fallback. The presets live next
//! to the operations that use them (see the resource modules), so the
//! per-endpoint precedence is declared in one line instead of being spelled
//! out in every parse method.

use serde_json::Value;

use crate::http::{HttpResponse, TransportError};

/// One way of picking a message out of a failed reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extractor {
    /// `data.msg` when it is a non-empty string.
    Msg,
    /// `data.error` when it is a non-empty string.
    ErrorField,
    /// A fixed message when the reply status matches.
    Status(u16, &'static str),
    /// `data.msg`, but only when it is one of the listed messages.
    MsgOneOf(&'static [&'static str]),
}

/// What happens when no extractor matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    Literal(&'static str),
    /// The transport's own description of the failure.
    Transport,
    /// Report no error at all; the call resolves without a payload.
    Swallow,
}

/// Ordered extractors with a terminal fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorPolicy {
    extractors: &'static [Extractor],
    fallback: Fallback,
}

const SERVER_FIELDS: &[Extractor] = &[Extractor::Msg, Extractor::ErrorField];
const MSG_ONLY: &[Extractor] = &[Extractor::Msg];

impl ErrorPolicy {
    pub const fn new(extractors: &'static [Extractor], fallback: Fallback) -> Self {
        Self {
            extractors,
            fallback,
        }
    }

    /// Always the same message, whatever the server said.
    pub const fn literal(message: &'static str) -> Self {
        Self::new(&[], Fallback::Literal(message))
    }

    /// `data.msg`, then `data.error`, then `fallback`.
    pub const fn server_message(fallback: &'static str) -> Self {
        Self::new(SERVER_FIELDS, Fallback::Literal(fallback))
    }

    /// `data.msg`, then the transport's description.
    pub const fn msg_or_transport() -> Self {
        Self::new(MSG_ONLY, Fallback::Transport)
    }

    /// The transport's description, verbatim.
    pub const fn transport() -> Self {
        Self::new(&[], Fallback::Transport)
    }

    pub const fn swallow() -> Self {
        Self::new(&[], Fallback::Swallow)
    }

    /// Pick the message for `failure`. `None` means the failure is swallowed.
    pub fn resolve(&self, failure: &Failure) -> Option<String> {
        for extractor in self.extractors {
            if let Some(message) = failure.extract(*extractor) {
                return Some(message);
            }
        }
        match self.fallback {
            Fallback::Literal(message) => Some(message.to_string()),
            Fallback::Transport => Some(failure.transport_message.clone()),
            Fallback::Swallow => None,
        }
    }
}

/// A failed round-trip, normalized: either a non-2xx reply or a transport
/// error with no reply at all.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    pub status: Option<u16>,
    /// The reply body parsed as JSON, when it was JSON.
    pub data: Option<Value>,
    pub transport_message: String,
}

impl Failure {
    pub fn from_response(response: &HttpResponse) -> Self {
        Self {
            status: Some(response.status),
            data: serde_json::from_str(&response.body).ok(),
            transport_message: format!("Request failed with status code {}", response.status),
        }
    }

    pub fn from_transport(err: &TransportError) -> Self {
        Self {
            status: None,
            data: None,
            transport_message: err.message.clone(),
        }
    }

    fn field(&self, name: &str) -> Option<&str> {
        self.data
            .as_ref()?
            .get(name)?
            .as_str()
            .filter(|s| !s.is_empty())
    }

    fn extract(&self, extractor: Extractor) -> Option<String> {
        match extractor {
            Extractor::Msg => self.field("msg").map(str::to_string),
            Extractor::ErrorField => self.field("error").map(str::to_string),
            Extractor::Status(status, message) => {
                (self.status == Some(status)).then(|| message.to_string())
            }
            Extractor::MsgOneOf(allowed) => self
                .field("msg")
                .filter(|msg| allowed.contains(msg))
                .map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(status: u16, body: &str) -> Failure {
        Failure::from_response(&HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        })
    }

    #[test]
    fn msg_wins_over_error() {
        let policy = ErrorPolicy::server_message("fallback");
        let failure = reply(400, r#"{"msg":"from msg","error":"from error"}"#);
        assert_eq!(policy.resolve(&failure).as_deref(), Some("from msg"));
    }

    #[test]
    fn error_field_used_when_msg_missing_or_empty() {
        let policy = ErrorPolicy::server_message("fallback");
        let failure = reply(400, r#"{"error":"ID's must be an integer"}"#);
        assert_eq!(policy.resolve(&failure).as_deref(), Some("ID's must be an integer"));

        let failure = reply(400, r#"{"msg":"","error":"second"}"#);
        assert_eq!(policy.resolve(&failure).as_deref(), Some("second"));
    }

    #[test]
    fn literal_fallback_when_body_is_not_json() {
        let policy = ErrorPolicy::server_message("Failed to fetch likes");
        let failure = reply(502, "<html>bad gateway</html>");
        assert_eq!(policy.resolve(&failure).as_deref(), Some("Failed to fetch likes"));
    }

    #[test]
    fn literal_ignores_server_message() {
        let policy = ErrorPolicy::literal("error");
        let failure = reply(404, r#"{"msg":"User not found"}"#);
        assert_eq!(policy.resolve(&failure).as_deref(), Some("error"));
    }

    #[test]
    fn status_extractor_matches_only_its_status() {
        let policy = ErrorPolicy::new(
            &[Extractor::Status(401, "Invalid Credentials")],
            Fallback::Literal("User not found."),
        );
        assert_eq!(policy.resolve(&reply(401, "")).as_deref(), Some("Invalid Credentials"));
        assert_eq!(policy.resolve(&reply(404, "")).as_deref(), Some("User not found."));
        let offline = Failure::from_transport(&TransportError::new("connection refused"));
        assert_eq!(policy.resolve(&offline).as_deref(), Some("User not found."));
    }

    #[test]
    fn msg_one_of_filters_unknown_messages() {
        let policy = ErrorPolicy::new(
            &[Extractor::MsgOneOf(&["known"])],
            Fallback::Literal("default"),
        );
        assert_eq!(policy.resolve(&reply(409, r#"{"msg":"known"}"#)).as_deref(), Some("known"));
        assert_eq!(policy.resolve(&reply(409, r#"{"msg":"other"}"#)).as_deref(), Some("default"));
    }

    #[test]
    fn transport_fallback_describes_status_or_passes_message() {
        let policy = ErrorPolicy::msg_or_transport();
        assert_eq!(
            policy.resolve(&reply(500, "")).as_deref(),
            Some("Request failed with status code 500")
        );
        let offline = Failure::from_transport(&TransportError::new("Malformed JWT"));
        assert_eq!(ErrorPolicy::transport().resolve(&offline).as_deref(), Some("Malformed JWT"));
    }

    #[test]
    fn swallow_resolves_to_none() {
        assert_eq!(ErrorPolicy::swallow().resolve(&reply(500, r#"{"msg":"boom"}"#)), None);
    }
}
