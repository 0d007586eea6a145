//! Error types for the forum API client.
//!
//! # Design
//! Every variant displays as exactly the message a caller should show. The
//! server's own message, a fixed literal or a pre-flight validation message
//! all end up in the `Display` output, so `err.to_string()` is the contract.

use thiserror::Error;

/// Errors returned by `ForumClient` build and parse methods.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Input rejected before any request was built.
    #[error("{0}")]
    Validation(String),

    /// The call failed remotely or in transit. `status` is `None` when no
    /// response was received at all.
    #[error("{message}")]
    Remote { status: Option<u16>, message: String },

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ClientError {
    pub(crate) fn validation(message: &str) -> Self {
        ClientError::Validation(message.to_string())
    }

    /// HTTP status of the failed reply, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Remote { status, .. } => *status,
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Serialization(err.to_string())
    }
}
