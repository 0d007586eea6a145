//! Request payloads for the forum API.
//!
//! # Design
//! Response bodies are not modelled: every operation hands back the server's
//! JSON untouched. Only what the client sends is typed here, with field names
//! matching what the backend reads (camelCase for most bodies, snake_case for
//! background updates).
//!
//! Identifiers are `IdArg` rather than a bare integer because callers often
//! hold ids as text (form fields, route params). A few operations check them
//! before dispatch; the rest forward them and let the server object.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An identifier as supplied by the caller: an integer, or text that may or
/// may not hold one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdArg {
    Int(i64),
    Text(String),
}

impl IdArg {
    /// The id only if it was given as an integer value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            IdArg::Int(id) => Some(*id),
            IdArg::Text(_) => None,
        }
    }

    /// The id if it is an integer or text that parses as one.
    pub fn parse_int(&self) -> Option<i64> {
        match self {
            IdArg::Int(id) => Some(*id),
            IdArg::Text(text) => text.trim().parse().ok(),
        }
    }

    /// Percent-encoded form suitable for a URL path segment.
    pub(crate) fn path_segment(&self) -> String {
        match self {
            IdArg::Int(id) => id.to_string(),
            IdArg::Text(text) => url::form_urlencoded::byte_serialize(text.as_bytes())
                .collect::<String>()
                .replace('+', "%20"),
        }
    }
}

impl fmt::Display for IdArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdArg::Int(id) => write!(f, "{id}"),
            IdArg::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for IdArg {
    fn from(id: i64) -> Self {
        IdArg::Int(id)
    }
}

impl From<i32> for IdArg {
    fn from(id: i32) -> Self {
        IdArg::Int(i64::from(id))
    }
}

impl From<u32> for IdArg {
    fn from(id: u32) -> Self {
        IdArg::Int(i64::from(id))
    }
}

impl From<&str> for IdArg {
    fn from(text: &str) -> Self {
        IdArg::Text(text.to_string())
    }
}

impl From<String> for IdArg {
    fn from(text: String) -> Self {
        IdArg::Text(text)
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct NewUser<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub role: &'a str,
}

/// A work-history entry to attach to a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBackground {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_position: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_district: Option<i64>,
}

impl NewBackground {
    /// Every required field present, non-empty and non-zero.
    pub fn is_complete(&self) -> bool {
        fn text(value: &Option<String>) -> bool {
            value.as_deref().is_some_and(|s| !s.is_empty())
        }
        fn id(value: Option<i64>) -> bool {
            value.is_some_and(|id| id != 0)
        }
        text(&self.company)
            && id(self.id_position)
            && text(&self.description)
            && text(&self.begin_date)
            && id(self.id_district)
    }
}

/// Partial update for a background. Only the fields present are sent;
/// omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_position: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_district: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_user: Option<IdArg>,
}

/// A (user, post) pair, used for both presence and post likes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPost {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_user: Option<IdArg>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_post: Option<IdArg>,
}

impl UserPost {
    pub fn new(id_user: impl Into<IdArg>, id_post: impl Into<IdArg>) -> Self {
        Self {
            id_user: Some(id_user.into()),
            id_post: Some(id_post.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CommentLike {
    pub id_user: IdArg,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct NewPosition<'a> {
    pub position: &'a str,
}

/// Query filter for a user's backgrounds, e.g. `{"district": true}`.
pub type BackgroundFilter = serde_json::Map<String, serde_json::Value>;
