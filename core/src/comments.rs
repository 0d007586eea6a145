//! Comment deletion and comment likes.
//!
//! Every operation here reports a fixed message on failure, whatever the
//! server sent back.

use serde_json::Value;

use crate::client::{passthrough, ForumClient};
use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, Reply};
use crate::policy::ErrorPolicy;
use crate::types::{CommentLike, IdArg};

const DELETE_COMMENT_ERRORS: ErrorPolicy = ErrorPolicy::literal("Error deleting comment");
const LIKE_COMMENT_ERRORS: ErrorPolicy = ErrorPolicy::literal("Error liking comment");
const COMMENT_LIKES_ERRORS: ErrorPolicy = ErrorPolicy::literal("Error getting comment likes");
const UNLIKE_COMMENT_ERRORS: ErrorPolicy = ErrorPolicy::literal("Error unliking comment");

impl ForumClient {
    pub fn build_delete_comment_by_id(&self, id: impl Into<IdArg>, token: &str) -> HttpRequest {
        let id = id.into().path_segment();
        self.request(HttpMethod::Delete, &format!("/comments/{id}"), Some(token))
    }

    pub fn parse_delete_comment_by_id(&self, reply: Reply) -> Result<Value, ClientError> {
        passthrough(reply, &DELETE_COMMENT_ERRORS)
    }

    pub fn build_like_comment(
        &self,
        id_comment: impl Into<IdArg>,
        id_user: impl Into<IdArg>,
        token: &str,
    ) -> Result<HttpRequest, ClientError> {
        let id_comment = id_comment.into().path_segment();
        self.json_request(
            HttpMethod::Post,
            &format!("/comments/{id_comment}/likes"),
            Some(token),
            &CommentLike {
                id_user: id_user.into(),
            },
        )
    }

    pub fn parse_like_comment(&self, reply: Reply) -> Result<Value, ClientError> {
        passthrough(reply, &LIKE_COMMENT_ERRORS)
    }

    pub fn build_get_comment_likes(&self, id_comment: impl Into<IdArg>, token: &str) -> HttpRequest {
        let id_comment = id_comment.into().path_segment();
        self.request(
            HttpMethod::Get,
            &format!("/comments/{id_comment}/likes"),
            Some(token),
        )
    }

    pub fn parse_get_comment_likes(&self, reply: Reply) -> Result<Value, ClientError> {
        passthrough(reply, &COMMENT_LIKES_ERRORS)
    }

    pub fn build_unlike_comment(&self, id_comment: impl Into<IdArg>, token: &str) -> HttpRequest {
        let id_comment = id_comment.into().path_segment();
        self.request(
            HttpMethod::Delete,
            &format!("/comments/{id_comment}/likes"),
            Some(token),
        )
    }

    pub fn parse_unlike_comment(&self, reply: Reply) -> Result<Value, ClientError> {
        passthrough(reply, &UNLIKE_COMMENT_ERRORS)
    }
}
