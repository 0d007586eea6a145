//! Posts, their comments, presence lists and likes.

use serde_json::Value;

use crate::client::{passthrough, ForumClient};
use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, Reply};
use crate::multipart::PostForm;
use crate::policy::ErrorPolicy;
use crate::types::{IdArg, NewComment, UserPost};

/// Presence and like mutations are addressed to this post; the server takes
/// the real post id from the body.
const BODY_ADDRESSED_POST: u32 = 1;

const DELETE_POST_ERRORS: ErrorPolicy = ErrorPolicy::literal("error");
const CREATE_POST_ERRORS: ErrorPolicy = ErrorPolicy::transport();
const GET_POSTS_ERRORS: ErrorPolicy = ErrorPolicy::literal("Failed to fetch posts");
const CREATE_COMMENT_ERRORS: ErrorPolicy = ErrorPolicy::server_message("Failed to create comment");
const GET_COMMENTS_ERRORS: ErrorPolicy = ErrorPolicy::server_message("Failed to fetch comments");
const CREATE_PRESENCE_ERRORS: ErrorPolicy = ErrorPolicy::server_message("Failed to create presence");
const DELETE_PRESENCE_ERRORS: ErrorPolicy = ErrorPolicy::server_message("Failed to delete presence");
const PRESENT_USERS_ERRORS: ErrorPolicy =
    ErrorPolicy::server_message("Failed to fetch present users");
const GET_LIKES_ERRORS: ErrorPolicy = ErrorPolicy::server_message("Failed to fetch likes");
const ADD_LIKE_ERRORS: ErrorPolicy = ErrorPolicy::server_message("Failed to add like");
const DELETE_LIKE_ERRORS: ErrorPolicy = ErrorPolicy::server_message("Failed to delete like");

impl ForumClient {
    pub fn build_delete_post_by_id(&self, id: impl Into<IdArg>, token: &str) -> HttpRequest {
        let id = id.into().path_segment();
        self.request(HttpMethod::Delete, &format!("/posts/{id}"), Some(token))
    }

    pub fn parse_delete_post_by_id(&self, reply: Reply) -> Result<Value, ClientError> {
        passthrough(reply, &DELETE_POST_ERRORS)
    }

    pub fn build_create_post(&self, form: &PostForm, token: &str) -> HttpRequest {
        let (content_type, body) = form.encode();
        let mut req = self.request(HttpMethod::Post, "/posts", Some(token));
        req.headers.push(("content-type".to_string(), content_type));
        req.body = Some(body);
        req
    }

    pub fn parse_create_post(&self, reply: Reply) -> Result<Value, ClientError> {
        passthrough(reply, &CREATE_POST_ERRORS)
    }

    pub fn build_get_posts(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/posts/", None)
    }

    pub fn parse_get_posts(&self, reply: Reply) -> Result<Value, ClientError> {
        passthrough(reply, &GET_POSTS_ERRORS)
    }

    pub fn build_create_comment(
        &self,
        post_id: impl Into<IdArg>,
        comment: &NewComment,
        token: &str,
    ) -> Result<HttpRequest, ClientError> {
        let post_id = post_id.into().path_segment();
        self.json_request(
            HttpMethod::Post,
            &format!("/posts/{post_id}/comments"),
            Some(token),
            comment,
        )
    }

    pub fn parse_create_comment(&self, reply: Reply) -> Result<Value, ClientError> {
        passthrough(reply, &CREATE_COMMENT_ERRORS)
    }

    pub fn build_get_comments(&self, post_id: impl Into<IdArg>) -> HttpRequest {
        let post_id = post_id.into().path_segment();
        self.request(HttpMethod::Get, &format!("/posts/{post_id}/comments"), None)
    }

    pub fn parse_get_comments(&self, reply: Reply) -> Result<Value, ClientError> {
        passthrough(reply, &GET_COMMENTS_ERRORS)
    }

    pub fn build_create_presence(
        &self,
        presence: &UserPost,
        token: &str,
    ) -> Result<HttpRequest, ClientError> {
        self.json_request(
            HttpMethod::Post,
            &format!("/posts/{BODY_ADDRESSED_POST}/present_users"),
            Some(token),
            presence,
        )
    }

    pub fn parse_create_presence(&self, reply: Reply) -> Result<Value, ClientError> {
        passthrough(reply, &CREATE_PRESENCE_ERRORS)
    }

    pub fn build_delete_presence(
        &self,
        presence: &UserPost,
        token: &str,
    ) -> Result<HttpRequest, ClientError> {
        self.json_request(
            HttpMethod::Delete,
            &format!("/posts/{BODY_ADDRESSED_POST}/present_users"),
            Some(token),
            presence,
        )
    }

    pub fn parse_delete_presence(&self, reply: Reply) -> Result<Value, ClientError> {
        passthrough(reply, &DELETE_PRESENCE_ERRORS)
    }

    pub fn build_get_present_users(&self, post_id: impl Into<IdArg>, token: &str) -> HttpRequest {
        let post_id = post_id.into().path_segment();
        let mut req = self.request(
            HttpMethod::Get,
            &format!("/posts/{post_id}/present_users"),
            Some(token),
        );
        req.headers
            .push(("content-type".to_string(), "application/json".to_string()));
        req
    }

    pub fn parse_get_present_users(&self, reply: Reply) -> Result<Value, ClientError> {
        passthrough(reply, &PRESENT_USERS_ERRORS)
    }

    pub fn build_get_likes(&self, post_id: impl Into<IdArg>, token: &str) -> HttpRequest {
        let post_id = post_id.into().path_segment();
        let mut req = self.request(HttpMethod::Get, &format!("/posts/{post_id}/likes"), Some(token));
        req.headers
            .push(("content-type".to_string(), "application/json".to_string()));
        req
    }

    pub fn parse_get_likes(&self, reply: Reply) -> Result<Value, ClientError> {
        passthrough(reply, &GET_LIKES_ERRORS)
    }

    pub fn build_add_like(
        &self,
        id_user: impl Into<IdArg>,
        id_post: impl Into<IdArg>,
        token: &str,
    ) -> Result<HttpRequest, ClientError> {
        self.json_request(
            HttpMethod::Post,
            &format!("/posts/{BODY_ADDRESSED_POST}/likes"),
            Some(token),
            &UserPost::new(id_user, id_post),
        )
    }

    pub fn parse_add_like(&self, reply: Reply) -> Result<Value, ClientError> {
        passthrough(reply, &ADD_LIKE_ERRORS)
    }

    /// Missing ids are left out of the body; the server reports them.
    pub fn build_delete_like(
        &self,
        id_user: Option<IdArg>,
        id_post: Option<IdArg>,
        token: &str,
    ) -> Result<HttpRequest, ClientError> {
        self.json_request(
            HttpMethod::Delete,
            &format!("/posts/{BODY_ADDRESSED_POST}/likes"),
            Some(token),
            &UserPost { id_user, id_post },
        )
    }

    pub fn parse_delete_like(&self, reply: Reply) -> Result<Value, ClientError> {
        passthrough(reply, &DELETE_LIKE_ERRORS)
    }
}
