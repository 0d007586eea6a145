//! One method per remote operation.
//!
//! # Design
//! `ForumApi` pairs a `ForumClient` with a `Transport`. Each method builds the
//! request (failing before any I/O when validation rejects the input),
//! executes it exactly once and hands the reply to the matching `parse_*`.
//! No retries, no state between calls.

use serde_json::Value;
use tracing::debug;

use crate::client::ForumClient;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::http::{HttpRequest, Reply};
use crate::multipart::PostForm;
use crate::transport::{Transport, UreqTransport};
use crate::types::{BackgroundFilter, BackgroundUpdate, IdArg, NewBackground, NewComment, UserPost};

#[derive(Debug, Clone)]
pub struct ForumApi<T = UreqTransport> {
    client: ForumClient,
    transport: T,
}

impl ForumApi<UreqTransport> {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_transport(ForumClient::from_config(config), UreqTransport::new(config))
    }

    /// `new` with `ClientConfig::from_env()`.
    pub fn from_env() -> Self {
        Self::new(&ClientConfig::from_env())
    }
}

impl<T: Transport> ForumApi<T> {
    pub fn with_transport(client: ForumClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &ForumClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn dispatch(&self, request: &HttpRequest) -> Reply {
        debug!(method = %request.method, url = %request.url, "sending request");
        let reply = self.transport.execute(request);
        match &reply {
            Ok(response) => debug!(status = response.status, "received response"),
            Err(err) => debug!(error = %err, "transport failed"),
        }
        reply
    }

    // users

    pub fn login(&self, username: &str, password: &str) -> Result<Value, ClientError> {
        let req = self.client.build_login(username, password)?;
        self.client.parse_login(self.dispatch(&req))
    }

    pub fn create_user(&self, username: &str, password: &str, role: &str) -> Result<Value, ClientError> {
        let req = self.client.build_create_user(username, password, role)?;
        self.client.parse_create_user(self.dispatch(&req))
    }

    pub fn get_user_by_id(&self, id: impl Into<IdArg>) -> Result<Value, ClientError> {
        let req = self.client.build_get_user_by_id(id)?;
        self.client.parse_get_user_by_id(self.dispatch(&req))
    }

    pub fn get_all_users(&self) -> Result<Value, ClientError> {
        let req = self.client.build_get_all_users();
        self.client.parse_get_all_users(self.dispatch(&req))
    }

    /// Resolves to `Ok(None)` when the call fails after dispatch.
    pub fn get_user_backgrounds(
        &self,
        id: impl Into<IdArg>,
        filter: &BackgroundFilter,
    ) -> Result<Option<Value>, ClientError> {
        let req = self.client.build_get_user_backgrounds(id, filter)?;
        self.client.parse_get_user_backgrounds(self.dispatch(&req))
    }

    pub fn get_user_xp(&self, id: impl Into<IdArg>) -> Result<Value, ClientError> {
        let req = self.client.build_get_user_xp(id)?;
        self.client.parse_get_user_xp(self.dispatch(&req))
    }

    pub fn create_user_background(
        &self,
        id_user: i64,
        background: &NewBackground,
    ) -> Result<Value, ClientError> {
        let req = self.client.build_create_user_background(id_user, background)?;
        self.client.parse_create_user_background(self.dispatch(&req))
    }

    // posts

    pub fn delete_post_by_id(&self, id: impl Into<IdArg>, token: &str) -> Result<Value, ClientError> {
        let req = self.client.build_delete_post_by_id(id, token);
        self.client.parse_delete_post_by_id(self.dispatch(&req))
    }

    pub fn create_post(&self, form: &PostForm, token: &str) -> Result<Value, ClientError> {
        let req = self.client.build_create_post(form, token);
        self.client.parse_create_post(self.dispatch(&req))
    }

    pub fn get_posts(&self) -> Result<Value, ClientError> {
        let req = self.client.build_get_posts();
        self.client.parse_get_posts(self.dispatch(&req))
    }

    pub fn create_comment(
        &self,
        post_id: impl Into<IdArg>,
        comment: &NewComment,
        token: &str,
    ) -> Result<Value, ClientError> {
        let req = self.client.build_create_comment(post_id, comment, token)?;
        self.client.parse_create_comment(self.dispatch(&req))
    }

    pub fn get_comments(&self, post_id: impl Into<IdArg>) -> Result<Value, ClientError> {
        let req = self.client.build_get_comments(post_id);
        self.client.parse_get_comments(self.dispatch(&req))
    }

    pub fn create_presence(&self, presence: &UserPost, token: &str) -> Result<Value, ClientError> {
        let req = self.client.build_create_presence(presence, token)?;
        self.client.parse_create_presence(self.dispatch(&req))
    }

    pub fn delete_presence(&self, presence: &UserPost, token: &str) -> Result<Value, ClientError> {
        let req = self.client.build_delete_presence(presence, token)?;
        self.client.parse_delete_presence(self.dispatch(&req))
    }

    pub fn get_present_users(&self, post_id: impl Into<IdArg>, token: &str) -> Result<Value, ClientError> {
        let req = self.client.build_get_present_users(post_id, token);
        self.client.parse_get_present_users(self.dispatch(&req))
    }

    pub fn get_likes(&self, post_id: impl Into<IdArg>, token: &str) -> Result<Value, ClientError> {
        let req = self.client.build_get_likes(post_id, token);
        self.client.parse_get_likes(self.dispatch(&req))
    }

    pub fn add_like(
        &self,
        id_user: impl Into<IdArg>,
        id_post: impl Into<IdArg>,
        token: &str,
    ) -> Result<Value, ClientError> {
        let req = self.client.build_add_like(id_user, id_post, token)?;
        self.client.parse_add_like(self.dispatch(&req))
    }

    pub fn delete_like(
        &self,
        id_user: Option<IdArg>,
        id_post: Option<IdArg>,
        token: &str,
    ) -> Result<Value, ClientError> {
        let req = self.client.build_delete_like(id_user, id_post, token)?;
        self.client.parse_delete_like(self.dispatch(&req))
    }

    // comments

    pub fn delete_comment_by_id(&self, id: impl Into<IdArg>, token: &str) -> Result<Value, ClientError> {
        let req = self.client.build_delete_comment_by_id(id, token);
        self.client.parse_delete_comment_by_id(self.dispatch(&req))
    }

    pub fn like_comment(
        &self,
        id_comment: impl Into<IdArg>,
        id_user: impl Into<IdArg>,
        token: &str,
    ) -> Result<Value, ClientError> {
        let req = self.client.build_like_comment(id_comment, id_user, token)?;
        self.client.parse_like_comment(self.dispatch(&req))
    }

    pub fn get_comment_likes(&self, id_comment: impl Into<IdArg>, token: &str) -> Result<Value, ClientError> {
        let req = self.client.build_get_comment_likes(id_comment, token);
        self.client.parse_get_comment_likes(self.dispatch(&req))
    }

    pub fn unlike_comment(&self, id_comment: impl Into<IdArg>, token: &str) -> Result<Value, ClientError> {
        let req = self.client.build_unlike_comment(id_comment, token);
        self.client.parse_unlike_comment(self.dispatch(&req))
    }

    // backgrounds

    pub fn delete_background_by_id(&self, id: impl Into<IdArg>, token: &str) -> Result<Value, ClientError> {
        let req = self.client.build_delete_background_by_id(id, token);
        self.client.parse_delete_background_by_id(self.dispatch(&req))
    }

    pub fn update_background_by_id(
        &self,
        id: impl Into<IdArg>,
        token: &str,
        changes: &BackgroundUpdate,
    ) -> Result<Value, ClientError> {
        let req = self.client.build_update_background_by_id(id, token, changes)?;
        self.client.parse_update_background_by_id(self.dispatch(&req))
    }

    // positions

    pub fn get_positions(&self, token: &str) -> Result<Value, ClientError> {
        let req = self.client.build_get_positions(token);
        self.client.parse_get_positions(self.dispatch(&req))
    }

    pub fn create_position(&self, position: &str, token: &str) -> Result<Value, ClientError> {
        let req = self.client.build_create_position(position, token)?;
        self.client.parse_create_position(self.dispatch(&req))
    }

    // districts and post types

    pub fn get_districts(&self, token: &str) -> Result<Value, ClientError> {
        let req = self.client.build_get_districts(token);
        self.client.parse_get_districts(self.dispatch(&req))
    }

    pub fn get_type_posts(&self, token: &str) -> Result<Value, ClientError> {
        let req = self.client.build_get_type_posts(token);
        self.client.parse_get_type_posts(self.dispatch(&req))
    }
}
