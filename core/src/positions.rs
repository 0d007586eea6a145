//! Job positions.

use serde_json::Value;

use crate::client::{passthrough, ForumClient};
use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, Reply};
use crate::policy::ErrorPolicy;
use crate::types::NewPosition;

const POSITION_ERRORS: ErrorPolicy = ErrorPolicy::msg_or_transport();

impl ForumClient {
    pub fn build_get_positions(&self, token: &str) -> HttpRequest {
        self.request(HttpMethod::Get, "/positions", Some(token))
    }

    pub fn parse_get_positions(&self, reply: Reply) -> Result<Value, ClientError> {
        passthrough(reply, &POSITION_ERRORS)
    }

    pub fn build_create_position(&self, position: &str, token: &str) -> Result<HttpRequest, ClientError> {
        self.json_request(
            HttpMethod::Post,
            "/positions",
            Some(token),
            &NewPosition { position },
        )
    }

    pub fn parse_create_position(&self, reply: Reply) -> Result<Value, ClientError> {
        passthrough(reply, &POSITION_ERRORS)
    }
}
