//! Reference lists: districts and post types. Post types are admin-only.

use serde_json::Value;

use crate::client::{passthrough, ForumClient};
use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, Reply};
use crate::policy::ErrorPolicy;

const DISTRICTS_ERRORS: ErrorPolicy = ErrorPolicy::server_message("Failed to get districts");
const TYPE_POSTS_ERRORS: ErrorPolicy = ErrorPolicy::server_message("Failed to get type posts");

impl ForumClient {
    pub fn build_get_districts(&self, token: &str) -> HttpRequest {
        self.request(HttpMethod::Get, "/districts", Some(token))
    }

    pub fn parse_get_districts(&self, reply: Reply) -> Result<Value, ClientError> {
        passthrough(reply, &DISTRICTS_ERRORS)
    }

    pub fn build_get_type_posts(&self, token: &str) -> HttpRequest {
        self.request(HttpMethod::Get, "/type_posts", Some(token))
    }

    pub fn parse_get_type_posts(&self, reply: Reply) -> Result<Value, ClientError> {
        passthrough(reply, &TYPE_POSTS_ERRORS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{HttpResponse, TransportError};

    fn client() -> ForumClient {
        ForumClient::new("http://127.0.0.1:8090")
    }

    #[test]
    fn build_requests_carry_token() {
        let req = client().build_get_districts("t");
        assert_eq!(req.url, "http://127.0.0.1:8090/districts");
        assert_eq!(req.header("authorization"), Some("Bearer t"));

        let req = client().build_get_type_posts("t");
        assert_eq!(req.url, "http://127.0.0.1:8090/type_posts");
        assert_eq!(req.method, HttpMethod::Get);
    }

    #[test]
    fn parse_type_posts_reports_admin_requirement() {
        let reply = Ok(HttpResponse {
            status: 403,
            headers: Vec::new(),
            body: r#"{"success":false,"msg":"This request requires ADMIN role!"}"#.to_string(),
        });
        let err = client().parse_get_type_posts(reply).unwrap_err();
        assert_eq!(err.to_string(), "This request requires ADMIN role!");
        assert_eq!(err.status(), Some(403));
    }

    #[test]
    fn parse_districts_falls_back() {
        let err = client()
            .parse_get_districts(Err(TransportError::new("offline")))
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to get districts");
    }
}
