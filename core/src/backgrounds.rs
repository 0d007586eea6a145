//! Deleting and updating a work background by id.
//!
//! Failures surface the transport's own message.

use serde_json::Value;

use crate::client::{passthrough, ForumClient};
use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, Reply};
use crate::policy::ErrorPolicy;
use crate::types::{BackgroundUpdate, IdArg};

const BACKGROUND_ERRORS: ErrorPolicy = ErrorPolicy::transport();

impl ForumClient {
    pub fn build_delete_background_by_id(&self, id: impl Into<IdArg>, token: &str) -> HttpRequest {
        let id = id.into().path_segment();
        self.request(HttpMethod::Delete, &format!("/backgrounds/{id}"), Some(token))
    }

    pub fn parse_delete_background_by_id(&self, reply: Reply) -> Result<Value, ClientError> {
        passthrough(reply, &BACKGROUND_ERRORS)
    }

    pub fn build_update_background_by_id(
        &self,
        id: impl Into<IdArg>,
        token: &str,
        changes: &BackgroundUpdate,
    ) -> Result<HttpRequest, ClientError> {
        let id = id.into().path_segment();
        self.json_request(
            HttpMethod::Patch,
            &format!("/backgrounds/{id}"),
            Some(token),
            changes,
        )
    }

    pub fn parse_update_background_by_id(&self, reply: Reply) -> Result<Value, ClientError> {
        passthrough(reply, &BACKGROUND_ERRORS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{HttpResponse, TransportError};
    use serde_json::json;

    fn client() -> ForumClient {
        ForumClient::new("http://127.0.0.1:8090")
    }

    #[test]
    fn build_delete_background_by_id_produces_correct_request() {
        let req = client().build_delete_background_by_id(2, "t");
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, "http://127.0.0.1:8090/backgrounds/2");
        assert_eq!(req.header("authorization"), Some("Bearer t"));
    }

    #[test]
    fn build_update_background_sends_only_present_fields() {
        let changes = BackgroundUpdate {
            company: Some("Beniregion".to_string()),
            begin_date: Some("2024-01-30".to_string()),
            end_date: Some("2024-04-28".to_string()),
            ..Default::default()
        };
        let req = client().build_update_background_by_id(3, "t", &changes).unwrap();
        assert_eq!(req.method, HttpMethod::Patch);
        assert_eq!(req.url, "http://127.0.0.1:8090/backgrounds/3");
        assert_eq!(
            req.json_body(),
            Some(json!({"company": "Beniregion", "begin_date": "2024-01-30", "end_date": "2024-04-28"}))
        );

        let req = client()
            .build_update_background_by_id(3, "t", &BackgroundUpdate::default())
            .unwrap();
        assert_eq!(req.json_body(), Some(json!({})));
    }

    #[test]
    fn failures_pass_transport_message() {
        let err = client()
            .parse_delete_background_by_id(Err(TransportError::new("Invalid Token")))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid Token");

        let reply = Ok(HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: r#"{"msg":"Background not found"}"#.to_string(),
        });
        let err = client().parse_update_background_by_id(reply).unwrap_err();
        assert_eq!(err.to_string(), "Request failed with status code 404");
    }
}
