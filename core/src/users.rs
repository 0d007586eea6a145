//! User accounts, experience points and work backgrounds.

use serde_json::Value;

use crate::client::{interpret, passthrough, ForumClient};
use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, Reply};
use crate::policy::{ErrorPolicy, Extractor, Fallback};
use crate::types::{BackgroundFilter, Credentials, IdArg, NewBackground, NewUser};

const LOGIN_ERRORS: ErrorPolicy = ErrorPolicy::new(
    &[Extractor::Status(401, "Invalid Credentials")],
    Fallback::Literal("User not found."),
);
const CREATE_USER_ERRORS: ErrorPolicy = ErrorPolicy::literal("User is already in the database");
const GET_USER_ERRORS: ErrorPolicy = ErrorPolicy::literal("error");
const USER_BACKGROUNDS_ERRORS: ErrorPolicy = ErrorPolicy::swallow();
const USER_XP_ERRORS: ErrorPolicy = ErrorPolicy::msg_or_transport();
const CREATE_BACKGROUND_ERRORS: ErrorPolicy = ErrorPolicy::new(
    &[Extractor::MsgOneOf(&[
        "Background is already in the database",
        "Malformed JWT! Please login again.",
    ])],
    Fallback::Literal("Your token has expired! Please login again."),
);

impl ForumClient {
    pub fn build_login(&self, username: &str, password: &str) -> Result<HttpRequest, ClientError> {
        if username.is_empty() || password.is_empty() {
            return Err(ClientError::validation("Failed! Must provide username and password."));
        }
        self.json_request(
            HttpMethod::Post,
            "/users/login",
            None,
            &Credentials { username, password },
        )
    }

    pub fn parse_login(&self, reply: Reply) -> Result<Value, ClientError> {
        passthrough(reply, &LOGIN_ERRORS)
    }

    pub fn build_create_user(
        &self,
        username: &str,
        password: &str,
        role: &str,
    ) -> Result<HttpRequest, ClientError> {
        if username.is_empty() || password.is_empty() || role.is_empty() {
            return Err(ClientError::validation(
                "Bad request! Must provide username, password and role",
            ));
        }
        if role != "regular" && role != "admin" {
            return Err(ClientError::validation("Role must be regular or admin"));
        }
        self.json_request(
            HttpMethod::Post,
            "/users",
            None,
            &NewUser {
                username,
                password,
                role,
            },
        )
    }

    pub fn parse_create_user(&self, reply: Reply) -> Result<Value, ClientError> {
        passthrough(reply, &CREATE_USER_ERRORS)
    }

    /// Only integer ids are accepted; numeric text is rejected too.
    pub fn build_get_user_by_id(&self, id: impl Into<IdArg>) -> Result<HttpRequest, ClientError> {
        let id = id
            .into()
            .as_int()
            .ok_or_else(|| ClientError::validation("user ID must be an integer"))?;
        Ok(self.request(HttpMethod::Get, &format!("/users/{id}"), None))
    }

    pub fn parse_get_user_by_id(&self, reply: Reply) -> Result<Value, ClientError> {
        passthrough(reply, &GET_USER_ERRORS)
    }

    pub fn build_get_all_users(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/users", None)
    }

    pub fn parse_get_all_users(&self, reply: Reply) -> Result<Value, ClientError> {
        passthrough(reply, &GET_USER_ERRORS)
    }

    /// `filter` becomes the query string and may hold at most one entry.
    pub fn build_get_user_backgrounds(
        &self,
        id: impl Into<IdArg>,
        filter: &BackgroundFilter,
    ) -> Result<HttpRequest, ClientError> {
        let id = id
            .into()
            .parse_int()
            .ok_or_else(|| ClientError::validation("User ID must be an integer"))?;
        if filter.len() > 1 {
            return Err(ClientError::validation("Only one body element is allowed"));
        }
        let mut path = format!("/users/{id}/backgrounds");
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in filter {
            match value {
                Value::Array(items) => {
                    let key = format!("{key}[]");
                    for item in items {
                        append_param(&mut query, &key, item);
                    }
                }
                other => append_param(&mut query, key, other),
            }
        }
        let query = query.finish();
        if !query.is_empty() {
            path.push('?');
            path.push_str(&query);
        }
        Ok(self.request(HttpMethod::Get, &path, None))
    }

    /// A failed call resolves to `Ok(None)` instead of an error.
    pub fn parse_get_user_backgrounds(&self, reply: Reply) -> Result<Option<Value>, ClientError> {
        interpret(reply, &USER_BACKGROUNDS_ERRORS)
    }

    pub fn build_get_user_xp(&self, id: impl Into<IdArg>) -> Result<HttpRequest, ClientError> {
        let id = id
            .into()
            .parse_int()
            .ok_or_else(|| ClientError::validation("user ID must be an integer"))?;
        Ok(self.request(HttpMethod::Get, &format!("/users/{id}/xp"), None))
    }

    pub fn parse_get_user_xp(&self, reply: Reply) -> Result<Value, ClientError> {
        passthrough(reply, &USER_XP_ERRORS)
    }

    pub fn build_create_user_background(
        &self,
        id_user: i64,
        background: &NewBackground,
    ) -> Result<HttpRequest, ClientError> {
        if id_user == 0 || !background.is_complete() {
            return Err(ClientError::validation(
                "Bad request! Must provide company, idPosition, description, begin date, idUser and idDistrict",
            ));
        }
        self.json_request(
            HttpMethod::Post,
            &format!("/users/{id_user}/backgrounds"),
            None,
            background,
        )
    }

    pub fn parse_create_user_background(&self, reply: Reply) -> Result<Value, ClientError> {
        passthrough(reply, &CREATE_BACKGROUND_ERRORS)
    }
}

/// Null values are left out of the query; objects go in as JSON text.
fn append_param(query: &mut url::form_urlencoded::Serializer<'_, String>, key: &str, value: &Value) {
    match value {
        Value::Null => {}
        Value::String(text) => {
            query.append_pair(key, text);
        }
        other => {
            query.append_pair(key, &other.to_string());
        }
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

    fn response(status: u16, body: &str) -> Reply {
        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        })
    }

    fn egor() -> NewBackground {
        NewBackground {
            company: Some("egor".to_string()),
            id_position: Some(1),
            description: Some("Programador UIPATH".to_string()),
            begin_date: Some("2024-05-20".to_string()),
            end_date: None,
            id_district: Some(13),
        }
    }

    #[test]
    fn build_login_produces_correct_request() {
        let req = client().build_login("bruno", "123").unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://127.0.0.1:8090/users/login");
        assert_eq!(req.json_body(), Some(json!({"username": "bruno", "password": "123"})));
        assert!(req.header("authorization").is_none());
    }

    #[test]
    fn build_login_requires_both_credentials() {
        for (user, pass) in [("", "password"), ("username", "")] {
            let err = client().build_login(user, pass).unwrap_err();
            assert_eq!(err.to_string(), "Failed! Must provide username and password.");
        }
    }

    #[test]
    fn parse_login_maps_status() {
        let err = client().parse_login(response(401, "")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid Credentials");
        let err = client().parse_login(response(404, "")).unwrap_err();
        assert_eq!(err.to_string(), "User not found.");
    }

    #[test]
    fn build_create_user_validates() {
        let err = client().build_create_user("", "password", "regular").unwrap_err();
        assert_eq!(err.to_string(), "Bad request! Must provide username, password and role");
        let err = client().build_create_user("newuser", "password", "invalidrole").unwrap_err();
        assert_eq!(err.to_string(), "Role must be regular or admin");

        let req = client().build_create_user("goncalo", "123", "admin").unwrap();
        assert_eq!(req.url, "http://127.0.0.1:8090/users");
        assert_eq!(
            req.json_body(),
            Some(json!({"username": "goncalo", "password": "123", "role": "admin"}))
        );
    }

    #[test]
    fn parse_create_user_always_reports_duplicate() {
        let err = client().parse_create_user(response(409, r#"{"msg":"anything"}"#)).unwrap_err();
        assert_eq!(err.to_string(), "User is already in the database");
    }

    #[test]
    fn build_get_user_by_id_rejects_text_ids() {
        let err = client().build_get_user_by_id("invalid_id").unwrap_err();
        assert_eq!(err.to_string(), "user ID must be an integer");
        let err = client().build_get_user_by_id("1").unwrap_err();
        assert_eq!(err.to_string(), "user ID must be an integer");

        let req = client().build_get_user_by_id(1).unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://127.0.0.1:8090/users/1");
    }

    #[test]
    fn build_get_all_users_produces_correct_request() {
        let req = client().build_get_all_users();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://127.0.0.1:8090/users");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_get_user_backgrounds_encodes_filter() {
        let mut filter = BackgroundFilter::new();
        filter.insert("district".to_string(), json!(true));
        let req = client().build_get_user_backgrounds(2, &filter).unwrap();
        assert_eq!(req.url, "http://127.0.0.1:8090/users/2/backgrounds?district=true");

        let req = client().build_get_user_backgrounds("2", &BackgroundFilter::new()).unwrap();
        assert_eq!(req.url, "http://127.0.0.1:8090/users/2/backgrounds");
    }

    #[test]
    fn build_get_user_backgrounds_drops_null_and_expands_arrays() {
        let mut filter = BackgroundFilter::new();
        filter.insert("district".to_string(), Value::Null);
        let req = client().build_get_user_backgrounds(2, &filter).unwrap();
        assert_eq!(req.url, "http://127.0.0.1:8090/users/2/backgrounds");

        let mut filter = BackgroundFilter::new();
        filter.insert("position".to_string(), json!([1, null, "dev"]));
        let req = client().build_get_user_backgrounds(2, &filter).unwrap();
        assert_eq!(
            req.url,
            "http://127.0.0.1:8090/users/2/backgrounds?position%5B%5D=1&position%5B%5D=dev"
        );
    }

    #[test]
    fn build_get_user_backgrounds_validates() {
        let mut filter = BackgroundFilter::new();
        filter.insert("district".to_string(), json!(true));
        let err = client().build_get_user_backgrounds("invalid_id", &filter).unwrap_err();
        assert_eq!(err.to_string(), "User ID must be an integer");

        filter.insert("position".to_string(), json!(1));
        let err = client().build_get_user_backgrounds(2, &filter).unwrap_err();
        assert_eq!(err.to_string(), "Only one body element is allowed");
    }

    #[test]
    fn parse_get_user_backgrounds_swallows_failures() {
        let parsed = client()
            .parse_get_user_backgrounds(Err(TransportError::new("connection refused")))
            .unwrap();
        assert!(parsed.is_none());

        let parsed = client()
            .parse_get_user_backgrounds(response(200, r#"[{"id_background":1}]"#))
            .unwrap();
        assert_eq!(parsed, Some(json!([{"id_background": 1}])));
    }

    #[test]
    fn parse_get_user_xp_uses_server_msg() {
        let err = client()
            .parse_get_user_xp(response(401, r#"{"msg":"Malformed JWT! Please login again."}"#))
            .unwrap_err();
        assert_eq!(err.to_string(), "Malformed JWT! Please login again.");
        let err = client().parse_get_user_xp(response(500, "")).unwrap_err();
        assert_eq!(err.to_string(), "Request failed with status code 500");
    }

    #[test]
    fn build_create_user_background_requires_every_field() {
        let err = client()
            .build_create_user_background(2, &NewBackground::default())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Bad request! Must provide company, idPosition, description, begin date, idUser and idDistrict"
        );
        assert!(client().build_create_user_background(0, &egor()).is_err());

        let req = client().build_create_user_background(2, &egor()).unwrap();
        assert_eq!(req.url, "http://127.0.0.1:8090/users/2/backgrounds");
        let body = req.json_body().unwrap();
        assert_eq!(body["company"], "egor");
        assert_eq!(body["idPosition"], 1);
        assert_eq!(body["beginDate"], "2024-05-20");
    }

    #[test]
    fn parse_create_user_background_picks_known_messages() {
        let err = client()
            .parse_create_user_background(response(
                409,
                r#"{"msg":"Background is already in the database"}"#,
            ))
            .unwrap_err();
        assert_eq!(err.to_string(), "Background is already in the database");

        let err = client()
            .parse_create_user_background(response(400, r#"{"msg":"Something else"}"#))
            .unwrap_err();
        assert_eq!(err.to_string(), "Your token has expired! Please login again.");
    }
}
