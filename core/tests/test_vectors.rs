//! Verify parse methods against the error vectors in `test-vectors/`.
//!
//! Each case names an operation, a simulated failure (status and body, or a
//! transport error) and the message the caller should see. A `null`
//! expectation means the operation swallows the failure.

use forum_core::{ClientError, ForumClient, HttpResponse, Reply, TransportError};
use serde_json::Value;

fn simulated_reply(case: &Value) -> Reply {
    if let Some(message) = case.get("transport_error") {
        return Err(TransportError::new(message.as_str().unwrap()));
    }
    Ok(HttpResponse {
        status: case["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: case["body"].as_str().unwrap().to_string(),
    })
}

/// Route a reply to the named `parse_*` method. Swallowed failures come back
/// as `Ok(None)`.
fn parse(c: &ForumClient, operation: &str, reply: Reply) -> Result<Option<Value>, ClientError> {
    let result = match operation {
        "login" => c.parse_login(reply),
        "create_user" => c.parse_create_user(reply),
        "get_user_by_id" => c.parse_get_user_by_id(reply),
        "get_all_users" => c.parse_get_all_users(reply),
        "get_user_backgrounds" => return c.parse_get_user_backgrounds(reply),
        "get_user_xp" => c.parse_get_user_xp(reply),
        "create_user_background" => c.parse_create_user_background(reply),
        "delete_post_by_id" => c.parse_delete_post_by_id(reply),
        "create_post" => c.parse_create_post(reply),
        "get_posts" => c.parse_get_posts(reply),
        "create_comment" => c.parse_create_comment(reply),
        "get_comments" => c.parse_get_comments(reply),
        "create_presence" => c.parse_create_presence(reply),
        "delete_presence" => c.parse_delete_presence(reply),
        "get_present_users" => c.parse_get_present_users(reply),
        "get_likes" => c.parse_get_likes(reply),
        "add_like" => c.parse_add_like(reply),
        "delete_like" => c.parse_delete_like(reply),
        "delete_comment_by_id" => c.parse_delete_comment_by_id(reply),
        "like_comment" => c.parse_like_comment(reply),
        "get_comment_likes" => c.parse_get_comment_likes(reply),
        "unlike_comment" => c.parse_unlike_comment(reply),
        "delete_background_by_id" => c.parse_delete_background_by_id(reply),
        "update_background_by_id" => c.parse_update_background_by_id(reply),
        "get_positions" => c.parse_get_positions(reply),
        "create_position" => c.parse_create_position(reply),
        "get_districts" => c.parse_get_districts(reply),
        "get_type_posts" => c.parse_get_type_posts(reply),
        other => panic!("unknown operation: {other}"),
    };
    result.map(Some)
}

#[test]
fn error_test_vectors() {
    let raw = include_str!("../../test-vectors/errors.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let c = ForumClient::new("http://127.0.0.1:8090");
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let operation = case["operation"].as_str().unwrap();
        let result = parse(&c, operation, simulated_reply(case));

        match case["expected_message"].as_str() {
            Some(expected) => {
                let err = result.expect_err(name);
                assert_eq!(err.to_string(), expected, "{name}: message");
                assert_eq!(
                    err.status(),
                    case["status"].as_u64().map(|s| s as u16),
                    "{name}: status"
                );
            }
            None => assert_eq!(result.unwrap(), None, "{name}: swallowed"),
        }
    }
}

#[test]
fn success_bodies_pass_through() {
    let c = ForumClient::new("http://127.0.0.1:8090");
    let reply = |body: &str| -> Reply {
        Ok(HttpResponse {
            status: 201,
            headers: Vec::new(),
            body: body.to_string(),
        })
    };

    let data = c.parse_get_posts(reply(r#"[{"id_post":1,"content":"hi"}]"#)).unwrap();
    assert_eq!(data[0]["content"], "hi");

    // plain-text bodies come back as JSON strings, empty ones as null
    let data = c.parse_create_user(reply("User created successfully")).unwrap();
    assert_eq!(data, Value::String("User created successfully".to_string()));
    assert_eq!(c.parse_unlike_comment(reply("")).unwrap(), Value::Null);
}
