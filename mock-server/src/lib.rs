use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    sync::Arc,
};

use axum::{
    extract::{Multipart, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id_user: i64,
    pub username: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub role: String,
    pub xp: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Background {
    pub id_background: i64,
    pub id_user: i64,
    pub name_company: String,
    pub id_district: i64,
    pub id_position: i64,
    pub begin_date: String,
    pub end_date: Option<String>,
    pub descricao_position: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Post {
    pub id_post: i64,
    pub id_user: i64,
    pub id_type: Option<i64>,
    pub content: String,
    pub district: Option<i64>,
    pub begin_date: Option<String>,
    pub end_date: Option<String>,
    pub image: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Comment {
    pub id_comment: i64,
    pub id_post: i64,
    pub id_user: i64,
    pub content: String,
}

/// Everything the backend would keep in its database.
#[derive(Debug, Default)]
pub struct Store {
    users: BTreeMap<i64, User>,
    backgrounds: BTreeMap<i64, Background>,
    positions: BTreeMap<i64, String>,
    posts: BTreeMap<i64, Post>,
    comments: BTreeMap<i64, Comment>,
    present_users: BTreeSet<(i64, i64)>,
    post_likes: BTreeSet<(i64, i64)>,
    comment_likes: BTreeSet<(i64, i64)>,
    next_id: i64,
}

impl Store {
    fn seeded() -> Self {
        let mut store = Store::default();
        let id = store.next();
        store.users.insert(
            id,
            User {
                id_user: id,
                username: "admin".to_string(),
                password: "admin".to_string(),
                role: "admin".to_string(),
                xp: 0,
            },
        );
        store
    }

    fn next(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

pub type Db = Arc<RwLock<Store>>;

pub const DISTRICTS: &[&str] = &["Aveiro", "Beja", "Braga", "Lisboa", "Porto"];
pub const TYPE_POSTS: &[&str] = &["evento", "vaga"];

const MALFORMED_JWT: &str = "Malformed JWT! Please login again.";
const EXPIRED_TOKEN: &str = "Your token has expired! Please login again.";

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::seeded()));
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/login", post(login))
        .route("/users/{id}", get(get_user))
        .route("/users/{id}/xp", get(get_user_xp))
        .route(
            "/users/{id}/backgrounds",
            get(list_user_backgrounds).post(create_user_background),
        )
        .route(
            "/backgrounds/{id}",
            delete(delete_background).patch(update_background),
        )
        .route("/positions", get(list_positions).post(create_position))
        .route("/districts", get(list_districts))
        .route("/type_posts", get(list_type_posts))
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/", get(list_posts))
        .route("/posts/{id}", delete(delete_post))
        .route("/posts/{id}/comments", get(list_comments).post(create_comment))
        .route(
            "/posts/{id}/present_users",
            get(list_present_users).post(add_presence).delete(remove_presence),
        )
        .route(
            "/posts/{id}/likes",
            get(list_post_likes).post(add_post_like).delete(remove_post_like),
        )
        .route("/comments/{id}", delete(delete_comment))
        .route(
            "/comments/{id}/likes",
            get(list_comment_likes)
                .post(like_comment)
                .delete(unlike_comment),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

// ---------------------------------------------------------------------------
// Error shapes
// ---------------------------------------------------------------------------

/// An error reply in one of the backend's two body shapes.
#[derive(Debug)]
pub struct Rejection {
    status: StatusCode,
    body: Value,
}

impl Rejection {
    /// `{ "success": false, "msg": ... }`
    fn msg(status: StatusCode, msg: &str) -> Self {
        Self {
            status,
            body: json!({ "success": false, "msg": msg }),
        }
    }

    /// `{ "error": ... }`
    fn error(status: StatusCode, error: &str) -> Self {
        Self {
            status,
            body: json!({ "error": error }),
        }
    }
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        tracing::debug!(status = %self.status, body = %self.body, "request rejected");
        (self.status, Json(self.body)).into_response()
    }
}

type ApiResult = Result<Response, Rejection>;

fn created(text: &str) -> ApiResult {
    Ok((StatusCode::CREATED, text.to_string()).into_response())
}

fn done(msg: String) -> ApiResult {
    Ok(Json(json!({ "success": true, "msg": msg })).into_response())
}

fn parse_id(raw: &str, message: &str) -> Result<i64, Rejection> {
    raw.parse()
        .map_err(|_| Rejection::error(StatusCode::BAD_REQUEST, message))
}

/// An integer body field. Absent is `None`; present but not an integer is a
/// 400.
fn int_field(body: &Value, key: &str) -> Result<Option<i64>, Rejection> {
    match body.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| Rejection::error(StatusCode::BAD_REQUEST, "ID's must be an integer")),
        Some(Value::String(s)) => s
            .parse()
            .map(Some)
            .map_err(|_| Rejection::error(StatusCode::BAD_REQUEST, "ID's must be an integer")),
        Some(_) => Err(Rejection::error(StatusCode::BAD_REQUEST, "ID's must be an integer")),
    }
}

fn str_field<'a>(body: &'a Value, key: &str) -> Option<&'a str> {
    body.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn user_post_pair(body: &Value) -> Result<(i64, i64), Rejection> {
    let id_user = int_field(body, "idUser")?;
    let id_post = int_field(body, "idPost")?;
    match (id_user, id_post) {
        (Some(u), Some(p)) => Ok((u, p)),
        _ => Err(Rejection::error(
            StatusCode::BAD_REQUEST,
            "Bad request! Must provide idUser and idPost",
        )),
    }
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

/// Tokens have the form `token-<id_user>`.
pub fn token_for(id_user: i64) -> String {
    format!("token-{id_user}")
}

fn authorize(headers: &HeaderMap, store: &Store) -> Result<User, Rejection> {
    let id_user = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .and_then(|token| token.strip_prefix("token-"))
        .and_then(|id| id.parse::<i64>().ok())
        .ok_or_else(|| Rejection::msg(StatusCode::BAD_REQUEST, MALFORMED_JWT))?;
    store
        .users
        .get(&id_user)
        .cloned()
        .ok_or_else(|| Rejection::msg(StatusCode::UNAUTHORIZED, EXPIRED_TOKEN))
}

fn require_admin(user: &User) -> Result<(), Rejection> {
    if user.role == "admin" {
        Ok(())
    } else {
        Err(Rejection::msg(StatusCode::FORBIDDEN, "This request requires ADMIN role!"))
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub role: String,
}

async fn login(State(db): State<Db>, Json(input): Json<Credentials>) -> ApiResult {
    let store = db.read().await;
    let user = store
        .users
        .values()
        .find(|u| u.username == input.username)
        .ok_or_else(|| Rejection::msg(StatusCode::NOT_FOUND, "User not found"))?;
    if user.password != input.password {
        return Err(Rejection::msg(StatusCode::UNAUTHORIZED, "Invalid Credentials"));
    }
    Ok(Json(json!({ "id": user.id_user, "token": token_for(user.id_user) })).into_response())
}

async fn create_user(State(db): State<Db>, Json(input): Json<NewUser>) -> ApiResult {
    let mut store = db.write().await;
    if store.users.values().any(|u| u.username == input.username) {
        return Err(Rejection::msg(StatusCode::CONFLICT, "User is already in the database"));
    }
    let id = store.next();
    store.users.insert(
        id,
        User {
            id_user: id,
            username: input.username,
            password: input.password,
            role: input.role,
            xp: 0,
        },
    );
    created("User created successfully")
}

async fn list_users(State(db): State<Db>) -> Json<Vec<User>> {
    let store = db.read().await;
    Json(store.users.values().cloned().collect())
}

async fn get_user(State(db): State<Db>, Path(id): Path<String>) -> ApiResult {
    let id = parse_id(&id, "User ID must be an integer")?;
    let store = db.read().await;
    let user = store
        .users
        .get(&id)
        .ok_or_else(|| Rejection::msg(StatusCode::NOT_FOUND, "User not found"))?;
    Ok(Json(user.clone()).into_response())
}

async fn get_user_xp(State(db): State<Db>, Path(id): Path<String>) -> ApiResult {
    let id = parse_id(&id, "User ID must be an integer")?;
    let store = db.read().await;
    let user = store
        .users
        .get(&id)
        .ok_or_else(|| Rejection::msg(StatusCode::NOT_FOUND, "User not found"))?;
    Ok(Json(json!([{ "xp": user.xp }])).into_response())
}

async fn list_user_backgrounds(
    State(db): State<Db>,
    Path(id): Path<String>,
    Query(filter): Query<HashMap<String, String>>,
) -> ApiResult {
    let id = parse_id(&id, "User ID must be an integer")?;
    if filter.len() > 1 {
        return Err(Rejection::msg(StatusCode::BAD_REQUEST, "Only one filter is allowed"));
    }
    let store = db.read().await;
    if !store.users.contains_key(&id) {
        return Err(Rejection::msg(StatusCode::NOT_FOUND, "User not found"));
    }
    let backgrounds: Vec<Background> = store
        .backgrounds
        .values()
        .filter(|b| b.id_user == id)
        .cloned()
        .collect();
    Ok(Json(backgrounds).into_response())
}

async fn create_user_background(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult {
    let id_user = parse_id(&id, "User ID must be an integer")?;
    let (Some(company), Some(description), Some(begin_date)) = (
        str_field(&body, "company"),
        str_field(&body, "description"),
        str_field(&body, "beginDate"),
    ) else {
        return Err(Rejection::msg(StatusCode::BAD_REQUEST, "Bad request! Missing fields"));
    };
    let (Some(id_position), Some(id_district)) =
        (int_field(&body, "idPosition")?, int_field(&body, "idDistrict")?)
    else {
        return Err(Rejection::msg(StatusCode::BAD_REQUEST, "Bad request! Missing fields"));
    };

    let mut store = db.write().await;
    if !store.users.contains_key(&id_user) {
        return Err(Rejection::msg(StatusCode::NOT_FOUND, "User not found"));
    }
    let duplicate = store
        .backgrounds
        .values()
        .any(|b| b.id_user == id_user && b.name_company == company && b.begin_date == begin_date);
    if duplicate {
        return Err(Rejection::msg(
            StatusCode::CONFLICT,
            "Background is already in the database",
        ));
    }
    let id = store.next();
    store.backgrounds.insert(
        id,
        Background {
            id_background: id,
            id_user,
            name_company: company.to_string(),
            id_district,
            id_position,
            begin_date: begin_date.to_string(),
            end_date: str_field(&body, "endDate").map(str::to_string),
            descricao_position: description.to_string(),
        },
    );
    created("Background created successfully")
}

// ---------------------------------------------------------------------------
// Backgrounds
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct BackgroundUpdate {
    pub company: Option<String>,
    pub id_position: Option<i64>,
    pub description: Option<String>,
    pub begin_date: Option<String>,
    pub end_date: Option<String>,
    pub id_district: Option<i64>,
}

async fn delete_background(
    State(db): State<Db>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> ApiResult {
    let mut store = db.write().await;
    authorize(&headers, &store)?;
    let id = parse_id(&id, "Background ID must be an integer")?;
    store
        .backgrounds
        .remove(&id)
        .ok_or_else(|| Rejection::msg(StatusCode::NOT_FOUND, "Background not found"))?;
    Ok("Background deleted successfully".into_response())
}

async fn update_background(
    State(db): State<Db>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(input): Json<BackgroundUpdate>,
) -> ApiResult {
    let mut store = db.write().await;
    authorize(&headers, &store)?;
    let id = parse_id(&id, "Background ID must be an integer")?;
    let background = store
        .backgrounds
        .get_mut(&id)
        .ok_or_else(|| Rejection::msg(StatusCode::NOT_FOUND, "Background not found"))?;

    let mut changed = false;
    if let Some(company) = input.company {
        background.name_company = company;
        changed = true;
    }
    if let Some(id_position) = input.id_position {
        background.id_position = id_position;
        changed = true;
    }
    if let Some(description) = input.description {
        background.descricao_position = description;
        changed = true;
    }
    if let Some(begin_date) = input.begin_date {
        background.begin_date = begin_date;
        changed = true;
    }
    if let Some(end_date) = input.end_date {
        background.end_date = Some(end_date);
        changed = true;
    }
    if let Some(id_district) = input.id_district {
        background.id_district = id_district;
        changed = true;
    }

    if changed {
        done(format!("Background with ID {id} was updated successfully"))
    } else {
        done(format!("No updates were made on background with ID {id}."))
    }
}

// ---------------------------------------------------------------------------
// Positions, districts, post types
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct NewPosition {
    pub position: String,
}

async fn list_positions(State(db): State<Db>, headers: HeaderMap) -> ApiResult {
    let store = db.read().await;
    authorize(&headers, &store)?;
    let positions: Vec<Value> = store
        .positions
        .iter()
        .map(|(id, name)| json!({ "id_position": id, "position": name }))
        .collect();
    Ok(Json(positions).into_response())
}

async fn create_position(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(input): Json<NewPosition>,
) -> ApiResult {
    let mut store = db.write().await;
    authorize(&headers, &store)?;
    if store.positions.values().any(|p| *p == input.position) {
        return Err(Rejection::msg(
            StatusCode::BAD_REQUEST,
            "Position is already in the database",
        ));
    }
    let id = store.next();
    store.positions.insert(id, input.position);
    created("Position created successfully")
}

async fn list_districts(State(db): State<Db>, headers: HeaderMap) -> ApiResult {
    let store = db.read().await;
    authorize(&headers, &store)?;
    let districts: Vec<Value> = DISTRICTS
        .iter()
        .zip(1..)
        .map(|(name, id)| json!({ "id_district": id, "district": name }))
        .collect();
    Ok(Json(districts).into_response())
}

async fn list_type_posts(State(db): State<Db>, headers: HeaderMap) -> ApiResult {
    let store = db.read().await;
    let user = authorize(&headers, &store)?;
    require_admin(&user)?;
    let types: Vec<Value> = TYPE_POSTS
        .iter()
        .zip(1..)
        .map(|(desc, id)| json!({ "id_type_post": id, "type_post_desc": desc }))
        .collect();
    Ok(Json(types).into_response())
}

// ---------------------------------------------------------------------------
// Posts
// ---------------------------------------------------------------------------

async fn list_posts(State(db): State<Db>) -> Json<Vec<Post>> {
    let store = db.read().await;
    Json(store.posts.values().cloned().collect())
}

async fn create_post(State(db): State<Db>, headers: HeaderMap, mut multipart: Multipart) -> ApiResult {
    let user = {
        let store = db.read().await;
        authorize(&headers, &store)?
    };

    let mut fields = HashMap::new();
    let mut image = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Rejection::msg(StatusCode::BAD_REQUEST, &e.body_text()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        if let Some(filename) = field.file_name().map(str::to_string) {
            field
                .bytes()
                .await
                .map_err(|e| Rejection::msg(StatusCode::BAD_REQUEST, &e.body_text()))?;
            image = Some(filename);
        } else {
            let text = field
                .text()
                .await
                .map_err(|e| Rejection::msg(StatusCode::BAD_REQUEST, &e.body_text()))?;
            fields.insert(name, text);
        }
    }

    let Some(content) = fields.get("content").filter(|c| !c.is_empty()).cloned() else {
        return Err(Rejection::msg(StatusCode::BAD_REQUEST, "Fill content field"));
    };
    let int = |key: &str| fields.get(key).and_then(|v| v.parse().ok());

    let mut store = db.write().await;
    let id = store.next();
    store.posts.insert(
        id,
        Post {
            id_post: id,
            id_user: user.id_user,
            id_type: int("idType"),
            content,
            district: int("district"),
            begin_date: fields.get("beginDate").cloned(),
            end_date: fields.get("endDate").cloned(),
            image,
        },
    );
    created("Post created successfully")
}

async fn delete_post(State(db): State<Db>, Path(id): Path<String>, headers: HeaderMap) -> ApiResult {
    let mut store = db.write().await;
    authorize(&headers, &store)?;
    let id = parse_id(&id, "Post ID must be an integer")?;
    store
        .posts
        .remove(&id)
        .ok_or_else(|| Rejection::msg(StatusCode::NOT_FOUND, "Post ID not found."))?;
    store.comments.retain(|_, c| c.id_post != id);
    store.present_users.retain(|(_, p)| *p != id);
    store.post_likes.retain(|(_, p)| *p != id);
    Ok("Post deleted successfully".into_response())
}

fn existing_post(store: &Store, raw: &str) -> Result<i64, Rejection> {
    let id = parse_id(raw, "Post ID must be an integer")?;
    if store.posts.contains_key(&id) {
        Ok(id)
    } else {
        Err(Rejection::msg(StatusCode::NOT_FOUND, "Post ID not found."))
    }
}

async fn list_comments(State(db): State<Db>, Path(id): Path<String>) -> ApiResult {
    let store = db.read().await;
    let id = existing_post(&store, &id)?;
    let comments: Vec<Comment> = store
        .comments
        .values()
        .filter(|c| c.id_post == id)
        .cloned()
        .collect();
    Ok(Json(comments).into_response())
}

async fn create_comment(
    State(db): State<Db>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> ApiResult {
    let mut store = db.write().await;
    authorize(&headers, &store)?;
    let id_post = parse_id(&id, "ID's must be an integer")?;
    let id_user = int_field(&body, "idUser")?;
    let Some(content) = str_field(&body, "content") else {
        return Err(Rejection::msg(StatusCode::BAD_REQUEST, "Fill content field"));
    };
    let Some(id_user) = id_user.filter(|id| store.users.contains_key(id)) else {
        return Err(Rejection::msg(StatusCode::NOT_FOUND, "Not a valid User ID."));
    };
    if !store.posts.contains_key(&id_post) {
        return Err(Rejection::msg(StatusCode::NOT_FOUND, "Post ID not found"));
    }
    let duplicate = store
        .comments
        .values()
        .any(|c| c.id_post == id_post && c.id_user == id_user && c.content == content);
    if duplicate {
        return Err(Rejection::msg(
            StatusCode::BAD_REQUEST,
            "Comment is already in the database",
        ));
    }
    let id = store.next();
    store.comments.insert(
        id,
        Comment {
            id_comment: id,
            id_post,
            id_user,
            content: content.to_string(),
        },
    );
    created("Comment created successfully")
}

// ---------------------------------------------------------------------------
// Presence and post likes
// ---------------------------------------------------------------------------

fn pairs_for(set: &BTreeSet<(i64, i64)>, id_post: i64) -> Vec<Value> {
    set.iter()
        .filter(|(_, p)| *p == id_post)
        .map(|(u, p)| json!({ "id_user": u, "id_post": p }))
        .collect()
}

fn check_pair(store: &Store, id_user: i64, id_post: i64) -> Result<(), Rejection> {
    if !store.users.contains_key(&id_user) {
        return Err(Rejection::msg(StatusCode::NOT_FOUND, "User not exists"));
    }
    if !store.posts.contains_key(&id_post) {
        return Err(Rejection::msg(StatusCode::NOT_FOUND, "Post not exists"));
    }
    Ok(())
}

async fn list_present_users(
    State(db): State<Db>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> ApiResult {
    let store = db.read().await;
    authorize(&headers, &store)?;
    let id = existing_post(&store, &id)?;
    Ok(Json(pairs_for(&store.present_users, id)).into_response())
}

async fn add_presence(State(db): State<Db>, headers: HeaderMap, Json(body): Json<Value>) -> ApiResult {
    let mut store = db.write().await;
    authorize(&headers, &store)?;
    let (id_user, id_post) = user_post_pair(&body)?;
    check_pair(&store, id_user, id_post)?;
    if !store.present_users.insert((id_user, id_post)) {
        return Err(Rejection::msg(
            StatusCode::BAD_REQUEST,
            "present_user is already in the database",
        ));
    }
    created("Presence created successfully")
}

async fn remove_presence(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> ApiResult {
    let mut store = db.write().await;
    authorize(&headers, &store)?;
    let pair = user_post_pair(&body)?;
    if !store.present_users.remove(&pair) {
        return Err(Rejection::msg(StatusCode::NOT_FOUND, "Presence not found, check id's"));
    }
    done("Presence was successfully deleted!".to_string())
}

async fn list_post_likes(
    State(db): State<Db>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> ApiResult {
    let store = db.read().await;
    authorize(&headers, &store)?;
    let id = existing_post(&store, &id)?;
    Ok(Json(pairs_for(&store.post_likes, id)).into_response())
}

async fn add_post_like(State(db): State<Db>, headers: HeaderMap, Json(body): Json<Value>) -> ApiResult {
    let mut store = db.write().await;
    authorize(&headers, &store)?;
    let (id_user, id_post) = user_post_pair(&body)?;
    check_pair(&store, id_user, id_post)?;
    if !store.post_likes.insert((id_user, id_post)) {
        return Err(Rejection::msg(
            StatusCode::BAD_REQUEST,
            "Like is already in the database",
        ));
    }
    created("Like added successfully")
}

async fn remove_post_like(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> ApiResult {
    let mut store = db.write().await;
    authorize(&headers, &store)?;
    let pair = user_post_pair(&body)?;
    if !store.post_likes.remove(&pair) {
        return Err(Rejection::msg(StatusCode::NOT_FOUND, "Like not found, check id's"));
    }
    done("Like was successfully deleted!".to_string())
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

fn existing_comment(store: &Store, raw: &str) -> Result<i64, Rejection> {
    let id = parse_id(raw, "Comment ID must be an integer")?;
    if store.comments.contains_key(&id) {
        Ok(id)
    } else {
        Err(Rejection::msg(StatusCode::NOT_FOUND, "Comment not found"))
    }
}

async fn delete_comment(State(db): State<Db>, Path(id): Path<String>, headers: HeaderMap) -> ApiResult {
    let mut store = db.write().await;
    authorize(&headers, &store)?;
    let id = existing_comment(&store, &id)?;
    store.comments.remove(&id);
    store.comment_likes.retain(|(_, c)| *c != id);
    Ok("Comment deleted successfully".into_response())
}

async fn list_comment_likes(
    State(db): State<Db>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> ApiResult {
    let store = db.read().await;
    authorize(&headers, &store)?;
    let id = existing_comment(&store, &id)?;
    let likes: Vec<Value> = store
        .comment_likes
        .iter()
        .filter(|(_, c)| *c == id)
        .map(|(u, c)| json!({ "id_user": u, "id_comment": c }))
        .collect();
    Ok(Json(likes).into_response())
}

async fn like_comment(
    State(db): State<Db>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> ApiResult {
    let mut store = db.write().await;
    authorize(&headers, &store)?;
    let id_comment = existing_comment(&store, &id)?;
    let Some(id_user) = int_field(&body, "idUser")? else {
        return Err(Rejection::error(StatusCode::BAD_REQUEST, "Bad request! Must provide idUser"));
    };
    if !store.users.contains_key(&id_user) {
        return Err(Rejection::msg(StatusCode::NOT_FOUND, "User not exists"));
    }
    if !store.comment_likes.insert((id_user, id_comment)) {
        return Err(Rejection::msg(
            StatusCode::BAD_REQUEST,
            "Like is already in the database",
        ));
    }
    created("Like added successfully")
}

/// Removes the caller's own like.
async fn unlike_comment(State(db): State<Db>, Path(id): Path<String>, headers: HeaderMap) -> ApiResult {
    let mut store = db.write().await;
    let user = authorize(&headers, &store)?;
    let id_comment = existing_comment(&store, &id)?;
    if !store.comment_likes.remove(&(user.id_user, id_comment)) {
        return Err(Rejection::msg(StatusCode::NOT_FOUND, "Like not found"));
    }
    Ok("Unlike successful".into_response())
}
