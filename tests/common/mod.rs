//! An in-process stand-in for the CRM backend.
//!
//! Serves the same paths, status codes and body shapes as the real service
//! from an axum router on a background tokio runtime.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::Json;
use serde::Deserialize;
use serde_json::{Value, json};

use crm_console::model::ConsoleConfig;
use crm_console::remote::{Endpoints, RemoteClient};
use crm_console::session::{StaticToken, TokenSource};

pub const TOKEN: &str = "test-token";
pub const USER: &str = "dana";
pub const PASSWORD: &str = "s3cret";

/// (collection, singular) for every resource the backend serves.
const RESOURCES: [(&str, &str); 4] = [
    ("cars", "car"),
    ("customers", "customer"),
    ("leases", "lease"),
    ("transactions", "transaction"),
];

#[derive(Debug, Default)]
pub struct Backend {
    pub tables: HashMap<String, Vec<Value>>,
    pub next_id: i64,
    /// Ids whose delete answers 500.
    pub failing_deletes: HashSet<i64>,
    /// `page`/`page_size` of every list call, in order.
    pub list_calls: Vec<(String, u32, u32)>,
    pub password: String,
}

impl Backend {
    fn seeded() -> Self {
        let mut tables = HashMap::new();
        for (collection, _) in RESOURCES {
            tables.insert(collection.to_string(), Vec::new());
        }
        Self {
            tables,
            next_id: 1000,
            password: PASSWORD.to_string(),
            ..Default::default()
        }
    }

    pub fn table(&mut self, collection: &str) -> &mut Vec<Value> {
        self.tables.entry(collection.to_string()).or_default()
    }
}

pub fn car_json(id: i64, brand: &str, model: &str, year: i32) -> Value {
    json!({
        "id": id,
        "brand": brand,
        "model": model,
        "year": year,
        "color": "Black",
        "engine": "2.0",
        "more_info": "",
        "total_available_number": 3,
        "number_of_cars_in_lease": 0,
        "is_still_in_stock": true,
        "company": 1
    })
}

pub fn lease_json(id: i64, customer: i64, car: i64) -> Value {
    json!({
        "id": id,
        "customer": customer,
        "car": car,
        "lease_start_date": "2024-03-01",
        "lease_end_date": "2024-03-11",
        "amount": "450.00",
        "mark_as_returned_from_lease": false,
        "company": 1
    })
}

type Shared = Arc<Mutex<Backend>>;

pub struct FakeCrm {
    pub base_url: String,
    state: Shared,
}

impl FakeCrm {
    pub fn backend(&self) -> MutexGuard<'_, Backend> {
        self.state.lock().unwrap()
    }

    pub fn seed_cars(&self, n: i64) {
        let mut b = self.backend();
        let cars = b.table("cars");
        for id in 1..=n {
            let brand = if id % 2 == 0 { "Toyota" } else { "Kia" };
            cars.push(car_json(id, brand, &format!("Model {}", id), 2010 + id as i32));
        }
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::from_config(&ConsoleConfig {
            base_url: self.base_url.clone(),
            ..ConsoleConfig::default()
        })
    }

    pub fn client_with(&self, tokens: Arc<dyn TokenSource>) -> RemoteClient {
        RemoteClient::new(self.endpoints(), tokens).unwrap()
    }

    /// A client already holding the backend's valid token.
    pub fn client(&self) -> RemoteClient {
        self.client_with(Arc::new(StaticToken::new(TOKEN)))
    }
}

pub fn spawn_fake_crm() -> FakeCrm {
    let state: Shared = Arc::new(Mutex::new(Backend::seeded()));
    let app = router(state.clone());

    let (tx, rx) = std::sync::mpsc::channel();
    thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            tx.send(listener.local_addr().unwrap()).unwrap();
            axum::serve(listener, app).await.unwrap();
        });
    });
    let addr = rx.recv().expect("fake backend failed to start");

    FakeCrm {
        base_url: format!("http://{}", addr),
        state,
    }
}

fn router(state: Shared) -> Router {
    let mut app = Router::new()
        .route("/api/login/", post(login))
        .route("/api/register/", post(register))
        .route("/accounts/api/get_user_info/", get(user_info))
        .route("/accounts/api/change_password/", post(change_password))
        .route("/crm/api/get_company/", get(companies))
        .route("/crm/api/create_company/", post(create_company))
        .route(
            "/crm/api/update_mark_as_returned/:id/",
            put(mark_returned),
        );

    for (collection, singular) in RESOURCES {
        let c = collection.to_string();
        app = app.route(
            &format!("/crm/api/{}/", collection),
            get({
                let c = c.clone();
                move |st: State<Shared>, h: HeaderMap, q: Query<ListQuery>| list(st, h, q, c)
            }),
        );
        app = app.route(
            &format!("/crm/api/add_{}/", singular),
            post({
                let c = c.clone();
                move |st: State<Shared>, h: HeaderMap, body: Json<Value>| create(st, h, body, c)
            }),
        );
        app = app.route(
            &format!("/crm/api/update_{}/:id/", singular),
            put({
                let c = c.clone();
                move |st: State<Shared>, h: HeaderMap, id: Path<i64>, body: Json<Value>| {
                    update(st, h, id, body, c)
                }
            }),
        );
        app = app.route(
            &format!("/crm/api/delete_{}/:id/", singular),
            delete({
                let c = c.clone();
                move |st: State<Shared>, h: HeaderMap, id: Path<i64>| remove(st, h, id, c)
            }),
        );
    }
    app.with_state(state)
}

fn authorized(headers: &HeaderMap) -> Result<(), Response> {
    let expected = format!("Bearer {}", TOKEN);
    match headers.get("authorization").and_then(|v| v.to_str().ok()) {
        Some(v) if v == expected => Ok(()),
        _ => Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Given token not valid for any token type"})),
        )
            .into_response()),
    }
}

#[derive(Deserialize)]
struct ListQuery {
    page: Option<u32>,
    page_size: Option<u32>,
}

async fn list(
    State(st): State<Shared>,
    headers: HeaderMap,
    Query(q): Query<ListQuery>,
    collection: String,
) -> Response {
    if let Err(resp) = authorized(&headers) {
        return resp;
    }
    let page = q.page.unwrap_or(1).max(1);
    let size = q.page_size.unwrap_or(10).max(1);

    let mut b = st.lock().unwrap();
    b.list_calls.push((collection.clone(), page, size));
    let rows = b.table(&collection).clone();
    let start = ((page - 1) * size) as usize;
    let slice: Vec<Value> = rows.iter().skip(start).take(size as usize).cloned().collect();
    if slice.is_empty() {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"message": format!("No {} found!", collection)})),
        )
            .into_response();
    }
    let mut body = serde_json::Map::new();
    body.insert(collection, Value::Array(slice));
    body.insert("total_count".to_string(), json!(rows.len()));
    Json(Value::Object(body)).into_response()
}

async fn create(
    State(st): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
    collection: String,
) -> Response {
    if let Err(resp) = authorized(&headers) {
        return resp;
    }
    if collection == "cars" && body.get("brand").and_then(Value::as_str).is_none() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"brand": ["This field is required."]})),
        )
            .into_response();
    }
    let mut b = st.lock().unwrap();
    b.next_id += 1;
    let mut record = body;
    record["id"] = json!(b.next_id);
    if collection == "cars" {
        record["number_of_cars_in_lease"] = json!(0);
        record["is_still_in_stock"] = json!(true);
    }
    b.table(&collection).push(record.clone());
    (StatusCode::CREATED, Json(record)).into_response()
}

async fn update(
    State(st): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
    collection: String,
) -> Response {
    if let Err(resp) = authorized(&headers) {
        return resp;
    }
    let mut b = st.lock().unwrap();
    let Some(row) = b
        .table(&collection)
        .iter_mut()
        .find(|r| r["id"].as_i64() == Some(id))
    else {
        return (StatusCode::NOT_FOUND, Json(json!({"error": "Not found"}))).into_response();
    };
    if let (Some(row), Some(patch)) = (row.as_object_mut(), body.as_object()) {
        for (k, v) in patch {
            row.insert(k.clone(), v.clone());
        }
    }
    Json(row.clone()).into_response()
}

async fn remove(
    State(st): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    collection: String,
) -> Response {
    if let Err(resp) = authorized(&headers) {
        return resp;
    }
    let mut b = st.lock().unwrap();
    if b.failing_deletes.contains(&id) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "database is locked"})),
        )
            .into_response();
    }
    let rows = b.table(&collection);
    let before = rows.len();
    rows.retain(|r| r["id"].as_i64() != Some(id));
    if rows.len() == before {
        return (StatusCode::NOT_FOUND, Json(json!({"error": "Not found"}))).into_response();
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn mark_returned(
    State(st): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    if let Err(resp) = authorized(&headers) {
        return resp;
    }
    let mut b = st.lock().unwrap();
    match b
        .table("leases")
        .iter_mut()
        .find(|r| r["id"].as_i64() == Some(id))
    {
        Some(row) => {
            row["mark_as_returned_from_lease"] = json!(true);
            Json(json!({"message": "Lease marked as returned"})).into_response()
        }
        None => (StatusCode::NOT_FOUND, Json(json!({"error": "Lease not found"}))).into_response(),
    }
}

#[derive(Deserialize)]
struct Credentials {
    username: String,
    password: String,
}

async fn login(State(st): State<Shared>, Json(c): Json<Credentials>) -> Response {
    let b = st.lock().unwrap();
    if c.username == USER && c.password == b.password {
        return Json(json!({"access": TOKEN, "refresh": "r", "username": USER})).into_response();
    }
    (
        StatusCode::BAD_REQUEST,
        Json(json!({"error": "Invalid credentials"})),
    )
        .into_response()
}

async fn register(Json(body): Json<Value>) -> Response {
    let username = body["username"].as_str().unwrap_or_default();
    if username == USER {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"errors": {"username": ["A user with that username already exists."]}})),
        )
            .into_response();
    }
    (
        StatusCode::CREATED,
        Json(json!({"message": "User registered", "access": TOKEN, "username": username})),
    )
        .into_response()
}

async fn user_info(headers: HeaderMap) -> Response {
    if let Err(resp) = authorized(&headers) {
        return resp;
    }
    Json(json!({
        "username": USER,
        "email": "dana@example.com",
        "first_name": "Dana",
        "last_name": "Reyes"
    }))
    .into_response()
}

async fn change_password(
    State(st): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Err(resp) = authorized(&headers) {
        return resp;
    }
    let mut b = st.lock().unwrap();
    if body["old_password"].as_str() != Some(b.password.as_str()) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"old_password": ["Wrong password."]})),
        )
            .into_response();
    }
    b.password = body["new_password"].as_str().unwrap_or_default().to_string();
    Json(json!({"message": "Password changed"})).into_response()
}

async fn companies(headers: HeaderMap) -> Response {
    if let Err(resp) = authorized(&headers) {
        return resp;
    }
    Json(json!([{"name": "Northside Motors", "address": "1 Main St", "owner_username": USER}]))
        .into_response()
}

async fn create_company(headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if let Err(resp) = authorized(&headers) {
        return resp;
    }
    (
        StatusCode::CREATED,
        Json(json!({
            "name": body["name"],
            "address": body.get("address").cloned().unwrap_or(Value::Null),
            "owner_username": USER
        })),
    )
        .into_response()
}
