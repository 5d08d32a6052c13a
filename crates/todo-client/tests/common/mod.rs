//! In-process fake of the todo API for integration tests.
//!
//! Mirrors the remote contract closely enough for the client: tenant-scoped
//! paths, partial PATCH with explicit nulls, an empty-bodied DELETE and a
//! multipart upload endpoint.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, Path, State};
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Map, Value};

use todo_client::{ApiClient, ApiConfig, Item};

/// One multipart field received by the upload endpoint
#[derive(Debug, Clone)]
pub struct Upload {
    pub field: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub len: usize,
}

#[derive(Debug, Default)]
pub struct ServerState {
    pub items: Vec<Item>,
    pub next_id: i64,
    pub uploads: Vec<Upload>,
    /// `Cache-Control` header of every request, in arrival order
    pub cache_headers: Vec<Option<String>>,
}

pub type Shared = Arc<Mutex<ServerState>>;

pub struct TestServer {
    pub base_url: String,
    pub state: Shared,
}

impl TestServer {
    /// Client for `tenant` pointed at this server
    pub fn client(&self, tenant: &str) -> ApiClient {
        ApiClient::new(ApiConfig::new(
            format!("{}/", self.base_url),
            Some(tenant.to_string()),
        ))
    }

    pub fn request_count(&self) -> usize {
        self.state.lock().unwrap().cache_headers.len()
    }
}

/// Start the fake server on an ephemeral port
pub async fn spawn() -> TestServer {
    let state: Shared = Arc::new(Mutex::new(ServerState {
        next_id: 1,
        ..Default::default()
    }));

    let app = Router::new()
        .route("/api/{tenant}/items", get(list_items).post(create_item))
        .route(
            "/api/{tenant}/items/{id}",
            get(get_item).patch(update_item).delete(delete_item),
        )
        .route("/api/{tenant}/images/upload", post(upload_image))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestServer {
        base_url: format!("http://{}", addr),
        state,
    }
}

fn record(state: &Shared, headers: &HeaderMap) {
    let value = headers
        .get(CACHE_CONTROL)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.lock().unwrap().cache_headers.push(value);
}

fn not_found(id: i64) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": format!("item {} not found", id) })),
    )
        .into_response()
}

async fn list_items(
    State(state): State<Shared>,
    Path(tenant): Path<String>,
    headers: HeaderMap,
) -> Response {
    record(&state, &headers);
    if tenant == "broken" {
        return ([(CONTENT_TYPE, "application/json")], "not json").into_response();
    }
    let items: Vec<Item> = state
        .lock()
        .unwrap()
        .items
        .iter()
        .filter(|i| i.tenant_id == tenant)
        .cloned()
        .collect();
    Json(items).into_response()
}

async fn get_item(
    State(state): State<Shared>,
    Path((tenant, id)): Path<(String, i64)>,
    headers: HeaderMap,
) -> Response {
    record(&state, &headers);
    let found = state
        .lock()
        .unwrap()
        .items
        .iter()
        .find(|i| i.id == id && i.tenant_id == tenant)
        .cloned();
    match found {
        Some(item) => Json(item).into_response(),
        None => not_found(id),
    }
}

async fn create_item(
    State(state): State<Shared>,
    Path(tenant): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    record(&state, &headers);
    let name = body["name"].as_str().unwrap_or_default().trim().to_string();
    if name.is_empty() {
        return (StatusCode::BAD_REQUEST, "name is required").into_response();
    }

    let mut state = state.lock().unwrap();
    let item = Item {
        id: state.next_id,
        tenant_id: tenant,
        name,
        memo: None,
        image_url: None,
        is_completed: false,
    };
    state.next_id += 1;
    state.items.push(item.clone());
    (StatusCode::CREATED, Json(item)).into_response()
}

async fn update_item(
    State(state): State<Shared>,
    Path((tenant, id)): Path<(String, i64)>,
    headers: HeaderMap,
    Json(patch): Json<Map<String, Value>>,
) -> Response {
    record(&state, &headers);
    let mut state = state.lock().unwrap();
    let Some(item) = state
        .items
        .iter_mut()
        .find(|i| i.id == id && i.tenant_id == tenant)
    else {
        return not_found(id);
    };

    let text = |v: &Value| v.as_str().map(str::to_string);
    if let Some(name) = patch.get("name").and_then(Value::as_str) {
        item.name = name.trim().to_string();
    }
    if let Some(memo) = patch.get("memo") {
        item.memo = text(memo);
    }
    if let Some(url) = patch.get("imageUrl") {
        item.image_url = text(url);
    }
    if let Some(done) = patch.get("isCompleted").and_then(Value::as_bool) {
        item.is_completed = done;
    }
    Json(item.clone()).into_response()
}

async fn delete_item(
    State(state): State<Shared>,
    Path((tenant, id)): Path<(String, i64)>,
    headers: HeaderMap,
) -> Response {
    record(&state, &headers);
    let mut state = state.lock().unwrap();
    let before = state.items.len();
    state.items.retain(|i| !(i.id == id && i.tenant_id == tenant));
    if state.items.len() == before {
        return not_found(id);
    }
    // plain-text body: the client must not try to parse it
    (StatusCode::OK, "deleted").into_response()
}

async fn upload_image(
    State(state): State<Shared>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    record(&state, &headers);
    let mut url = None;
    while let Some(field) = multipart.next_field().await.unwrap() {
        let upload = Upload {
            field: field.name().unwrap_or_default().to_string(),
            file_name: field.file_name().map(str::to_string),
            content_type: field.content_type().map(str::to_string),
            len: 0,
        };
        let bytes = field.bytes().await.unwrap();
        if upload.field == "image" {
            url = upload
                .file_name
                .as_ref()
                .map(|name| format!("https://images.test/{}", name));
        }
        state.lock().unwrap().uploads.push(Upload {
            len: bytes.len(),
            ..upload
        });
    }

    match url {
        Some(url) => Json(json!({ "url": url })).into_response(),
        None => (StatusCode::BAD_REQUEST, "missing image field").into_response(),
    }
}
