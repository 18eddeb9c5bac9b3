//! In-memory implementation of the shopping-list store's HTTP contract.
//!
//! Mirrors the production store's observable behavior: sequential integer
//! ids, insertion (display) order, server-side name validation with
//! Japanese error messages, `{"error"}` bodies on rejection, and
//! `created_at`/`updated_at` maintenance. Used by the core crate's
//! integration tests and runnable standalone.

use std::sync::{Arc, LazyLock};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct CreateItem {
    pub name: String,
}

#[derive(Deserialize)]
pub struct RenameItem {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Items in display order plus the id counter.
#[derive(Debug, Default)]
pub struct Store {
    next_id: i64,
    items: Vec<Item>,
}

pub type Db = Arc<RwLock<Store>>;

type Rejection = (StatusCode, Json<ErrorBody>);

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/api/items", get(list_items).post(create_item))
        .route("/api/items/{id}", put(rename_item).delete(delete_item))
        .route("/api/items/{id}/toggle", put(toggle_item))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

static ALLOWED_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\u{3040}-\u{309F}\u{30A0}-\u{30FF}\u{4E00}-\u{9FFF}\w\s,.-]*$")
        .expect("name whitelist regex is valid")
});

/// Validate an item name and return its trimmed form, or the rejection the
/// client will see.
fn validate_name(name: &str) -> Result<String, Rejection> {
    let name = name.trim();
    if name.is_empty() {
        return Err(reject(StatusCode::BAD_REQUEST, "商品名は空にできません"));
    }
    if name.chars().count() > 100 {
        return Err(reject(
            StatusCode::BAD_REQUEST,
            "商品名は100文字以内にしてください",
        ));
    }
    if !ALLOWED_NAME.is_match(name) {
        return Err(reject(
            StatusCode::BAD_REQUEST,
            "商品名に使用できない文字が含まれています",
        ));
    }
    Ok(name.to_string())
}

fn reject(status: StatusCode, message: &str) -> Rejection {
    (
        status,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
}

fn not_found() -> Rejection {
    reject(StatusCode::NOT_FOUND, "指定された商品が見つかりません")
}

async fn list_items(State(db): State<Db>) -> Json<Vec<Item>> {
    let store = db.read().await;
    tracing::debug!(count = store.items.len(), "listing items");
    Json(store.items.clone())
}

async fn create_item(
    State(db): State<Db>,
    Json(input): Json<CreateItem>,
) -> Result<(StatusCode, Json<Item>), Rejection> {
    let name = validate_name(&input.name)?;
    let mut store = db.write().await;
    store.next_id += 1;
    let now = Utc::now();
    let item = Item {
        id: store.next_id,
        name,
        is_completed: false,
        created_at: now,
        updated_at: now,
    };
    tracing::debug!(id = item.id, name = %item.name, "created item");
    store.items.push(item.clone());
    Ok((StatusCode::CREATED, Json(item)))
}

async fn rename_item(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<RenameItem>,
) -> Result<Json<Item>, Rejection> {
    let name = validate_name(&input.name)?;
    let mut store = db.write().await;
    let item = store
        .items
        .iter_mut()
        .find(|item| item.id == id)
        .ok_or_else(not_found)?;
    item.name = name;
    item.updated_at = Utc::now();
    tracing::debug!(id, name = %item.name, "renamed item");
    Ok(Json(item.clone()))
}

async fn toggle_item(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Item>, Rejection> {
    let mut store = db.write().await;
    let item = store
        .items
        .iter_mut()
        .find(|item| item.id == id)
        .ok_or_else(not_found)?;
    item.is_completed = !item.is_completed;
    item.updated_at = Utc::now();
    tracing::debug!(id, is_completed = item.is_completed, "toggled item");
    Ok(Json(item.clone()))
}

async fn delete_item(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Rejection> {
    let mut store = db.write().await;
    let before = store.items.len();
    store.items.retain(|item| item.id != id);
    if store.items.len() == before {
        return Err(not_found());
    }
    tracing::debug!(id, "deleted item");
    Ok(StatusCode::NO_CONTENT)
}
