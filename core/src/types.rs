//! Domain DTOs for the shopping-list API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently of
//! the mock-server crate; integration tests catch schema drift. The server
//! sends extra bookkeeping fields (`created_at`, `display_order`) that the
//! client has no use for — serde ignores them on deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-assigned item identifier.
pub type ItemId = i64;

/// A single shopping-list entry as returned by the store.
///
/// The store owns the canonical copy; any `Item` held by the client is a
/// transient, possibly stale snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub is_completed: bool,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating a new item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateItem {
    pub name: String,
}

/// Request payload for renaming an existing item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameItem {
    pub name: String,
}

/// Structured rejection body: `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
