//! Stateless HTTP request builder and response parser for the items API.
//!
//! # Design
//! `ItemClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! [`HttpRequest`] and a `parse_*` method that consumes an [`HttpResponse`].
//! The host executes the round-trip in between, keeping this layer
//! deterministic and free of I/O.
//!
//! Non-success responses carry a structured `{"error"}` body when the store
//! rejected the request deliberately; `parse_*` surfaces that message inside
//! [`SyncError::Rejected`] so the presentation layer can show it verbatim.

use crate::error::SyncError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateItem, ErrorBody, Item, ItemId, RenameItem};

/// Stateless client for the shopping-list items API.
#[derive(Debug, Clone)]
pub struct ItemClient {
    base_url: String,
}

impl ItemClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_items(&self) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Get, format!("{}/api/items", self.base_url))
    }

    pub fn build_create_item(&self, input: &CreateItem) -> Result<HttpRequest, SyncError> {
        let body =
            serde_json::to_string(input).map_err(|e| SyncError::Transport(e.to_string()))?;
        Ok(HttpRequest::json(
            HttpMethod::Post,
            format!("{}/api/items", self.base_url),
            body,
        ))
    }

    pub fn build_toggle_item(&self, id: ItemId) -> HttpRequest {
        HttpRequest::bare(
            HttpMethod::Put,
            format!("{}/api/items/{id}/toggle", self.base_url),
        )
    }

    pub fn build_rename_item(&self, id: ItemId, input: &RenameItem) -> Result<HttpRequest, SyncError> {
        let body =
            serde_json::to_string(input).map_err(|e| SyncError::Transport(e.to_string()))?;
        Ok(HttpRequest::json(
            HttpMethod::Put,
            format!("{}/api/items/{id}", self.base_url),
            body,
        ))
    }

    pub fn build_delete_item(&self, id: ItemId) -> HttpRequest {
        HttpRequest::bare(
            HttpMethod::Delete,
            format!("{}/api/items/{id}", self.base_url),
        )
    }

    pub fn parse_list_items(&self, response: HttpResponse) -> Result<Vec<Item>, SyncError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| SyncError::Transport(e.to_string()))
    }

    pub fn parse_create_item(&self, response: HttpResponse) -> Result<Item, SyncError> {
        check_status(&response, 201)?;
        serde_json::from_str(&response.body).map_err(|e| SyncError::Transport(e.to_string()))
    }

    pub fn parse_toggle_item(&self, response: HttpResponse) -> Result<Item, SyncError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| SyncError::Transport(e.to_string()))
    }

    pub fn parse_rename_item(&self, response: HttpResponse) -> Result<Item, SyncError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| SyncError::Transport(e.to_string()))
    }

    pub fn parse_delete_item(&self, response: HttpResponse) -> Result<(), SyncError> {
        check_status(&response, 204)
    }
}

/// Map a non-expected status to `Rejected`, recovering the `{"error"}` body
/// when the store sent one.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), SyncError> {
    if response.status == expected {
        return Ok(());
    }
    let message = serde_json::from_str::<ErrorBody>(&response.body)
        .ok()
        .map(|b| b.error);
    Err(SyncError::Rejected {
        status: response.status,
        message,
    })
}
