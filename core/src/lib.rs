//! Client core for the shopping-list service.
//!
//! # Overview
//! [`ListSync`] mediates between a local in-memory view of items and the
//! remote store accessed over HTTP: initial load, create, rename,
//! toggle-complete, delete, and last-modified tracking. The view mutates
//! only on confirmed server responses; the single optimistic update (the
//! completion checkbox) is rolled back exactly when the store refuses.
//!
//! # Design
//! - `ItemClient` is stateless: each operation is a `build_*` request
//!   producer paired with a `parse_*` response consumer, and the host
//!   executes the round-trip through the [`Transport`] seam (host-does-IO).
//! - `ListSync` layers the stateful reconcile loop on top: the view, the
//!   single edit session, the two-step delete confirmation, and the
//!   last-modified timestamp.
//! - Names are validated locally before any request is built, mirroring the
//!   store's own rules; validation failures never cost a round-trip.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod sync;
pub mod types;
pub mod validate;

pub use client::ItemClient;
pub use error::{SyncError, ValidationError, GENERIC_ERROR_MESSAGE};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use sync::{EditSession, ItemRow, ListSync};
pub use types::{CreateItem, ErrorBody, Item, ItemId, RenameItem};
pub use validate::{validate_name, MAX_NAME_CHARS};
