//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! The core describes HTTP requests and responses as plain data and never
//! touches the network itself. Hosts implement [`Transport`] to execute a
//! request — a real HTTP agent in production and integration tests, a
//! scripted fake in unit tests — which keeps the synchronizer deterministic
//! and testable.
//!
//! No timeouts, retries, or cancellation: a request either completes or
//! fails once, and the failure is reported to the caller.

use crate::error::SyncError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `ItemClient::build_*` methods. `url` is absolute (base url
/// already applied).
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: Option<String>,
}

impl HttpRequest {
    /// A bodyless request.
    pub fn bare(method: HttpMethod, url: String) -> Self {
        Self {
            method,
            url,
            body: None,
        }
    }

    /// A request carrying a JSON body. The executing host is expected to
    /// send it with a `content-type: application/json` header.
    pub fn json(method: HttpMethod, url: String, body: String) -> Self {
        Self {
            method,
            url,
            body: Some(body),
        }
    }
}

/// An HTTP response described as plain data.
///
/// Constructed by the host after executing an [`HttpRequest`], then passed
/// to `ItemClient::parse_*` methods for status checking and deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes requests on behalf of the core.
///
/// Implementations must return `Err(SyncError::Transport)` for failures
/// below the HTTP layer (connection refused, malformed response) and an
/// `HttpResponse` for any status the server actually returned — 4xx/5xx
/// are data here, not transport errors.
pub trait Transport {
    fn execute(&mut self, request: &HttpRequest) -> Result<HttpResponse, SyncError>;
}
