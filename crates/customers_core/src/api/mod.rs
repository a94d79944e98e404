//! Transport mapping for the customer API.
//!
//! # Responsibility
//! - Route `/v1/customers` verbs and paths to service calls.
//! - Translate service outcomes into status codes and response bodies.
//! - Log expected and unexpected failures at the boundary.
//!
//! # Invariants
//! - Handlers never panic; every outcome becomes an [`ApiResponse`].
//! - Bodies are JSON for customer/validation payloads and plain text otherwise.

pub mod customers;

pub use customers::handle_request;

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_TEXT: &str = "text/plain";

/// Transport-neutral response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    /// `None` for empty bodies.
    pub content_type: Option<&'static str>,
    pub body: String,
}

impl ApiResponse {
    pub fn json(status: u16, body: String) -> Self {
        Self {
            status,
            content_type: Some(CONTENT_TYPE_JSON),
            body,
        }
    }

    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: Some(CONTENT_TYPE_TEXT),
            body: body.into(),
        }
    }

    pub fn empty(status: u16) -> Self {
        Self {
            status,
            content_type: None,
            body: String::new(),
        }
    }

    /// Returns whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
