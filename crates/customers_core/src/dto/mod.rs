//! Boundary data shapes.
//!
//! # Responsibility
//! - Define the unvalidated input shape accepted from callers.
//! - Define the transfer shape returned to callers.
//!
//! # Invariants
//! - DTOs carry data only; validation and lifecycle stay in `model`.
//! - Wire field names use camelCase (`firstName`, `lastName`, `email`).

pub mod mapper;

use crate::model::customer::CustomerId;
use serde::{Deserialize, Serialize};

/// Proposed customer values supplied by a caller.
///
/// Any field may be absent; missing JSON keys deserialize as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInput {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl CustomerInput {
    /// Builds an input with all three values present.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            email: Some(email.into()),
        }
    }
}

/// Externally visible customer representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}
