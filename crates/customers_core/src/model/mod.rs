//! Customer domain model.
//!
//! # Responsibility
//! - Define field constraints, validation rules and the customer entity.
//! - Expose one factory as the only way to create a customer.
//!
//! # Invariants
//! - No `Customer` value can hold fields that fail validation.
//! - Deletion is a hard delete; there is no tombstone state.

pub mod constraints;
pub mod customer;
pub mod factory;
pub mod validation;
