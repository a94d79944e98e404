//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the find/save/delete contract the service depends on.
//! - Own the persistence boundary: id assignment and timestamp hooks.
//!
//! # Invariants
//! - `save` stamps timestamps through the entity hooks, never via callers.
//! - Read paths reject persisted rows that fail validation.

pub mod clock;
pub mod customer_repo;
