//! Customer domain entity.
//!
//! # Responsibility
//! - Hold the only in-memory representation of a customer record.
//! - Guard every write path with full field validation.
//!
//! # Invariants
//! - Field values always pass `ensure_validity`.
//! - `id` is assigned once by storage and never changes afterwards.
//! - `created_at` and `updated_at` are stamped by the persistence boundary only,
//!   and `updated_at > created_at` after any update.

use super::validation::{ensure_validity, ValidationFailure};

/// Storage-assigned numeric customer identifier.
pub type CustomerId = i64;

/// Name used for this entity in not-found diagnostics.
pub const CUSTOMER_ENTITY_NAME: &str = "Customer";

/// Persisted customer record.
///
/// Fields are private; create through [`super::factory::create_customer`] and
/// mutate through [`Customer::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id: Option<CustomerId>,
    first_name: String,
    last_name: String,
    email: String,
    created_at: Option<i64>,
    updated_at: Option<i64>,
}

impl Customer {
    /// Builds an unsaved customer from already-validated values.
    pub(super) fn new(first_name: String, last_name: String, email: String) -> Self {
        Self {
            id: None,
            first_name,
            last_name,
            email,
            created_at: None,
            updated_at: None,
        }
    }

    /// Rebuilds a customer from a stored row.
    ///
    /// Rows that no longer satisfy validation are rejected instead of masked.
    pub(crate) fn restore(
        id: CustomerId,
        first_name: String,
        last_name: String,
        email: String,
        created_at: i64,
        updated_at: i64,
    ) -> Result<Self, ValidationFailure> {
        ensure_validity(Some(&first_name), Some(&last_name), Some(&email))?;
        Ok(Self {
            id: Some(id),
            first_name,
            last_name,
            email,
            created_at: Some(created_at),
            updated_at: Some(updated_at.max(created_at)),
        })
    }

    /// Replaces all three mutable fields after validating the proposed values.
    ///
    /// Either every field changes or none does.
    pub fn update(
        &mut self,
        first_name: Option<&str>,
        last_name: Option<&str>,
        email: Option<&str>,
    ) -> Result<(), ValidationFailure> {
        ensure_validity(first_name, last_name, email)?;

        if let (Some(first_name), Some(last_name), Some(email)) = (first_name, last_name, email) {
            self.first_name = first_name.to_string();
            self.last_name = last_name.to_string();
            self.email = email.to_string();
        }
        Ok(())
    }

    pub fn id(&self) -> Option<CustomerId> {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Epoch milliseconds of first persistence, `None` while unsaved.
    pub fn created_at(&self) -> Option<i64> {
        self.created_at
    }

    /// Epoch milliseconds of the latest persistence, `None` while unsaved.
    pub fn updated_at(&self) -> Option<i64> {
        self.updated_at
    }

    /// Returns whether storage has assigned an id yet.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Pre-insert hook: stamps both timestamps with the same instant.
    pub(crate) fn before_insert(&mut self, now_epoch_ms: i64) {
        self.created_at = Some(now_epoch_ms);
        self.updated_at = Some(now_epoch_ms);
    }

    /// Pre-update hook: re-stamps `updated_at` strictly after its previous value.
    ///
    /// Saves within the same millisecond still move `updated_at` forward.
    pub(crate) fn before_update(&mut self, now_epoch_ms: i64) {
        let previous = self.updated_at.or(self.created_at);
        let floor = previous.map_or(now_epoch_ms, |stamp| stamp.saturating_add(1));
        self.updated_at = Some(now_epoch_ms.max(floor));
    }

    /// Records the storage-assigned id. Ignored once an id is set.
    pub(crate) fn assign_id(&mut self, id: CustomerId) {
        if self.id.is_none() {
            self.id = Some(id);
        }
    }
}
