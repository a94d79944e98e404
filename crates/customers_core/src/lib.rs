//! Core domain logic for customer records.
//! This crate is the single source of truth for customer business invariants.

pub mod api;
pub mod config;
pub mod db;
pub mod dto;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use api::{handle_request, ApiResponse};
pub use config::{CoreConfig, LoggingConfig, StorageLocation};
pub use dto::mapper::{to_dto, UnpersistedCustomer};
pub use dto::{CustomerDto, CustomerInput};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::customer::{Customer, CustomerId, CUSTOMER_ENTITY_NAME};
pub use model::factory::create_customer;
pub use model::validation::{ensure_validity, validate, ValidationError, ValidationFailure};
pub use repo::clock::{Clock, SystemClock};
pub use repo::customer_repo::{CustomerRepository, RepoError, RepoResult, SqliteCustomerRepository};
pub use service::customer_service::{CustomerService, CustomerServiceError, ServiceResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
