//! Sole creation path for customer entities.

use super::customer::Customer;
use super::validation::{ensure_validity, ValidationFailure};

/// Validates raw values and builds a new, unsaved customer.
///
/// `id` and timestamps stay unset until the repository persists the entity.
pub fn create_customer(
    first_name: Option<&str>,
    last_name: Option<&str>,
    email: Option<&str>,
) -> Result<Customer, ValidationFailure> {
    ensure_validity(first_name, last_name, email)?;

    // Every value is present once validation has passed.
    Ok(Customer::new(
        first_name.unwrap_or_default().to_string(),
        last_name.unwrap_or_default().to_string(),
        email.unwrap_or_default().to_string(),
    ))
}
