//! Entity to transfer-shape mapping.

use super::CustomerDto;
use crate::model::customer::Customer;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Mapping failure for customers that were never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnpersistedCustomer;

impl Display for UnpersistedCustomer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "customer has no storage id and cannot be mapped")
    }
}

impl Error for UnpersistedCustomer {}

/// Maps a persisted customer to its transfer shape.
pub fn to_dto(customer: &Customer) -> Result<CustomerDto, UnpersistedCustomer> {
    let id = customer.id().ok_or(UnpersistedCustomer)?;
    Ok(CustomerDto {
        id,
        first_name: customer.first_name().to_string(),
        last_name: customer.last_name().to_string(),
        email: customer.email().to_string(),
    })
}

impl TryFrom<&Customer> for CustomerDto {
    type Error = UnpersistedCustomer;

    fn try_from(value: &Customer) -> Result<Self, Self::Error> {
        to_dto(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{to_dto, UnpersistedCustomer};
    use crate::model::factory::create_customer;

    #[test]
    fn unsaved_customer_is_rejected() {
        let customer =
            create_customer(Some("John"), Some("Doe"), Some("johndoe@example.com")).unwrap();
        assert_eq!(to_dto(&customer), Err(UnpersistedCustomer));
    }

    #[test]
    fn persisted_customer_maps_every_field() {
        let mut customer =
            create_customer(Some("John"), Some("Doe"), Some("johndoe@example.com")).unwrap();
        customer.assign_id(1);

        let dto = to_dto(&customer).unwrap();
        assert_eq!(dto.id, 1);
        assert_eq!(dto.first_name, "John");
        assert_eq!(dto.last_name, "Doe");
        assert_eq!(dto.email, "johndoe@example.com");
    }
}
