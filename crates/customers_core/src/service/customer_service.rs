//! Customer use-case service.
//!
//! # Responsibility
//! - Compose validation, lookup and persistence into find/create/update/delete.
//! - Translate repository absence into a domain-level not-found error.
//!
//! # Invariants
//! - Every operation performs at most one read and one write.
//! - Domain errors are propagated unchanged; logging of failures belongs to
//!   the transport boundary.
//! - A failed update leaves the stored record untouched.

use crate::dto::mapper::{to_dto, UnpersistedCustomer};
use crate::dto::{CustomerDto, CustomerInput};
use crate::model::customer::{Customer, CustomerId, CUSTOMER_ENTITY_NAME};
use crate::model::factory::create_customer;
use crate::model::validation::ValidationFailure;
use crate::repo::customer_repo::{CustomerRepository, RepoError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors returned by customer service operations.
#[derive(Debug)]
pub enum CustomerServiceError {
    /// Caller supplied no input payload.
    InvalidArgument(&'static str),
    /// One or more proposed field values are invalid.
    Validation(ValidationFailure),
    /// The id does not resolve to a stored record.
    NotFound {
        entity_name: &'static str,
        id: CustomerId,
    },
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and mapping.
    InconsistentState(&'static str),
}

impl CustomerServiceError {
    fn customer_not_found(id: CustomerId) -> Self {
        Self::NotFound {
            entity_name: CUSTOMER_ENTITY_NAME,
            id,
        }
    }
}

impl Display for CustomerServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(details) => write!(f, "invalid argument: {details}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound { entity_name, id } => {
                write!(f, "Entity '{entity_name}' was not found with id: {id}.")
            }
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => {
                write!(f, "inconsistent customer state: {details}")
            }
        }
    }
}

impl Error for CustomerServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationFailure> for CustomerServiceError {
    fn from(value: ValidationFailure) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for CustomerServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            // Row vanished between read and write.
            RepoError::NotFound(id) => Self::customer_not_found(id),
            other => Self::Repo(other),
        }
    }
}

impl From<UnpersistedCustomer> for CustomerServiceError {
    fn from(_: UnpersistedCustomer) -> Self {
        Self::InconsistentState("customer has no id after persistence")
    }
}

pub type ServiceResult<T> = Result<T, CustomerServiceError>;

/// Use-case service over a customer repository.
pub struct CustomerService<R: CustomerRepository> {
    repo: R,
}

impl<R: CustomerRepository> CustomerService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Gets one customer by id.
    pub fn find_by_id(&self, id: CustomerId) -> ServiceResult<CustomerDto> {
        let customer = self.get_customer(id)?;
        Ok(to_dto(&customer)?)
    }

    /// Validates and persists a new customer.
    ///
    /// # Errors
    /// - `InvalidArgument` when `input` is `None`.
    /// - `Validation` when any field is invalid; nothing is written.
    pub fn create(&self, input: Option<&CustomerInput>) -> ServiceResult<CustomerDto> {
        let input = input.ok_or(CustomerServiceError::InvalidArgument(
            "new customer data cannot be null",
        ))?;

        let customer = create_customer(
            input.first_name.as_deref(),
            input.last_name.as_deref(),
            input.email.as_deref(),
        )?;
        let saved = self.repo.save(customer)?;
        let dto = to_dto(&saved)?;

        info!(
            "event=customer_create module=service status=ok customer_id={}",
            dto.id
        );
        Ok(dto)
    }

    /// Replaces all three fields of an existing customer.
    ///
    /// # Errors
    /// - `InvalidArgument` when `input` is `None`.
    /// - `NotFound` when `id` is unknown.
    /// - `Validation` when any proposed field is invalid; stored state is unchanged.
    pub fn update(
        &self,
        id: CustomerId,
        input: Option<&CustomerInput>,
    ) -> ServiceResult<CustomerDto> {
        let input = input.ok_or(CustomerServiceError::InvalidArgument(
            "updated customer data cannot be null",
        ))?;

        let mut customer = self.get_customer(id)?;
        customer.update(
            input.first_name.as_deref(),
            input.last_name.as_deref(),
            input.email.as_deref(),
        )?;
        let saved = self.repo.save(customer)?;

        info!("event=customer_update module=service status=ok customer_id={id}");
        Ok(to_dto(&saved)?)
    }

    /// Permanently deletes one customer by id.
    pub fn delete_by_id(&self, id: CustomerId) -> ServiceResult<()> {
        let customer = self.get_customer(id)?;
        self.repo.delete(&customer)?;

        info!("event=customer_delete module=service status=ok customer_id={id}");
        Ok(())
    }

    fn get_customer(&self, id: CustomerId) -> ServiceResult<Customer> {
        self.repo
            .find_by_id(id)?
            .ok_or_else(|| CustomerServiceError::customer_not_found(id))
    }
}
