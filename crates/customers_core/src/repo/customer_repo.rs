//! Customer repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide find/save/delete by numeric id over the `customers` table.
//! - Run the entity timestamp hooks immediately before each write.
//!
//! # Invariants
//! - First save assigns `id` and sets `created_at == updated_at`.
//! - Later saves re-stamp `updated_at` only.
//! - Rows that fail validation on read are reported, not masked.

use super::clock::{Clock, SystemClock};
use crate::db::migrations::ensure_schema_ready;
use crate::db::DbError;
use crate::model::customer::{Customer, CustomerId};
use crate::model::validation::ValidationFailure;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const CUSTOMER_SELECT_SQL: &str = "SELECT
    id,
    first_name,
    last_name,
    email,
    created_at,
    updated_at
FROM customers";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for customer persistence operations.
#[derive(Debug)]
pub enum RepoError {
    /// A stored row no longer satisfies customer validation.
    Validation(ValidationFailure),
    Db(DbError),
    NotFound(CustomerId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "invalid persisted customer: {err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "customer row not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid customer data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<ValidationFailure> for RepoError {
    fn from(value: ValidationFailure) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface consumed by the customer service.
pub trait CustomerRepository {
    /// Looks up one customer; `Ok(None)` when the id is unknown.
    fn find_by_id(&self, id: CustomerId) -> RepoResult<Option<Customer>>;
    /// Inserts unsaved customers and updates persisted ones.
    ///
    /// Returns the entity with id and timestamps as stored.
    fn save(&self, customer: Customer) -> RepoResult<Customer>;
    /// Permanently removes a persisted customer.
    fn delete(&self, customer: &Customer) -> RepoResult<()>;
}

impl<R: CustomerRepository + ?Sized> CustomerRepository for &R {
    fn find_by_id(&self, id: CustomerId) -> RepoResult<Option<Customer>> {
        (**self).find_by_id(id)
    }

    fn save(&self, customer: Customer) -> RepoResult<Customer> {
        (**self).save(customer)
    }

    fn delete(&self, customer: &Customer) -> RepoResult<()> {
        (**self).delete(customer)
    }
}

/// SQLite-backed customer repository.
pub struct SqliteCustomerRepository<'conn, C: Clock = SystemClock> {
    conn: &'conn Connection,
    clock: C,
}

impl<'conn> SqliteCustomerRepository<'conn, SystemClock> {
    /// Constructs a repository over a migrated connection using wall-clock time.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        Self::with_clock(conn, SystemClock)
    }
}

impl<'conn, C: Clock> SqliteCustomerRepository<'conn, C> {
    /// Constructs a repository with an explicit time source.
    pub fn with_clock(conn: &'conn Connection, clock: C) -> RepoResult<Self> {
        ensure_schema_ready(conn)?;
        Ok(Self { conn, clock })
    }

    fn insert(&self, mut customer: Customer) -> RepoResult<Customer> {
        customer.before_insert(self.clock.now_epoch_ms());

        self.conn.execute(
            "INSERT INTO customers (
                first_name,
                last_name,
                email,
                created_at,
                updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                customer.first_name(),
                customer.last_name(),
                customer.email(),
                customer.created_at(),
                customer.updated_at(),
            ],
        )?;

        customer.assign_id(self.conn.last_insert_rowid());
        Ok(customer)
    }

    fn update(&self, id: CustomerId, mut customer: Customer) -> RepoResult<Customer> {
        customer.before_update(self.clock.now_epoch_ms());

        let changed = self.conn.execute(
            "UPDATE customers
             SET
                first_name = ?1,
                last_name = ?2,
                email = ?3,
                updated_at = ?4
             WHERE id = ?5;",
            params![
                customer.first_name(),
                customer.last_name(),
                customer.email(),
                customer.updated_at(),
                id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(customer)
    }
}

impl<C: Clock> CustomerRepository for SqliteCustomerRepository<'_, C> {
    fn find_by_id(&self, id: CustomerId) -> RepoResult<Option<Customer>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CUSTOMER_SELECT_SQL} WHERE id = ?1;"))?;

        let row = stmt
            .query_row([id], |row| Ok(read_customer_row(row)))
            .optional()?;

        row.transpose()
    }

    fn save(&self, customer: Customer) -> RepoResult<Customer> {
        match customer.id() {
            None => self.insert(customer),
            Some(id) => self.update(id, customer),
        }
    }

    fn delete(&self, customer: &Customer) -> RepoResult<()> {
        let id = customer.id().ok_or_else(|| {
            RepoError::InvalidData("cannot delete a customer that was never saved".to_string())
        })?;

        let changed = self
            .conn
            .execute("DELETE FROM customers WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn read_customer_row(row: &Row<'_>) -> RepoResult<Customer> {
    let customer = Customer::restore(
        row.get("id")?,
        row.get("first_name")?,
        row.get("last_name")?,
        row.get("email")?,
        row.get("created_at")?,
        row.get("updated_at")?,
    )?;
    Ok(customer)
}

#[cfg(test)]
mod tests {
    use super::{CustomerRepository, RepoError, SqliteCustomerRepository};
    use crate::db::open_db_in_memory;
    use crate::db::DbError;
    use crate::model::factory::create_customer;
    use rusqlite::Connection;

    #[test]
    fn try_new_rejects_unmigrated_connection() {
        let conn = Connection::open_in_memory().unwrap();
        let err = SqliteCustomerRepository::try_new(&conn).err().unwrap();
        assert!(matches!(
            err,
            RepoError::Db(DbError::SchemaNotReady { db_version: 0, .. })
        ));
    }

    #[test]
    fn delete_rejects_unsaved_customer() {
        let conn = open_db_in_memory().unwrap();
        let repo = SqliteCustomerRepository::try_new(&conn).unwrap();
        let customer =
            create_customer(Some("John"), Some("Doe"), Some("johndoe@example.com")).unwrap();

        let err = repo.delete(&customer).unwrap_err();
        assert!(matches!(err, RepoError::InvalidData(_)));
    }

    #[test]
    fn find_reports_rows_that_fail_validation() {
        let conn = open_db_in_memory().unwrap();
        conn.execute(
            "INSERT INTO customers (first_name, last_name, email, created_at, updated_at)
             VALUES ('John', 'Doe', 'JOHN@EXAMPLE.COM', 1, 1);",
            [],
        )
        .unwrap();
        let repo = SqliteCustomerRepository::try_new(&conn).unwrap();

        let err = repo.find_by_id(1).unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
    }
}
