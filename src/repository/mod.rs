use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{customer::Customer, types::CustomerId},
    repository::errors::RepositoryResult,
};

pub mod customer;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Diesel-backed store shared by every service and HTTP worker.
///
/// Cloning is cheap: all clones share the same connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

pub trait CustomerReader {
    fn find_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>>;
    fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Customer>>;
    /// Customers whose first name contains `keyword`, ignoring case.
    fn find_by_first_name_containing_ignore_case(
        &self,
        keyword: &str,
    ) -> RepositoryResult<Vec<Customer>>;
    fn find_all(&self) -> RepositoryResult<Vec<Customer>>;
}

pub trait CustomerWriter {
    /// Inserts the customer when it has no id yet, otherwise overwrites the
    /// row with the same id. Returns the stored record.
    fn save(&self, customer: &Customer) -> RepositoryResult<Customer>;
    fn delete_by_id(&self, id: CustomerId) -> RepositoryResult<()>;
}
