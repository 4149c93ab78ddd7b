//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::customer::Customer;
use crate::domain::types::CustomerId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{CustomerReader, CustomerWriter};

mock! {
    pub Repository {}

    impl CustomerReader for Repository {
        fn find_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>>;
        fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Customer>>;
        fn find_by_first_name_containing_ignore_case(
            &self,
            keyword: &str,
        ) -> RepositoryResult<Vec<Customer>>;
        fn find_all(&self) -> RepositoryResult<Vec<Customer>>;
    }

    impl CustomerWriter for Repository {
        fn save(&self, customer: &Customer) -> RepositoryResult<Customer>;
        fn delete_by_id(&self, id: CustomerId) -> RepositoryResult<()>;
    }
}
