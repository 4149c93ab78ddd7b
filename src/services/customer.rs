//! Customer use cases: create, read, search, update and delete.

use crate::domain::types::CustomerId;
use crate::dto::customer::CustomerDto;
use crate::mapper;
use crate::repository::errors::RepositoryError;
use crate::repository::{CustomerReader, CustomerWriter};
use crate::services::{ServiceError, ServiceResult};

/// Customers inserted by [`CustomerService::seed_demo_customers`].
pub const DEMO_CUSTOMERS: [(&str, &str, &str); 3] = [
    ("guy", "taltou", "gtaltou@gmail.com"),
    ("tom", "boudin", "tboudin@gmail.com"),
    ("ted", "jonhson", "tjonhson@gmail.com"),
];

/// Translates store errors raised while writing a customer.
///
/// The unique index on `email` is the authoritative uniqueness check; a row
/// vanishing between the existence check and the write reads as not found.
fn write_error(err: RepositoryError) -> ServiceError {
    match err {
        RepositoryError::UniqueViolation(_) => ServiceError::EmailAlreadyExists,
        RepositoryError::NotFound => ServiceError::CustomerNotFound,
        other => ServiceError::Repository(other),
    }
}

/// Service layer over a customer repository.
pub struct CustomerService<R> {
    repo: R,
}

impl<R> CustomerService<R>
where
    R: CustomerReader + CustomerWriter,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists a customer whose email is not used yet and returns it with
    /// its assigned id.
    pub fn save_new_customer(&self, dto: &CustomerDto) -> ServiceResult<CustomerDto> {
        if self.repo.find_by_email(&dto.email)?.is_some() {
            log::info!("Rejected new customer: email {} already exists", dto.email);
            return Err(ServiceError::EmailAlreadyExists);
        }

        let mut customer = mapper::from_customer_dto(dto);
        customer.id = None;

        let saved = self.repo.save(&customer).map_err(|err| {
            log::error!("Failed to save new customer: {err}");
            write_error(err)
        })?;

        if let Some(id) = saved.id {
            log::info!("Created customer {id}");
        }

        Ok(mapper::from_customer(&saved))
    }

    /// Returns every stored customer.
    pub fn get_all_customers(&self) -> ServiceResult<Vec<CustomerDto>> {
        let customers = self.repo.find_all().map_err(|err| {
            log::error!("Failed to list customers: {err}");
            err
        })?;

        Ok(mapper::from_list_customers(&customers))
    }

    pub fn find_customer_by_id(&self, id: CustomerId) -> ServiceResult<CustomerDto> {
        let customer = self
            .repo
            .find_by_id(id)?
            .ok_or(ServiceError::CustomerNotFound)?;

        Ok(mapper::from_customer(&customer))
    }

    /// Customers whose first name contains `keyword`, ignoring case. The
    /// keyword is passed to the store as-is; an empty keyword matches all.
    pub fn search_customers(&self, keyword: &str) -> ServiceResult<Vec<CustomerDto>> {
        let customers = self
            .repo
            .find_by_first_name_containing_ignore_case(keyword)
            .map_err(|err| {
                log::error!("Failed to search customers: {err}");
                err
            })?;

        Ok(mapper::from_list_customers(&customers))
    }

    /// Replaces every field of customer `id` with the values from `dto`.
    ///
    /// The row written is always `id`; any id carried by `dto` is ignored.
    pub fn update_customer(&self, id: CustomerId, dto: &CustomerDto) -> ServiceResult<CustomerDto> {
        if self.repo.find_by_id(id)?.is_none() {
            return Err(ServiceError::CustomerNotFound);
        }

        let customer = mapper::from_customer_dto(dto).with_id(id);

        let updated = self.repo.save(&customer).map_err(|err| {
            log::error!("Failed to update customer {id}: {err}");
            write_error(err)
        })?;

        log::info!("Updated customer {id}");

        Ok(mapper::from_customer(&updated))
    }

    pub fn delete_customer(&self, id: CustomerId) -> ServiceResult<()> {
        if self.repo.find_by_id(id)?.is_none() {
            return Err(ServiceError::CustomerNotFound);
        }

        self.repo.delete_by_id(id).map_err(|err| {
            log::error!("Failed to delete customer {id}: {err}");
            err
        })?;

        log::info!("Deleted customer {id}");

        Ok(())
    }

    /// Inserts the [`DEMO_CUSTOMERS`] that are not stored yet and returns how
    /// many were added.
    pub fn seed_demo_customers(&self) -> ServiceResult<usize> {
        let mut inserted = 0;
        for (first_name, last_name, email) in DEMO_CUSTOMERS {
            match self.save_new_customer(&CustomerDto::new(first_name, last_name, email)) {
                Ok(_) => inserted += 1,
                Err(ServiceError::EmailAlreadyExists) => continue,
                Err(err) => return Err(err),
            }
        }
        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::Customer;
    use crate::repository::mock::MockRepository;

    fn id(value: i64) -> CustomerId {
        CustomerId::new(value).expect("valid customer id")
    }

    #[test]
    fn saves_new_customer() {
        let mut repo = MockRepository::new();
        repo.expect_find_by_email()
            .withf(|email| email == "mbouchar@gmail.com")
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_save()
            .withf(|customer| {
                customer == &Customer::new("magali", "bouchar", "mbouchar@gmail.com")
            })
            .times(1)
            .returning(|customer| Ok(customer.clone().with_id(CustomerId::new(1).unwrap())));
        let service = CustomerService::new(repo);

        let result = service
            .save_new_customer(&CustomerDto::new("magali", "bouchar", "mbouchar@gmail.com"))
            .expect("customer should be saved");

        assert_eq!(
            result,
            CustomerDto::new("magali", "bouchar", "mbouchar@gmail.com").with_id(id(1))
        );
    }

    #[test]
    fn new_customer_ignores_submitted_id() {
        let mut repo = MockRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_save()
            .withf(|customer| customer.id.is_none())
            .times(1)
            .returning(|customer| Ok(customer.clone().with_id(CustomerId::new(4).unwrap())));
        let service = CustomerService::new(repo);

        let dto = CustomerDto::new("magali", "bouchar", "mbouchar@gmail.com").with_id(id(99));
        let result = service.save_new_customer(&dto).unwrap();

        assert_eq!(result.id, Some(id(4)));
    }

    #[test]
    fn does_not_save_customer_when_email_exists() {
        let mut repo = MockRepository::new();
        repo.expect_find_by_email().times(1).returning(|_| {
            Ok(Some(
                Customer::new("magali", "bouchar", "xxxxx@gmail.com")
                    .with_id(CustomerId::new(5).unwrap()),
            ))
        });
        repo.expect_save().times(0);
        let service = CustomerService::new(repo);

        let result =
            service.save_new_customer(&CustomerDto::new("magali", "bouchar", "xxxxx@gmail.com"));

        assert!(matches!(result, Err(ServiceError::EmailAlreadyExists)));
    }

    #[test]
    fn unique_violation_on_insert_reports_existing_email() {
        let mut repo = MockRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_save().times(1).returning(|_| {
            Err(RepositoryError::UniqueViolation(
                "UNIQUE constraint failed: customers.email".to_string(),
            ))
        });
        let service = CustomerService::new(repo);

        let result =
            service.save_new_customer(&CustomerDto::new("magali", "bouchar", "race@gmail.com"));

        assert!(matches!(result, Err(ServiceError::EmailAlreadyExists)));
    }

    #[test]
    fn gets_all_customers() {
        let mut repo = MockRepository::new();
        repo.expect_find_all().times(1).returning(|| {
            Ok(vec![
                Customer::new("guy", "taltou", "gtaltou@gmail.com"),
                Customer::new("ted", "jonhson", "tjonhson@gmail.com"),
            ])
        });
        let service = CustomerService::new(repo);

        let result = service.get_all_customers().unwrap();

        assert_eq!(
            result,
            vec![
                CustomerDto::new("guy", "taltou", "gtaltou@gmail.com"),
                CustomerDto::new("ted", "jonhson", "tjonhson@gmail.com"),
            ]
        );
    }

    #[test]
    fn gets_empty_list_when_store_is_empty() {
        let mut repo = MockRepository::new();
        repo.expect_find_all().returning(|| Ok(vec![]));
        let service = CustomerService::new(repo);

        assert!(service.get_all_customers().unwrap().is_empty());
    }

    #[test]
    fn finds_customer_by_id() {
        let mut repo = MockRepository::new();
        repo.expect_find_by_id()
            .withf(|customer_id| customer_id.get() == 1)
            .times(1)
            .returning(|customer_id| {
                Ok(Some(
                    Customer::new("guy", "taltou", "gtaltou@gmail.com").with_id(customer_id),
                ))
            });
        let service = CustomerService::new(repo);

        let result = service.find_customer_by_id(id(1)).unwrap();

        assert_eq!(
            result,
            CustomerDto::new("guy", "taltou", "gtaltou@gmail.com").with_id(id(1))
        );
    }

    #[test]
    fn missing_customer_by_id_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_find_by_id().times(1).returning(|_| Ok(None));
        let service = CustomerService::new(repo);

        let result = service.find_customer_by_id(id(10));

        assert!(matches!(result, Err(ServiceError::CustomerNotFound)));
    }

    #[test]
    fn searches_customers_with_keyword_verbatim() {
        let mut repo = MockRepository::new();
        repo.expect_find_by_first_name_containing_ignore_case()
            .withf(|keyword| keyword == "m")
            .times(1)
            .returning(|_| {
                Ok(vec![
                    Customer::new("guy", "taltou", "gtaltou@gmail.com"),
                    Customer::new("ted", "jonhson", "tjonhson@gmail.com"),
                ])
            });
        let service = CustomerService::new(repo);

        let result = service.search_customers("m").unwrap();

        assert_eq!(
            result,
            vec![
                CustomerDto::new("guy", "taltou", "gtaltou@gmail.com"),
                CustomerDto::new("ted", "jonhson", "tjonhson@gmail.com"),
            ]
        );
    }

    #[test]
    fn updates_customer() {
        let mut repo = MockRepository::new();
        repo.expect_find_by_id().times(1).returning(|customer_id| {
            Ok(Some(
                Customer::new("guy", "taltou", "old@gmail.com").with_id(customer_id),
            ))
        });
        repo.expect_save()
            .withf(|customer| {
                customer
                    == &Customer::new("guy", "taltou", "taltou@gmail.com")
                        .with_id(CustomerId::new(6).unwrap())
            })
            .times(1)
            .returning(|customer| Ok(customer.clone()));
        let service = CustomerService::new(repo);

        let dto = CustomerDto::new("guy", "taltou", "taltou@gmail.com").with_id(id(6));
        let result = service.update_customer(id(6), &dto).unwrap();

        assert_eq!(result, dto);
    }

    #[test]
    fn update_writes_to_argument_id_not_body_id() {
        let mut repo = MockRepository::new();
        repo.expect_find_by_id().returning(|customer_id| {
            Ok(Some(
                Customer::new("guy", "taltou", "taltou@gmail.com").with_id(customer_id),
            ))
        });
        repo.expect_save()
            .withf(|customer| customer.id.map(CustomerId::get) == Some(6))
            .times(2)
            .returning(|customer| Ok(customer.clone()));
        let service = CustomerService::new(repo);

        let mismatched = CustomerDto::new("guy", "taltou", "taltou@gmail.com").with_id(id(7));
        assert_eq!(
            service.update_customer(id(6), &mismatched).unwrap().id,
            Some(id(6))
        );

        let without_id = CustomerDto::new("guy", "taltou", "taltou@gmail.com");
        assert_eq!(
            service.update_customer(id(6), &without_id).unwrap().id,
            Some(id(6))
        );
    }

    #[test]
    fn update_of_missing_customer_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_find_by_id().times(1).returning(|_| Ok(None));
        repo.expect_save().times(0);
        let service = CustomerService::new(repo);

        let result =
            service.update_customer(id(6), &CustomerDto::new("guy", "taltou", "x@gmail.com"));

        assert!(matches!(result, Err(ServiceError::CustomerNotFound)));
    }

    #[test]
    fn update_onto_taken_email_reports_existing_email() {
        let mut repo = MockRepository::new();
        repo.expect_find_by_id().returning(|customer_id| {
            Ok(Some(
                Customer::new("guy", "taltou", "taltou@gmail.com").with_id(customer_id),
            ))
        });
        repo.expect_save()
            .returning(|_| Err(RepositoryError::UniqueViolation("email".to_string())));
        let service = CustomerService::new(repo);

        let result = service.update_customer(
            id(6),
            &CustomerDto::new("guy", "taltou", "tboudin@gmail.com"),
        );

        assert!(matches!(result, Err(ServiceError::EmailAlreadyExists)));
    }

    #[test]
    fn deletes_customer() {
        let mut repo = MockRepository::new();
        repo.expect_find_by_id().times(1).returning(|customer_id| {
            Ok(Some(
                Customer::new("guy", "taltou", "taltou@gmail.com").with_id(customer_id),
            ))
        });
        repo.expect_delete_by_id()
            .withf(|customer_id| customer_id.get() == 1)
            .times(1)
            .returning(|_| Ok(()));
        let service = CustomerService::new(repo);

        service.delete_customer(id(1)).expect("customer should be deleted");
    }

    #[test]
    fn does_not_delete_missing_customer() {
        let mut repo = MockRepository::new();
        repo.expect_find_by_id().times(1).returning(|_| Ok(None));
        repo.expect_delete_by_id().times(0);
        let service = CustomerService::new(repo);

        let result = service.delete_customer(id(10));

        assert!(matches!(result, Err(ServiceError::CustomerNotFound)));
    }

    #[test]
    fn repository_failures_are_propagated() {
        let mut repo = MockRepository::new();
        repo.expect_find_all()
            .returning(|| Err(RepositoryError::ConnectionError("down".to_string())));
        let service = CustomerService::new(repo);

        let result = service.get_all_customers();

        assert!(matches!(
            result,
            Err(ServiceError::Repository(RepositoryError::ConnectionError(_)))
        ));
    }

    #[test]
    fn seeding_skips_existing_emails() {
        let mut repo = MockRepository::new();
        repo.expect_find_by_email().times(3).returning(|email| {
            if email == "tboudin@gmail.com" {
                Ok(Some(
                    Customer::new("tom", "boudin", email).with_id(CustomerId::new(2).unwrap()),
                ))
            } else {
                Ok(None)
            }
        });
        repo.expect_save()
            .times(2)
            .returning(|customer| Ok(customer.clone().with_id(CustomerId::new(9).unwrap())));
        let service = CustomerService::new(repo);

        assert_eq!(service.seed_demo_customers().unwrap(), 2);
    }
}
