//! Repository implementation for customers.

use diesel::prelude::*;

use crate::{
    db::unicode_lower,
    domain::{customer::Customer, types::CustomerId},
    models::customer::{
        Customer as DbCustomer, NewCustomer as DbNewCustomer, UpdateCustomer as DbUpdateCustomer,
    },
    repository::{
        CustomerReader, CustomerWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
};

/// Builds a `LIKE` pattern matching `keyword` anywhere, with SQL wildcards
/// in the keyword itself escaped by `\`.
fn contains_pattern(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');
    for c in keyword.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn into_domain(customers: Vec<DbCustomer>) -> RepositoryResult<Vec<Customer>> {
    customers
        .into_iter()
        .map(|customer| Customer::try_from(customer).map_err(RepositoryError::from))
        .collect()
}

impl CustomerReader for DieselRepository {
    fn find_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let customer = customers::table
            .find(id.get())
            .select(DbCustomer::as_select())
            .first::<DbCustomer>(&mut conn)
            .optional()?;

        customer
            .map(|customer| Customer::try_from(customer).map_err(RepositoryError::from))
            .transpose()
    }

    fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Customer>> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let customer = customers::table
            .filter(customers::email.eq(email))
            .select(DbCustomer::as_select())
            .first::<DbCustomer>(&mut conn)
            .optional()?;

        customer
            .map(|customer| Customer::try_from(customer).map_err(RepositoryError::from))
            .transpose()
    }

    fn find_by_first_name_containing_ignore_case(
        &self,
        keyword: &str,
    ) -> RepositoryResult<Vec<Customer>> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let pattern = contains_pattern(&keyword.to_lowercase());

        let items = customers::table
            .filter(
                unicode_lower(customers::first_name)
                    .like(&pattern)
                    .escape('\\'),
            )
            .order(customers::id.asc())
            .select(DbCustomer::as_select())
            .load::<DbCustomer>(&mut conn)?;

        into_domain(items)
    }

    fn find_all(&self) -> RepositoryResult<Vec<Customer>> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let items = customers::table
            .order(customers::id.asc())
            .select(DbCustomer::as_select())
            .load::<DbCustomer>(&mut conn)?;

        into_domain(items)
    }
}

impl CustomerWriter for DieselRepository {
    fn save(&self, customer: &Customer) -> RepositoryResult<Customer> {
        use crate::schema::customers;

        let mut conn = self.conn()?;

        let stored = match customer.id {
            None => {
                let db_new: DbNewCustomer = customer.into();
                diesel::insert_into(customers::table)
                    .values(&db_new)
                    .returning(DbCustomer::as_returning())
                    .get_result::<DbCustomer>(&mut conn)?
            }
            Some(id) => {
                let db_update: DbUpdateCustomer = customer.into();
                diesel::update(customers::table.find(id.get()))
                    .set(&db_update)
                    .returning(DbCustomer::as_returning())
                    .get_result::<DbCustomer>(&mut conn)?
            }
        };

        Customer::try_from(stored).map_err(RepositoryError::from)
    }

    fn delete_by_id(&self, id: CustomerId) -> RepositoryResult<()> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        diesel::delete(customers::table.find(id.get())).execute(&mut conn)?;
        Ok(())
    }
}
