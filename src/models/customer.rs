use diesel::prelude::*;

use crate::domain::customer::Customer as DomainCustomer;
use crate::domain::types::{CustomerId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::customers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::customer::Customer`].
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::customers)]
/// Insertable form of [`Customer`]; the id is assigned by SQLite.
pub struct NewCustomer<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::customers)]
/// Full overwrite of every mutable column of a [`Customer`] row.
pub struct UpdateCustomer<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
}

impl TryFrom<Customer> for DomainCustomer {
    type Error = TypeConstraintError;

    fn try_from(customer: Customer) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Some(CustomerId::new(customer.id)?),
            first_name: customer.first_name,
            last_name: customer.last_name,
            email: customer.email,
        })
    }
}

impl<'a> From<&'a DomainCustomer> for NewCustomer<'a> {
    fn from(customer: &'a DomainCustomer) -> Self {
        Self {
            first_name: customer.first_name.as_str(),
            last_name: customer.last_name.as_str(),
            email: customer.email.as_str(),
        }
    }
}

impl<'a> From<&'a DomainCustomer> for UpdateCustomer<'a> {
    fn from(customer: &'a DomainCustomer) -> Self {
        Self {
            first_name: customer.first_name.as_str(),
            last_name: customer.last_name.as_str(),
            email: customer.email.as_str(),
        }
    }
}
