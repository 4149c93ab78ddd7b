//! Translation between the stored [`Customer`] entity and the [`CustomerDto`]
//! handed to callers.
//!
//! Both shapes currently carry the same fields; this module is the only place
//! that needs to change once they diverge.

use thiserror::Error;

use crate::domain::customer::Customer;
use crate::dto::customer::CustomerDto;

/// Errors raised when the mapper is handed input it cannot translate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapperError {
    #[error("no input to map")]
    MissingInput,
}

/// Copies an entity into its transfer representation.
pub fn from_customer(customer: &Customer) -> CustomerDto {
    CustomerDto::from(customer.clone())
}

/// Copies a transfer representation into an entity.
pub fn from_customer_dto(dto: &CustomerDto) -> Customer {
    Customer::from(dto.clone())
}

/// Maps every entity, keeping order and length.
pub fn from_list_customers(customers: &[Customer]) -> Vec<CustomerDto> {
    customers.iter().map(from_customer).collect()
}

impl From<Customer> for CustomerDto {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            first_name: customer.first_name,
            last_name: customer.last_name,
            email: customer.email,
        }
    }
}

impl From<CustomerDto> for Customer {
    fn from(dto: CustomerDto) -> Self {
        Self {
            id: dto.id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
        }
    }
}

impl TryFrom<Option<Customer>> for CustomerDto {
    type Error = MapperError;

    fn try_from(customer: Option<Customer>) -> Result<Self, Self::Error> {
        customer.map(Into::into).ok_or(MapperError::MissingInput)
    }
}

impl TryFrom<Option<CustomerDto>> for Customer {
    type Error = MapperError;

    fn try_from(dto: Option<CustomerDto>) -> Result<Self, Self::Error> {
        dto.map(Into::into).ok_or(MapperError::MissingInput)
    }
}
