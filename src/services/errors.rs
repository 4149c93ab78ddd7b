use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Errors surfaced by the customer use cases.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Another customer already uses the submitted email.
    #[error("email already exists")]
    EmailAlreadyExists,

    /// No customer matches the requested id.
    #[error("customer not found")]
    CustomerNotFound,

    #[error("type constraint violation: {0}")]
    TypeConstraint(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
