//! Transfer representation of a customer exposed at the service boundary.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::types::CustomerId;

/// Customer as seen by callers of the service and the JSON API.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    #[serde(default)]
    pub id: Option<CustomerId>,
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
}

impl CustomerDto {
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: CustomerId) -> Self {
        self.id = Some(id);
        self
    }
}
