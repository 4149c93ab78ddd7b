use serde::{Deserialize, Serialize};

use crate::domain::types::CustomerId;

/// Customer record as persisted by the repository.
///
/// `id` stays `None` until the store assigns one on the first save.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Customer {
    pub id: Option<CustomerId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Customer {
    /// Builds a customer that has not been persisted yet.
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

    /// Returns the same customer bound to the given identifier.
    #[must_use]
    pub fn with_id(mut self, id: CustomerId) -> Self {
        self.id = Some(id);
        self
    }
}
