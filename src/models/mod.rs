//! Database models shared across the customer repository.

#[cfg(feature = "server")]
pub mod config;
pub mod customer;
