//! DTO modules that bridge services with callers and the JSON API.

pub mod customer;
