//! JSON HTTP surface over the customer service.

use std::fmt::{Debug, Display};

use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{Error, HttpResponse};
use serde_json::json;

use crate::services::ServiceError;

pub mod customer;

/// Maps a service error onto the HTTP status reported to clients.
pub fn service_error_status(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::CustomerNotFound => StatusCode::NOT_FOUND,
        ServiceError::EmailAlreadyExists => StatusCode::CONFLICT,
        ServiceError::TypeConstraint(_) => StatusCode::BAD_REQUEST,
        ServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Builds the `{"error": ...}` response for a failed service call.
pub fn service_error_response(err: &ServiceError) -> HttpResponse {
    let status = service_error_status(err);
    if status.is_server_error() {
        log::error!("Customer request failed: {err}");
        return HttpResponse::build(status).json(json!({ "error": "internal server error" }));
    }
    HttpResponse::build(status).json(json!({ "error": err.to_string() }))
}

/// Turns an extractor failure (bad path segment, query or JSON body) into a
/// 400 carrying the same `{"error": ...}` body as service failures.
pub fn bad_request<E>(err: E) -> Error
where
    E: Debug + Display + 'static,
{
    log::warn!("Rejected malformed request: {err}");
    let response = HttpResponse::BadRequest().json(json!({ "error": err.to_string() }));
    InternalError::from_response(err, response).into()
}
