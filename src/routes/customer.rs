use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::domain::types::CustomerId;
use crate::dto::customer::CustomerDto;
use crate::repository::DieselRepository;
use crate::routes::{bad_request, service_error_response};
use crate::services::ServiceError;
use crate::services::customer::CustomerService;

pub type AppCustomerService = CustomerService<DieselRepository>;

#[derive(Deserialize)]
struct SearchQueryParams {
    #[serde(default)]
    keyword: String,
}

fn parse_id(raw: i64) -> Result<CustomerId, HttpResponse> {
    CustomerId::new(raw).map_err(|err| service_error_response(&ServiceError::from(err)))
}

fn validate_dto(dto: &CustomerDto) -> Result<(), HttpResponse> {
    dto.validate().map_err(|err| {
        log::warn!("Rejected customer payload: {err}");
        HttpResponse::BadRequest().json(json!({ "error": err.to_string() }))
    })
}

#[get("/customers")]
pub async fn list_customers(service: web::Data<AppCustomerService>) -> impl Responder {
    match service.get_all_customers() {
        Ok(customers) => HttpResponse::Ok().json(customers),
        Err(err) => service_error_response(&err),
    }
}

#[get("/customers/search")]
pub async fn search_customers(
    params: web::Query<SearchQueryParams>,
    service: web::Data<AppCustomerService>,
) -> impl Responder {
    match service.search_customers(&params.keyword) {
        Ok(customers) => HttpResponse::Ok().json(customers),
        Err(err) => service_error_response(&err),
    }
}

#[get("/customers/{id}")]
pub async fn show_customer(
    id: web::Path<i64>,
    service: web::Data<AppCustomerService>,
) -> impl Responder {
    let id = match parse_id(id.into_inner()) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match service.find_customer_by_id(id) {
        Ok(customer) => HttpResponse::Ok().json(customer),
        Err(err) => service_error_response(&err),
    }
}

#[post("/customers")]
pub async fn create_customer(
    payload: web::Json<CustomerDto>,
    service: web::Data<AppCustomerService>,
) -> impl Responder {
    if let Err(response) = validate_dto(&payload) {
        return response;
    }

    match service.save_new_customer(&payload) {
        Ok(customer) => HttpResponse::Created().json(customer),
        Err(err) => service_error_response(&err),
    }
}

#[put("/customers/{id}")]
pub async fn update_customer(
    id: web::Path<i64>,
    payload: web::Json<CustomerDto>,
    service: web::Data<AppCustomerService>,
) -> impl Responder {
    let id = match parse_id(id.into_inner()) {
        Ok(id) => id,
        Err(response) => return response,
    };
    if let Err(response) = validate_dto(&payload) {
        return response;
    }

    match service.update_customer(id, &payload) {
        Ok(customer) => HttpResponse::Ok().json(customer),
        Err(err) => service_error_response(&err),
    }
}

#[delete("/customers/{id}")]
pub async fn delete_customer(
    id: web::Path<i64>,
    service: web::Data<AppCustomerService>,
) -> impl Responder {
    let id = match parse_id(id.into_inner()) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match service.delete_customer(id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => service_error_response(&err),
    }
}

/// Registers every customer endpoint on an Actix service config.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(|err, _| bad_request(err)))
        .app_data(web::QueryConfig::default().error_handler(|err, _| bad_request(err)))
        .app_data(web::JsonConfig::default().error_handler(|err, _| bad_request(err)));

    // `/customers/search` must be registered before `/customers/{id}`.
    cfg.service(list_customers)
        .service(search_customers)
        .service(show_customer)
        .service(create_customer)
        .service(update_customer)
        .service(delete_customer);
}
