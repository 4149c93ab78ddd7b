//! Customer record management: storage, mapping, use cases and a JSON API.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
mod error_conversions;
#[cfg(feature = "data")]
pub mod mapper;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "data")]
pub mod services;

#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::DieselRepository;
#[cfg(feature = "server")]
use crate::services::customer::CustomerService;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = db::establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    db::run_migrations(&pool)
        .map_err(|e| std::io::Error::other(format!("Failed to migrate database: {e}")))?;

    let service = web::Data::new(CustomerService::new(DieselRepository::new(pool)));

    if server_config.seed_demo_data {
        let inserted = service
            .seed_demo_customers()
            .map_err(|e| std::io::Error::other(format!("Failed to seed customers: {e}")))?;
        log::info!("Seeded {inserted} demo customer(s)");
    }

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!("Listening on {}:{}", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(service.clone())
            .configure(routes::customer::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
