mod db;
mod errors;
mod handlers;
mod models;
mod service;
mod store;
mod utils;

use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::info;
use std::env;
use std::sync::Arc;

use crate::errors::ApiError;
use crate::service::EmployeeService;
use crate::store::pg::PgEmployeeStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let pool = db::create_pool().await;
    db::init_schema(&pool)
        .await
        .expect("Failed to initialize the employees table");

    let service = web::Data::new(EmployeeService::new(Arc::new(PgEmployeeStore::new(pool))));

    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    info!("Starting server at {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            // Malformed JSON gets the same error body shape as everything else
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                ApiError::BadRequest(err.to_string()).into()
            }))
            .service(handlers::employee::routes())
    })
    .bind(bind_addr)?
    .run()
    .await
}
