use actix_web::{web, HttpResponse, Scope};

use crate::errors::ApiError;
use crate::models::employee::{CreateEmployeeRequest, UpdateEmployeeRequest};
use crate::service::EmployeeService;
use crate::utils::validation::validate_payload;

pub fn routes() -> Scope {
    web::scope("/employees")
        .route("/find/all", web::get().to(find_all))
        .route("/create", web::post().to(create))
        .route("/create/many", web::post().to(create_many))
        .route("/update/{id}", web::put().to(update))
        .route("/delete/{id}", web::delete().to(delete))
}

pub async fn find_all(service: web::Data<EmployeeService>) -> Result<HttpResponse, ApiError> {
    let employees = service.find_all().await?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn create(
    service: web::Data<EmployeeService>,
    payload: web::Json<CreateEmployeeRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = payload.into_inner();
    validate_payload(&request)?;

    let response = service.create(request).await?;
    Ok(HttpResponse::Created().json(response))
}

pub async fn create_many(
    service: web::Data<EmployeeService>,
    payload: web::Json<Vec<CreateEmployeeRequest>>,
) -> Result<HttpResponse, ApiError> {
    let requests = payload.into_inner();
    // The whole batch is rejected before anything is persisted.
    for request in &requests {
        validate_payload(request)?;
    }

    let responses = service.create_many(requests).await?;
    Ok(HttpResponse::Created().json(responses))
}

pub async fn update(
    service: web::Data<EmployeeService>,
    id: web::Path<i64>,
    payload: web::Json<UpdateEmployeeRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = payload.into_inner();
    validate_payload(&request)?;

    let response = service.update(id.into_inner(), request).await?;
    Ok(HttpResponse::Ok().json(response))
}

pub async fn delete(
    service: web::Data<EmployeeService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    service.delete_by_id(id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
