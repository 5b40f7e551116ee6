use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::Json,
    Extension,
};
use tracing::debug;
use uuid::Uuid;

use crate::api::rest::dto::{
    CreateCustomerReq, CustomerDto, CustomerListDto, ListCustomersQuery, SearchCustomersQuery,
    UpdateCustomerReq,
};
use crate::api::rest::error::ApiError;
use crate::domain::service::Service;

/// List customers with optional pagination
pub async fn list_customers(
    Extension(svc): Extension<Arc<Service>>,
    Query(query): Query<ListCustomersQuery>,
) -> Result<Json<CustomerListDto>, ApiError> {
    debug!("Listing customers with query: {:?}", query);

    let limit = svc.effective_page_size(query.limit);
    let customers = svc.list_customers(query.limit, query.offset).await?;
    let dto_customers: Vec<CustomerDto> = customers.into_iter().map(CustomerDto::from).collect();
    Ok(Json(CustomerListDto {
        total: dto_customers.len(),
        limit,
        offset: query.offset.unwrap_or(0),
        customers: dto_customers,
    }))
}

/// Search customers by any combination of filter fields
pub async fn search_customers(
    Extension(svc): Extension<Arc<Service>>,
    Query(query): Query<SearchCustomersQuery>,
) -> Result<Json<Vec<CustomerDto>>, ApiError> {
    debug!("Searching customers with query: {:?}", query);

    let customers = svc.search_customers(query.into()).await?;
    Ok(Json(customers.into_iter().map(CustomerDto::from).collect()))
}

/// Get a specific customer by ID
pub async fn get_customer(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<Uuid>,
) -> Result<Json<CustomerDto>, ApiError> {
    debug!("Getting customer with id: {}", id);

    let customer = svc.get_customer(id).await?;
    Ok(Json(CustomerDto::from(customer)))
}

/// Create a new customer
pub async fn create_customer(
    Extension(svc): Extension<Arc<Service>>,
    Json(req): Json<CreateCustomerReq>,
) -> Result<(StatusCode, Json<CustomerDto>), ApiError> {
    debug!("Creating customer: {:?}", req);

    let customer = svc.create_customer(req.into()).await?;
    Ok((StatusCode::CREATED, Json(CustomerDto::from(customer))))
}

/// Update an existing customer
pub async fn update_customer(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateCustomerReq>,
) -> Result<Json<CustomerDto>, ApiError> {
    debug!("Updating customer {} with: {:?}", id, req);

    let customer = svc.update_customer(id, req.into()).await?;
    Ok(Json(CustomerDto::from(customer)))
}

/// Delete a customer by ID
pub async fn delete_customer(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    debug!("Deleting customer: {}", id);

    svc.delete_customer(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
