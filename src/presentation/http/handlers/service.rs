//! Service Listing Handlers

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query, State},
    Json,
};

use crate::application::dto::ServiceListQuery;
use crate::application::services::{CatalogService, CatalogServiceImpl};
use crate::domain::{DeleteAck, Document, InsertAck, UpdateAck};
use crate::presentation::http::extractors::JsonBody;
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::startup::AppState;

fn catalog(state: &AppState) -> CatalogServiceImpl {
    CatalogServiceImpl::new(Arc::clone(&state.services))
}

/// List services, optionally filtered by name, provider and cap
pub async fn list_services(
    State(state): State<AppState>,
    Query(query): Query<ServiceListQuery>,
) -> Result<Json<Vec<Document>>, AppError> {
    let services = catalog(&state).list(query).await?;

    Ok(Json(services))
}

/// Get a service by ID; `null` when it does not exist
pub async fn get_service(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
) -> Result<Json<Option<Document>>, AppError> {
    let service = catalog(&state).get(&service_id).await?;

    Ok(Json(service))
}

/// Publish a new service
pub async fn create_service(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    JsonBody(body): JsonBody<Document>,
) -> Result<Json<InsertAck>, AppError> {
    tracing::debug!(by = %auth.email, "Creating service");
    let ack = catalog(&state).create(body).await?;

    Ok(Json(ack))
}

/// Merge fields onto a service, creating it when missing
pub async fn update_service(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
    JsonBody(body): JsonBody<Document>,
) -> Result<Json<UpdateAck>, AppError> {
    let ack = catalog(&state).update(&service_id, body).await?;

    Ok(Json(ack))
}

/// Delete a service
pub async fn delete_service(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
) -> Result<Json<DeleteAck>, AppError> {
    let ack = catalog(&state).delete(&service_id).await?;

    Ok(Json(ack))
}
