//! Booking Handlers

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query, State},
    Json,
};
use validator::Validate;

use crate::application::dto::{BookingListQuery, UpdateBookingStatusRequest};
use crate::application::services::{BookingService, BookingServiceImpl};
use crate::domain::{Document, InsertAck, UpdateAck};
use crate::presentation::http::extractors::JsonBody;
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

fn bookings(state: &AppState) -> BookingServiceImpl {
    BookingServiceImpl::new(Arc::clone(&state.bookings))
}

/// List bookings of the authenticated user or provider
pub async fn list_bookings(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Query(query): Query<BookingListQuery>,
) -> Result<Json<Vec<Document>>, AppError> {
    let found = bookings(&state).list_for(&auth.email, query).await?;

    Ok(Json(found))
}

/// Record a booking
pub async fn create_booking(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Document>,
) -> Result<Json<InsertAck>, AppError> {
    let ack = bookings(&state).create(body).await?;

    Ok(Json(ack))
}

/// Change a booking's status
pub async fn update_booking_status(
    State(state): State<AppState>,
    Path(booking_id): Path<String>,
    JsonBody(body): JsonBody<UpdateBookingStatusRequest>,
) -> Result<Json<UpdateAck>, AppError> {
    body.validate().map_err(validation_error)?;

    let ack = bookings(&state)
        .update_status(&booking_id, &body.status)
        .await?;

    Ok(Json(ack))
}
