//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};

use super::handlers;
use crate::presentation::middleware::auth_middleware;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health::index))
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/ready", get(handlers::health::readiness))
        .merge(session_routes())
        .merge(public_service_routes())
        .merge(protected_service_routes(state.clone()))
        .merge(booking_routes(state.clone()))
        .fallback(not_found)
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound("Route not found".into())
}

/// Session cookie routes (public)
fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/jwt", post(handlers::session::issue_token))
        .route("/logout", post(handlers::session::logout))
}

/// Service search (public)
fn public_service_routes() -> Router<AppState> {
    Router::new().route("/services", get(handlers::service::list_services))
}

/// Service maintenance (protected)
fn protected_service_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/services", post(handlers::service::create_service))
        .route(
            "/services/{service_id}",
            get(handlers::service::get_service)
                .put(handlers::service::update_service)
                .delete(handlers::service::delete_service),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Booking routes (protected)
fn booking_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/bookings",
            get(handlers::booking::list_bookings).post(handlers::booking::create_booking),
        )
        .route(
            "/bookings/{booking_id}",
            patch(handlers::booking::update_booking_status),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
