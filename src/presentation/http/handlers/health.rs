//! Health Check Handlers
//!
//! # Endpoints
//! - `GET /` - Plain-text liveness string
//! - `GET /health` - Basic health check
//! - `GET /health/ready` - Readiness probe (is the document store reachable?)

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::time::Instant;

use crate::startup::AppState;

/// Text served at the root path
pub const GREETING: &str = "Lets travel, buddy!";

/// Server start time for uptime calculation
static SERVER_START: Lazy<Instant> = Lazy::new(Instant::now);

/// Initialize the server start time (call during startup)
pub fn init_server_start() {
    Lazy::force(&SERVER_START);
}

/// Basic health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Readiness response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: HealthStatus,
    pub version: &'static str,
    pub uptime_seconds: u64,
    pub store: StoreHealth,
}

/// Document store health
#[derive(Debug, Serialize)]
pub struct StoreHealth {
    pub driver: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Overall health status
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Root liveness string
pub async fn index() -> &'static str {
    GREETING
}

/// Basic health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Readiness probe - returns 503 while the store cannot be reached
pub async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    let (status, store) = match &state.store {
        Some(mongo) => match mongo.ping().await {
            Ok(latency) => (
                HealthStatus::Healthy,
                StoreHealth {
                    driver: "mongodb",
                    latency_ms: Some(latency.as_millis() as u64),
                    message: None,
                },
            ),
            Err(e) => {
                tracing::warn!(error = %e, "Readiness ping failed");
                (
                    HealthStatus::Unhealthy,
                    StoreHealth {
                        driver: "mongodb",
                        latency_ms: None,
                        message: Some("Database connection failed".into()),
                    },
                )
            }
        },
        None => (
            HealthStatus::Healthy,
            StoreHealth {
                driver: "memory",
                latency_ms: None,
                message: None,
            },
        ),
    };

    let status_code = match status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    let response = ReadinessResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: SERVER_START.elapsed().as_secs(),
        store,
    };

    (status_code, Json(response))
}
