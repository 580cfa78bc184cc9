//! Startup Tests Against an Unreachable Database

use axum::http::StatusCode;

use travel_buddy::startup::Application;

use crate::common::{unreachable_mongodb_settings, TestApp};

#[tokio::test]
async fn test_application_starts_when_cluster_cannot_resolve() {
    let app = Application::build(unreachable_mongodb_settings())
        .await
        .expect("startup does not depend on the database");

    let addr = app.local_addr().unwrap();
    assert_ne!(addr.port(), 0);
}

#[tokio::test]
async fn test_readiness_reports_unreachable_store() {
    let app = TestApp::with_unreachable_store();

    let response = app.get("/health/ready").await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    let body = response.json();
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["store"]["driver"], "mongodb");
}

#[tokio::test]
async fn test_store_requests_fail_with_database_error() {
    let app = TestApp::with_unreachable_store();

    let response = app.get("/services").await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json()["kind"], "database");
}

#[tokio::test]
async fn test_liveness_does_not_touch_the_store() {
    let app = TestApp::with_unreachable_store();

    assert_eq!(app.get("/").await.status, StatusCode::OK);
    assert_eq!(app.get("/health").await.status, StatusCode::OK);
}
