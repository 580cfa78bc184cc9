//! Booking API Tests

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::TestApp;

const USER: &str = "traveler@example.com";
const PROVIDER: &str = "guide@example.com";

async fn book(app: &TestApp, token: &str, user: &str, provider: &str) -> String {
    let response = app
        .post_json_auth(
            "/bookings",
            &json!({
                "user_email": user,
                "provider_email": provider,
                "service_name": "Lagoon Kayak",
                "date": "2026-11-02",
                "status": "pending"
            }),
            token,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    response.json()["insertedId"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_list_without_token_is_rejected() {
    let app = TestApp::new();

    let response = app.get(&format!("/bookings?userEmail={}", USER)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.json()["message"], "UNAUTHORIZED ACCESS");
}

#[tokio::test]
async fn test_list_for_someone_else_is_forbidden() {
    let app = TestApp::new();
    let token = app.login("intruder@example.com").await;
    book(&app, &token, USER, PROVIDER).await;

    let response = app
        .get_auth(&format!("/bookings?userEmail={}", USER), &token)
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.json()["kind"], "forbidden");

    let unscoped = app.get_auth("/bookings", &token).await;
    assert_eq!(unscoped.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_user_and_provider_see_their_bookings() {
    let app = TestApp::new();
    let user_token = app.login(USER).await;
    let provider_token = app.login(PROVIDER).await;
    book(&app, &user_token, USER, PROVIDER).await;
    book(&app, &user_token, "someone@example.com", PROVIDER).await;

    let mine = app
        .get_auth(&format!("/bookings?userEmail={}", USER), &user_token)
        .await;
    assert_eq!(mine.status, StatusCode::OK);
    assert_eq!(mine.json().as_array().unwrap().len(), 1);

    let incoming = app
        .get_auth(&format!("/bookings?providerEmail={}", PROVIDER), &provider_token)
        .await;
    assert_eq!(incoming.status, StatusCode::OK);
    assert_eq!(incoming.json().as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_patch_changes_only_status() {
    let app = TestApp::new();
    let token = app.login(USER).await;
    let id = book(&app, &token, USER, PROVIDER).await;

    let before = app
        .get_auth(&format!("/bookings?userEmail={}", USER), &token)
        .await
        .json();

    let response = app
        .request(
            Method::PATCH,
            &format!("/bookings/{}", id),
            Some(&json!({"status": "approved"})),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["modifiedCount"], 1);

    let after = app
        .get_auth(&format!("/bookings?userEmail={}", USER), &token)
        .await
        .json();

    let mut expected = before[0].clone();
    expected["status"] = Value::from("approved");
    assert_eq!(after[0], expected);
}

#[tokio::test]
async fn test_patch_requires_status() {
    let app = TestApp::new();
    let token = app.login(USER).await;
    let id = book(&app, &token, USER, PROVIDER).await;

    let response = app
        .request(
            Method::PATCH,
            &format!("/bookings/{}", id),
            Some(&json!({"note": "no status"})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_patch_unknown_booking_matches_nothing() {
    let app = TestApp::new();
    let token = app.login(USER).await;

    let response = app
        .request(
            Method::PATCH,
            "/bookings/65a1f0c2e4b0a1b2c3d4e5f6",
            Some(&json!({"status": "approved"})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["matchedCount"], 0);
}
