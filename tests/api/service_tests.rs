//! Service Listing API Tests

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{fake_email, TestApp};

async fn create(app: &TestApp, token: &str, body: Value) -> String {
    let response = app.post_json_auth("/services", &body, token).await;
    assert_eq!(response.status, StatusCode::OK);

    let ack = response.json();
    assert_eq!(ack["acknowledged"], true);
    ack["insertedId"].as_str().unwrap().to_string()
}

fn names(body: &Value) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|doc| doc["service_name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_create_then_get_contains_all_fields() {
    let app = TestApp::new();
    let token = app.login(&fake_email()).await;
    let payload = json!({
        "service_name": "Lagoon Kayak",
        "provider_email": "guide@example.com",
        "price": 45,
        "area": {"city": "Lisbon"}
    });

    let id = create(&app, &token, payload.clone()).await;
    assert_eq!(id.len(), 24);

    let response = app.get_auth(&format!("/services/{}", id), &token).await;
    assert_eq!(response.status, StatusCode::OK);

    let document = response.json();
    assert_eq!(document["_id"], json!(id));
    for (key, value) in payload.as_object().unwrap() {
        assert_eq!(&document[key], value);
    }
}

#[tokio::test]
async fn test_put_overwrites_given_fields_only() {
    let app = TestApp::new();
    let token = app.login(&fake_email()).await;
    let id = create(
        &app,
        &token,
        json!({"service_name": "City Walk", "price": 20, "duration": "2h"}),
    )
    .await;

    let update = app
        .request(
            Method::PUT,
            &format!("/services/{}", id),
            Some(&json!({"price": 25, "guide": "Rui"})),
            Some(&token),
        )
        .await;
    assert_eq!(update.status, StatusCode::OK);
    assert_eq!(update.json()["matchedCount"], 1);
    assert_eq!(update.json()["modifiedCount"], 1);

    let document = app.get_auth(&format!("/services/{}", id), &token).await.json();
    assert_eq!(
        document,
        json!({
            "_id": id,
            "service_name": "City Walk",
            "price": 25,
            "duration": "2h",
            "guide": "Rui"
        })
    );
}

#[tokio::test]
async fn test_put_upserts_missing_service() {
    let app = TestApp::new();
    let token = app.login(&fake_email()).await;
    let id = "65a1f0c2e4b0a1b2c3d4e5f6";

    let response = app
        .request(
            Method::PUT,
            &format!("/services/{}", id),
            Some(&json!({"service_name": "Fresh"})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["upsertedId"], id);
}

#[tokio::test]
async fn test_delete_then_get_is_null() {
    let app = TestApp::new();
    let token = app.login(&fake_email()).await;
    let id = create(&app, &token, json!({"service_name": "Gone Soon"})).await;

    let deleted = app
        .request(Method::DELETE, &format!("/services/{}", id), None, Some(&token))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.json(), json!({"acknowledged": true, "deletedCount": 1}));

    let response = app.get_auth(&format!("/services/{}", id), &token).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), Value::Null);
}

#[tokio::test]
async fn test_search_by_name_is_case_insensitive() {
    let app = TestApp::new();
    let token = app.login(&fake_email()).await;
    for name in ["FOOD tour", "Seafood dinner", "Bike rental"] {
        create(&app, &token, json!({"service_name": name})).await;
    }

    let response = app.get("/services?serviceName=foo").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(names(&response.json()), vec!["FOOD tour", "Seafood dinner"]);
}

#[tokio::test]
async fn test_list_filters_by_provider_and_limit() {
    let app = TestApp::new();
    let token = app.login(&fake_email()).await;
    for (name, provider) in [
        ("A", "ana@example.com"),
        ("B", "ben@example.com"),
        ("C", "ana@example.com"),
    ] {
        create(&app, &token, json!({"service_name": name, "provider_email": provider})).await;
    }

    let all = app.get("/services").await.json();
    assert_eq!(names(&all), vec!["A", "B", "C"]);

    let by_provider = app.get("/services?email=ana@example.com").await.json();
    assert_eq!(names(&by_provider), vec!["A", "C"]);

    let capped = app.get("/services?showLimit=2").await.json();
    assert_eq!(names(&capped), vec!["A", "B"]);

    let unbounded = app.get("/services?showLimit=lots").await.json();
    assert_eq!(unbounded.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_invalid_pattern_yields_empty_list() {
    let app = TestApp::new();
    let token = app.login(&fake_email()).await;
    create(&app, &token, json!({"service_name": "(anything)"})).await;

    let response = app.get("/services?serviceName=%28").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!([]));
}

#[tokio::test]
async fn test_malformed_id_is_bad_request() {
    let app = TestApp::new();
    let token = app.login(&fake_email()).await;

    let response = app.get_auth("/services/not-an-id", &token).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["kind"], "invalid_id");
}

#[tokio::test]
async fn test_non_object_body_is_bad_request() {
    let app = TestApp::new();
    let token = app.login(&fake_email()).await;

    let response = app.post_json_auth("/services", &json!([1, 2, 3]), &token).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["kind"], "bad_request");
}

#[tokio::test]
async fn test_get_by_id_requires_token() {
    let app = TestApp::new();

    let response = app.get("/services/65a1f0c2e4b0a1b2c3d4e5f6").await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
