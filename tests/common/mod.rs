//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    response::Response,
    Router,
};
use fake::{faker::internet::en::SafeEmail, Fake};
use serde_json::Value;
use tower::ServiceExt;

use travel_buddy::config::{
    CookieSettings, CorsSettings, DatabaseSettings, JwtSettings, ServerSettings, Settings,
    StoreDriver,
};
use travel_buddy::infrastructure::database::MongoStore;
use travel_buddy::startup::{build_router, AppState};

pub const TEST_SECRET: &str = "test-secret-test-secret-test-secret!";

/// Origin the test settings allow
pub const ALLOWED_ORIGIN: &str = "http://localhost:5173";

/// SRV URI whose cluster host can never resolve
pub const UNRESOLVABLE_URI: &str = "mongodb+srv://u:p@cluster0.nonexistent-host.invalid/";

/// Settings pointing the MongoDB driver at a host that does not exist
pub fn unreachable_mongodb_settings() -> Settings {
    let mut settings = test_settings();
    settings.database.driver = StoreDriver::Mongodb;
    settings.database.uri = Some(UNRESOLVABLE_URI.into());
    settings
}

/// Settings for an in-memory application
pub fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".into(),
            port: 0,
        },
        database: DatabaseSettings {
            driver: StoreDriver::Memory,
            uri: None,
            user: None,
            password: None,
            cluster: "localhost".into(),
            name: "travelBuddyDB".into(),
            app_name: "travel-buddy-tests".into(),
            server_selection_timeout_secs: 2,
        },
        jwt: JwtSettings {
            secret: TEST_SECRET.into(),
            token_expiry_minutes: 60,
        },
        cookie: CookieSettings {
            name: "token".into(),
            secure: true,
        },
        cors: CorsSettings {
            allowed_origins: vec![ALLOWED_ORIGIN.into()],
        },
        environment: "test".into(),
    }
}

/// A response with its body already collected
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub set_cookie: Vec<String>,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Header value as text, if present
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    }

    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("response body is UTF-8")
    }

    /// Value of the named cookie in the first matching Set-Cookie header
    pub fn cookie(&self, name: &str) -> Option<String> {
        self.set_cookie.iter().find_map(|header| {
            let pair = header.split(';').next()?;
            let (key, value) = pair.split_once('=')?;
            (key.trim() == name).then(|| value.trim().to_string())
        })
    }
}

/// Test application builder
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    /// Create a new test application backed by in-memory collections
    pub fn new() -> Self {
        let state = AppState::in_memory(test_settings());
        Self {
            router: build_router(state),
        }
    }

    /// Application whose MongoDB store can never connect
    pub fn with_unreachable_store() -> Self {
        let settings = unreachable_mongodb_settings();
        let store = MongoStore::new(settings.database.clone());
        Self {
            router: build_router(AppState::with_store(settings, store)),
        }
    }

    /// Send a request, optionally with a JSON body and a session token
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<&Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header(header::COOKIE, format!("token={}", token));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send(request).await
    }

    /// Send a prepared request and collect the response
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response: Response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let set_cookie = headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok().map(String::from))
            .collect();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec();

        TestResponse {
            status,
            headers,
            set_cookie,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None, None).await
    }

    pub async fn get_auth(&self, uri: &str, token: &str) -> TestResponse {
        self.request(Method::GET, uri, None, Some(token)).await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> TestResponse {
        self.request(Method::POST, uri, Some(body), None).await
    }

    pub async fn post_json_auth(&self, uri: &str, body: &Value, token: &str) -> TestResponse {
        self.request(Method::POST, uri, Some(body), Some(token)).await
    }

    /// Obtain a session token for `email` through `/jwt`
    pub async fn login(&self, email: &str) -> String {
        let response = self
            .post_json("/jwt", &serde_json::json!({ "email": email }))
            .await;
        assert_eq!(response.status, StatusCode::OK);
        response.cookie("token").expect("token cookie set")
    }
}

/// Generate a random test email
pub fn fake_email() -> String {
    SafeEmail().fake()
}
