//! Test harness driving the router in-process.
//!
//! Every harness owns a fresh directory, so tests never share roster state
//! and nothing has to be reset between them.

use activities_core::common::AppState;
use activities_core::domains::activities::{ActivityDirectory, ActivityMap};
use activities_core::server::build_app;
use activities_core::Config;
use axum::body::{to_bytes, Body, Bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::Router;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use super::fixtures;

/// Response captured from a single in-process request
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "Response body is not the expected JSON ({}): {}",
                e,
                String::from_utf8_lossy(&self.body)
            )
        })
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Test harness wrapping a router built over its own directory.
///
/// ```ignore
/// let harness = TestHarness::new();
/// let response = harness.get("/activities").await;
/// assert_eq!(response.status, StatusCode::OK);
/// ```
pub struct TestHarness {
    pub state: AppState,
    router: Router,
}

impl TestHarness {
    /// Harness seeded with the fixture activities.
    pub fn new() -> Self {
        Self::with_activities(fixtures::activities())
    }

    pub fn with_activities(activities: ActivityMap) -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let state = AppState::new(ActivityDirectory::new(activities));
        let router = build_app(state.clone(), &Config::default());

        Self { state, router }
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri).await
    }

    pub async fn post(&self, uri: &str) -> TestResponse {
        self.send(Method::POST, uri).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(Method::DELETE, uri).await
    }

    pub async fn send(&self, method: Method, uri: &str) -> TestResponse {
        send(self.router(), method, uri).await
    }

    /// Participants of one activity as reported by `GET /activities`.
    pub async fn participants(&self, activity: &str) -> Vec<String> {
        let listing: serde_json::Value = self.get("/activities").await.json();
        listing[activity]["participants"]
            .as_array()
            .unwrap_or_else(|| panic!("{} has no participants list", activity))
            .iter()
            .map(|p| p.as_str().unwrap_or_default().to_string())
            .collect()
    }
}

/// Issue one request against a router.
pub async fn send(router: Router, method: Method, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request");

    let response = router
        .oneshot(request)
        .await
        .expect("Router is infallible");

    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    TestResponse {
        status,
        headers,
        body,
    }
}
