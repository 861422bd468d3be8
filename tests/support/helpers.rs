// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use manuscript_core::application::{
    ports::{time::Clock, util::IdGenerator},
    services::ApplicationServices,
};
use manuscript_core::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use manuscript_core::infrastructure::repositories::InMemoryArticleRepository;
use manuscript_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub const TEST_DEFAULT_AUTHOR: &str = "default_user";

/// Services over a fresh in-memory store with a stepping clock and
/// sequential ids.
pub fn build_services() -> Arc<ApplicationServices> {
    let store = Arc::new(InMemoryArticleRepository::new());
    let write: Arc<dyn ArticleWriteRepository> = store.clone();
    let read: Arc<dyn ArticleReadRepository> = store;
    let clock: Arc<dyn Clock> = Arc::new(mocks::SteppingClock::default());
    let ids: Arc<dyn IdGenerator> = Arc::new(mocks::SequentialIds::default());
    Arc::new(ApplicationServices::new(write, read, clock, ids))
}

pub fn build_test_state() -> HttpState {
    HttpState::new(build_services(), TEST_DEFAULT_AUTHOR)
}

pub fn make_test_router() -> axum::Router {
    build_router(build_test_state(), &["*".to_string()])
}

pub async fn send(app: &axum::Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(req).await.unwrap()
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected a JSON body")
}

/// POST an article and return its JSON representation.
pub async fn create_article(app: &axum::Router, body: Value) -> Value {
    let resp = send(app, Method::POST, "/api/articles", Some(body)).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    read_json(resp).await
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
