use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use manuscript_core::presentation::http::openapi::docs_router;
use serde_json::Value;
use tower::ServiceExt; // for oneshot

#[tokio::test]
async fn docs_router_serves_openapi_json() {
    let app = docs_router();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/openapi.json")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), 4 * 1024 * 1024)
        .await
        .unwrap();
    let doc: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(doc["info"]["title"], "Manuscript API");
    assert!(doc["paths"]["/api/articles/{id}/revert/{version_number}"]["post"].is_object());
    assert!(doc["components"]["schemas"]["ArticleDto"].is_object());
}

#[tokio::test]
async fn full_router_exposes_swagger_ui() {
    let app = support::make_test_router();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/docs/")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

mod support;
