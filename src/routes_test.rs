use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;

fn test_router() -> Router {
    let options = LeptosOptions::builder().output_name("image-factory").site_root("target/test-site").build();
    app_with_options(options, ApiConfig::new("http://api.test/api"))
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn router_serves_healthz() {
    let response = test_router()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_bundle_file_is_not_found() {
    let response = test_router()
        .oneshot(Request::builder().uri("/pkg/missing.wasm").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
