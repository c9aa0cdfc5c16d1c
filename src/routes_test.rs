use super::*;

use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

fn bundled_site_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public")
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn static_site_serves_about_page() {
    let request = Request::builder().uri("/about.html").body(Body::empty()).unwrap();
    let response = static_site(&bundled_site_dir()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn static_site_misses_unknown_paths() {
    let request = Request::builder().uri("/nope.html").body(Body::empty()).unwrap();
    let response = static_site(&bundled_site_dir()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn route_error_mentions_leptos() {
    let err = RouteError::LeptosConfig("LEPTOS_OUTPUT_NAME missing".into());
    assert_eq!(err.to_string(), "leptos configuration: LEPTOS_OUTPUT_NAME missing");
}
