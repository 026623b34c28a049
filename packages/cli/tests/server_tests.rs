// ABOUTME: Tests for the assembled application with server-wide layers
// ABOUTME: CORS preflight handling and routing through the full stack

use std::path::PathBuf;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use folio_cli::{create_app, Config};
use folio_projects::test_utils::test_state;
use tower::ServiceExt;

fn config(cors_origin: &str) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 5000,
        database_path: PathBuf::from(":memory:"),
        images_dir: PathBuf::from("images"),
        token_validity_secs: 3600,
        cors_origin: cors_origin.to_string(),
        max_upload_bytes: 1024,
    }
}

#[tokio::test]
async fn test_preflight_allows_configured_origin() {
    let (db, _dir) = test_state(3600).await;
    let app = create_app(db, &config("https://portfolio.example")).unwrap();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/projects")
        .header(header::ORIGIN, "https://portfolio.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://portfolio.example"
    );
}

#[tokio::test]
async fn test_health_through_full_stack() {
    let (db, _dir) = test_state(3600).await;
    let app = create_app(db, &config("*")).unwrap();

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
