//! Routing for the chat socket. The socket itself needs a real upgrade, so
//! these only check how plain HTTP requests are turned away.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{build_test_app, get};
use tower::ServiceExt;

#[tokio::test]
async fn test_socket_route_requires_upgrade() {
    let app = build_test_app();

    let response = get(&app, "/chat/ws").await;
    assert_ne!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_socket_route_only_accepts_get() {
    let app = build_test_app();

    let request = Request::post("/chat/ws").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let app = build_test_app();

    let response = get(&app, "/chat/nowhere").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
