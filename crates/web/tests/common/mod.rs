#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header::CONTENT_TYPE};
use http_body_util::BodyExt;
use serde_json::Value;
use storage::repository::MemoryAthleteStore;
use storage::services::classification::GenderPolicy;
use tower::ServiceExt;

use web::features::chat::ChatHub;
use web::state::AppState;

/// Full application router over an empty in-memory store.
pub fn build_test_app() -> Router {
    build_app_with_policy(GenderPolicy::Lenient)
}

pub fn build_strict_app() -> Router {
    build_app_with_policy(GenderPolicy::Strict)
}

fn build_app_with_policy(policy: GenderPolicy) -> Router {
    let state = AppState::new(Arc::new(MemoryAthleteStore::new()), policy, ChatHub::new(16));
    web::router(state)
}

async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone()
        .oneshot(request)
        .await
        .expect("router should not fail")
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::delete(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    let request = Request::post(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn put_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    let request = Request::put(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_form(app: &Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::post(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).expect("body should be JSON")
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).expect("body should be UTF-8")
}

/// Create an athlete through the API and return the response JSON.
pub async fn create_athlete(app: &Router, body: Value) -> Value {
    let response = post_json(app, "/api/athletes", body).await;
    assert_eq!(response.status(), 201, "athlete should be created");
    body_json(response).await
}
