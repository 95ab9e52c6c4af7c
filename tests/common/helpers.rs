//! Shared helpers for the HTTP integration tests

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{self, Request, StatusCode},
};
use http_body_util::BodyExt;
use qa_forum::{AppState, config::Config, create_app};
use serde_json::{Value, json};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret";

pub fn create_test_app() -> Router {
    create_app(AppState::new(Config::for_tests(TEST_SECRET)))
}

pub fn create_empty_test_app() -> Router {
    let mut config = Config::for_tests(TEST_SECRET);
    config.seed_data = false;
    create_app(AppState::new(config))
}

/// Sends one request and returns the status with the decoded JSON body
/// (`Value::Null` for an empty body).
pub async fn send(
    app: &Router,
    method: http::Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    send_with_headers(app, method, uri, token, &[], body).await
}

pub async fn send_with_headers(
    app: &Router,
    method: http::Method,
    uri: &str,
    token: Option<&str>,
    headers: &[(&str, &str)],
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(http::header::AUTHORIZATION, format!("Bearer {}", token));
    }
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }

    let request = match body {
        Some(body) => builder
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

/// Registers a user and returns (token, user id).
pub async fn register(app: &Router, email: &str, name: &str) -> (String, String) {
    let (status, body) = send(
        app,
        http::Method::POST,
        "/api/auth/register",
        None,
        Some(json!({
            "email": email,
            "password": "correct-horse",
            "name": name
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {body}");

    (
        body["token"].as_str().unwrap().to_string(),
        body["user"]["id"].as_str().unwrap().to_string(),
    )
}

pub async fn create_question(app: &Router, token: &str, title: &str) -> String {
    let (status, body) = send(
        app,
        http::Method::POST,
        "/api/questions",
        Some(token),
        Some(json!({
            "title": title,
            "description": "A sufficiently long description of the problem at hand.",
            "tags": ["Rust", "Tokio"]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create question failed: {body}");

    body["id"].as_str().unwrap().to_string()
}

pub async fn create_answer(app: &Router, token: &str, question_id: &str) -> String {
    let (status, body) = send(
        app,
        http::Method::POST,
        &format!("/api/questions/{}/answers", question_id),
        Some(token),
        Some(json!({
            "content": "Spawn the task with tokio::spawn and await the JoinHandle it returns."
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create answer failed: {body}");

    body["id"].as_str().unwrap().to_string()
}
