// SPDX-License-Identifier: MIT

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use common::create_test_app;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn unknown_path_is_json_404() {
    let app = create_test_app().await;

    let (status, body) = app.send("GET", "/nope", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn ping_answers_any_method() {
    let app = create_test_app().await;

    for method in ["GET", "POST", "PUT", "DELETE"] {
        let (status, body) = app.send(method, "/ping", None, None).await;
        assert_eq!(status, StatusCode::OK, "{method} /ping");
        assert_eq!(body, json!({}));
    }
}

#[tokio::test]
async fn hello_reports_payload_presence() {
    let app = create_test_app().await;

    let (status, body) = app.send("POST", "/hello", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], "Hi, I received no payload from you.");
    assert_eq!(body["payload"], json!({}));

    let (status, body) = app
        .send("POST", "/hello", None, Some(json!({ "greeting": "hi" })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], "Hi, I received payload from you.");
    assert_eq!(body["payload"], json!({ "greeting": "hi" }));
}

#[tokio::test]
async fn malformed_json_body_reads_as_empty_object() {
    let app = create_test_app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.app.clone().oneshot(request).await.unwrap();

    // The handler sees `{}` and fails field validation, not body parsing.
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["Error"], "Missing required fields");
}

#[tokio::test]
async fn trailing_slash_routes_like_bare_path() {
    let app = create_test_app().await;

    let (status, body) = app.send("GET", "/ping/", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));

    let (status, _) = app.send("GET", "/users/", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unsupported_method_on_known_resource_is_405() {
    let app = create_test_app().await;

    let (status, body) = app.send("PATCH", "/users", None, None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({}));

    let (status, _) = app.send("PATCH", "/tokens", None, None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn checks_resource_is_reserved_but_unimplemented() {
    let app = create_test_app().await;

    for method in ["GET", "POST", "PUT", "DELETE"] {
        let (status, body) = app.send(method, "/checks", None, None).await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED, "{method} /checks");
        assert_eq!(body["Error"], "Checks are not implemented yet");
    }
}

#[tokio::test]
async fn responses_are_json_with_security_headers() {
    let app = create_test_app().await;

    let request = Request::builder()
        .method("GET")
        .uri("/ping")
        .body(Body::empty())
        .unwrap();
    let response = app.app.clone().oneshot(request).await.unwrap();

    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    assert_eq!(
        response.headers().get("x-content-type-options").unwrap(),
        "nosniff"
    );
    assert_eq!(response.headers().get("x-frame-options").unwrap(), "DENY");
}
