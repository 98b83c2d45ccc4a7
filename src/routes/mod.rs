// SPDX-License-Identifier: MIT

//! HTTP route handlers.
//!
//! The route table is fixed at startup: `ping`, `hello`, `users`,
//! `tokens`, `checks`. Paths match exactly (case-sensitive) after
//! trailing-slash normalization; everything else is a JSON 404.

pub mod checks;
pub mod tokens;
pub mod users;

use crate::extract::parse_lenient;
use crate::AppState;
use axum::body::Bytes;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::any;
use axum::{middleware, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::Layer as _;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// The assembled application service.
pub type App = NormalizePath<Router>;

/// Liveness probe; always succeeds with an empty object.
async fn ping() -> Json<Value> {
    Json(json!({}))
}

/// Echo endpoint: reports whether a payload arrived and echoes back the
/// lenient-parsed body.
async fn hello(body: Bytes) -> Json<Value> {
    let received = if body.is_empty() { "no payload" } else { "payload" };
    Json(json!({
        "response": format!("Hi, I received {received} from you."),
        "payload": parse_lenient(&body),
    }))
}

/// 404 for anything outside the route table; still JSON.
async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({})))
}

/// 405 for known resources hit with an unsupported method.
pub(crate) async fn method_not_allowed() -> (StatusCode, Json<Value>) {
    (StatusCode::METHOD_NOT_ALLOWED, Json(json!({})))
}

/// Pull the bearer token id out of the `token` request header.
pub(crate) fn token_header(headers: &HeaderMap) -> Option<&str> {
    headers.get("token").and_then(|value| value.to_str().ok())
}

/// Build the complete router with all routes.
pub fn create_router(state: Arc<AppState>) -> App {
    let router = Router::new()
        .route("/ping", any(ping))
        .route("/hello", any(hello))
        .merge(users::routes())
        .merge(tokens::routes())
        .merge(checks::routes())
        .fallback(not_found)
        // Global middleware
        .layer(middleware::from_fn(
            crate::middleware::security::add_security_headers,
        ))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state);

    // Route as if trailing slashes were trimmed: `/users/` and `/users`
    // hit the same handler. Must wrap the router (not sit inside it) to
    // run before route matching.
    NormalizePathLayer::trim_trailing_slash().layer(router)
}
