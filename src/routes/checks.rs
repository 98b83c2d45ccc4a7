// SPDX-License-Identifier: MIT

//! Checks resource: reserved in the route table but not implemented.

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/checks",
        get(not_implemented)
            .post(not_implemented)
            .put(not_implemented)
            .delete(not_implemented)
            .fallback(super::method_not_allowed),
    )
}

/// The resource exists (so it is not a 404), but no check operations are
/// built yet.
async fn not_implemented() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_IMPLEMENTED,
        Json(json!({ "Error": "Checks are not implemented yet" })),
    )
}
