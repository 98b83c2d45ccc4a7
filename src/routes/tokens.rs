// SPDX-License-Identifier: MIT

//! Session token handlers.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::auth;
use crate::db::collections;
use crate::error::{ApiError, Result};
use crate::extract::LenientJson;
use crate::models::{Token, User};
use crate::validate;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/tokens",
        get(tokens_get)
            .post(tokens_post)
            .put(tokens_put)
            .delete(tokens_delete)
            .fallback(super::method_not_allowed),
    )
}

/// Query parameters identifying a token.
#[derive(Deserialize)]
struct TokenIdQuery {
    id: Option<String>,
}

/// POST /tokens: log in, trading phone + password for a fresh one-hour
/// token.
async fn tokens_post(
    State(state): State<Arc<AppState>>,
    LenientJson(payload): LenientJson,
) -> Result<Json<Token>> {
    let phone = validate::phone(payload["phone"].as_str());
    let password = validate::non_empty(payload["password"].as_str());
    let (Some(phone), Some(password)) = (phone, password) else {
        return Err(ApiError::MissingFields);
    };

    let user: User = state
        .db
        .read(collections::USERS, &phone)
        .await
        .map_err(|_| ApiError::UserMissing)?;

    let hashed = auth::hash_password(&state.config.hashing_secret, &password)?;
    if !auth::hashes_match(&hashed, &user.hashed_password) {
        return Err(ApiError::PasswordMismatch);
    }

    let token = Token::issue(phone, auth::generate_token_id(), auth::now_ms());
    state
        .db
        .create(collections::TOKENS, &token.token_id, &token)
        .await
        .map_err(|e| ApiError::internal("Could not create the new token", e))?;

    tracing::debug!(phone = %token.phone, "Issued session token");
    Ok(Json(token))
}

/// GET /tokens?id=: fetch token metadata.
///
/// Deliberately unauthenticated: possession of a valid 20-character id
/// is the only requirement.
async fn tokens_get(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TokenIdQuery>,
) -> Result<Json<Token>> {
    let token_id = validate::token_id(query.id.as_deref()).ok_or(ApiError::MissingFields)?;

    let token: Token = state
        .db
        .read(collections::TOKENS, &token_id)
        .await
        .map_err(|_| ApiError::UnknownToken)?;

    Ok(Json(token))
}

/// PUT /tokens: extend a live token's expiration by one hour. An
/// already-expired token cannot be revived.
async fn tokens_put(
    State(state): State<Arc<AppState>>,
    LenientJson(payload): LenientJson,
) -> Result<Json<Token>> {
    let token_id = validate::token_id(payload["id"].as_str());
    let extend = validate::is_true(payload["extend"].as_bool());
    let (Some(token_id), true) = (token_id, extend) else {
        return Err(ApiError::InvalidTokenFields);
    };

    let mut token: Token = state
        .db
        .read(collections::TOKENS, &token_id)
        .await
        .map_err(|_| ApiError::UnknownToken)?;

    let now = auth::now_ms();
    if token.is_expired(now) {
        return Err(ApiError::TokenExpired);
    }
    token.extend(now);

    state
        .db
        .update(collections::TOKENS, &token_id, &token)
        .await
        .map_err(|e| ApiError::internal("Could not update token's expiration", e))?;

    Ok(Json(token))
}

/// DELETE /tokens?id=: revoke a token. Works on expired tokens too;
/// explicit deletion is the only way expired records leave the store.
async fn tokens_delete(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TokenIdQuery>,
) -> Result<Json<Value>> {
    let token_id = validate::token_id(query.id.as_deref()).ok_or(ApiError::InvalidTokenFields)?;

    let _: Token = state
        .db
        .read(collections::TOKENS, &token_id)
        .await
        .map_err(|_| ApiError::UnknownToken)?;

    state
        .db
        .delete(collections::TOKENS, &token_id)
        .await
        .map_err(|e| ApiError::internal("Could not delete token", e))?;

    Ok(Json(json!({})))
}
