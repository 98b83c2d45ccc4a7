// SPDX-License-Identifier: MIT

//! User account handlers.
//!
//! All operations except creation require a `token` header that verifies
//! against the target phone number before the store is touched.

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::auth;
use crate::db::{collections, StoreError};
use crate::error::{ApiError, Result};
use crate::extract::LenientJson;
use crate::models::{User, UserResponse};
use crate::validate;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/users",
        get(users_get)
            .post(users_post)
            .put(users_put)
            .delete(users_delete)
            .fallback(super::method_not_allowed),
    )
}

/// Query parameters identifying a user.
#[derive(Deserialize)]
struct PhoneQuery {
    phone: Option<String>,
}

/// POST /users: register a new account.
///
/// Requires firstName, lastName, phone, password and an explicit
/// tosAgreement=true. The phone number is the primary key: a second
/// account for the same phone is a conflict.
async fn users_post(
    State(state): State<Arc<AppState>>,
    LenientJson(payload): LenientJson,
) -> Result<Json<Value>> {
    let first_name = validate::non_empty(payload["firstName"].as_str());
    let last_name = validate::non_empty(payload["lastName"].as_str());
    let phone = validate::phone(payload["phone"].as_str());
    let password = validate::non_empty(payload["password"].as_str());
    let tos_agreement = validate::is_true(payload["tosAgreement"].as_bool());

    let (Some(first_name), Some(last_name), Some(phone), Some(password), true) =
        (first_name, last_name, phone, password, tos_agreement)
    else {
        return Err(ApiError::MissingFields);
    };

    let hashed_password = auth::hash_password(&state.config.hashing_secret, &password)?;
    let user = User {
        first_name,
        last_name,
        phone: phone.clone(),
        hashed_password,
        tos_agreement: true,
    };

    // Exclusive create doubles as the duplicate check; no separate
    // read-then-create window.
    match state.db.create(collections::USERS, &phone, &user).await {
        Ok(()) => Ok(Json(json!({}))),
        Err(StoreError::AlreadyExists) => Err(ApiError::UserExists),
        Err(e) => Err(ApiError::internal("Could not create the new user", e)),
    }
}

/// GET /users?phone=: fetch a profile. The password hash is never part
/// of the response.
async fn users_get(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PhoneQuery>,
    headers: HeaderMap,
) -> Result<Json<UserResponse>> {
    let phone = validate::phone(query.phone.as_deref()).ok_or(ApiError::MissingFields)?;
    auth::verify_token(&state.db, super::token_header(&headers), &phone).await?;

    let user: User = state
        .db
        .read(collections::USERS, &phone)
        .await
        .map_err(|_| ApiError::UserNotFound)?;

    Ok(Json(user.into()))
}

/// PUT /users: partial profile update.
///
/// Body carries the phone plus at least one of firstName, lastName,
/// password. Untouched fields keep their stored values; a new password
/// is re-hashed before storage.
async fn users_put(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    LenientJson(payload): LenientJson,
) -> Result<Json<Value>> {
    let phone = validate::phone(payload["phone"].as_str()).ok_or(ApiError::MissingFields)?;

    let first_name = validate::non_empty(payload["firstName"].as_str());
    let last_name = validate::non_empty(payload["lastName"].as_str());
    let password = validate::non_empty(payload["password"].as_str());

    if first_name.is_none() && last_name.is_none() && password.is_none() {
        return Err(ApiError::NoFieldsToUpdate);
    }

    auth::verify_token(&state.db, super::token_header(&headers), &phone).await?;

    let mut user: User = state
        .db
        .read(collections::USERS, &phone)
        .await
        .map_err(|_| ApiError::UserMissing)?;

    if let Some(first_name) = first_name {
        user.first_name = first_name;
    }
    if let Some(last_name) = last_name {
        user.last_name = last_name;
    }
    if let Some(password) = password {
        user.hashed_password = auth::hash_password(&state.config.hashing_secret, &password)?;
    }

    state
        .db
        .update(collections::USERS, &phone, &user)
        .await
        .map_err(|e| ApiError::internal("Could not update the user", e))?;

    Ok(Json(json!({})))
}

/// DELETE /users?phone=: remove an account.
///
/// Tokens owned by the account are left behind to expire on their own;
/// there is no cascade delete.
async fn users_delete(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PhoneQuery>,
    headers: HeaderMap,
) -> Result<Json<Value>> {
    let phone = validate::phone(query.phone.as_deref()).ok_or(ApiError::MissingFields)?;
    auth::verify_token(&state.db, super::token_header(&headers), &phone).await?;

    let _: User = state
        .db
        .read(collections::USERS, &phone)
        .await
        .map_err(|_| ApiError::UserMissing)?;

    state
        .db
        .delete(collections::USERS, &phone)
        .await
        .map_err(|e| ApiError::internal("Could not delete the specified user", e))?;

    Ok(Json(json!({})))
}
