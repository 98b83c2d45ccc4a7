// SPDX-License-Identifier: MIT

//! Application error types with the API's fixed wire format.
//!
//! Every failure resolves into a `(status, JSON body)` pair at the point
//! of detection; non-2xx bodies always carry an `Error` message string.
//! Several status codes are deliberately odd (user-not-found as 400 on
//! mutation paths, password mismatch as 500). Clients depend on them, so
//! they are part of the wire contract and must not be normalized.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Missing fields to update")]
    NoFieldsToUpdate,

    #[error("Missing required field(s) or field(s) invalid")]
    InvalidTokenFields,

    #[error("User already exists")]
    UserExists,

    /// User lookup failure on a profile read; reported as 404.
    #[error("Cannot find user or user does not exist")]
    UserNotFound,

    /// User lookup failure on update/delete/login paths; these report as
    /// 400, not 404.
    #[error("Cannot find user or user does not exist")]
    UserMissing,

    #[error("Missing required token in header, or token is invalid")]
    TokenUnauthorized,

    #[error("Invalid token")]
    UnknownToken,

    #[error("The token has already expired and cannot be extended")]
    TokenExpired,

    /// Reported as 500 rather than 401/403; clients expect this status.
    #[error("Password did not match the specified user's stored password")]
    PasswordMismatch,

    #[error("{0}")]
    Internal(&'static str),
}

/// JSON error body; the wire format capitalizes the key.
#[derive(Serialize)]
struct ErrorBody {
    #[serde(rename = "Error")]
    error: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingFields
            | ApiError::NoFieldsToUpdate
            | ApiError::InvalidTokenFields
            | ApiError::UserExists
            | ApiError::UserMissing
            | ApiError::UnknownToken
            | ApiError::TokenExpired => StatusCode::BAD_REQUEST,
            ApiError::TokenUnauthorized => StatusCode::FORBIDDEN,
            ApiError::UserNotFound => StatusCode::NOT_FOUND,
            ApiError::PasswordMismatch | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Wrap an internal failure: log the real error, surface a fixed
    /// client-facing message as a 500.
    pub fn internal(message: &'static str, err: impl std::fmt::Display) -> Self {
        tracing::error!(error = %err, message, "Internal failure");
        ApiError::Internal(message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_lookup_status_split() {
        // Same message, different status depending on the operation.
        assert_eq!(ApiError::UserNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::UserMissing.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::UserNotFound.to_string(),
            ApiError::UserMissing.to_string()
        );
    }

    #[test]
    fn test_password_mismatch_is_500() {
        assert_eq!(
            ApiError::PasswordMismatch.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
