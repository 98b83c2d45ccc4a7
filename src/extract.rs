// SPDX-License-Identifier: MIT

//! Request body handling.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde_json::{Map, Value};
use std::convert::Infallible;

/// Best-effort JSON body: an empty or malformed body parses as `{}`.
///
/// Handlers therefore never fail on body shape, only on field
/// validation, which keeps the "malformed body is just a body with no
/// valid fields" contract.
pub struct LenientJson(pub Value);

/// Parse bytes as JSON, falling back to an empty object.
pub fn parse_lenient(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap_or_else(|_| Value::Object(Map::new()))
}

impl<S> FromRequest<S> for LenientJson
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.unwrap_or_default();
        Ok(LenientJson(parse_lenient(&bytes)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_json_passes_through() {
        assert_eq!(parse_lenient(b"{\"a\":1}"), json!({"a": 1}));
    }

    #[test]
    fn test_malformed_body_becomes_empty_object() {
        assert_eq!(parse_lenient(b"{not json"), json!({}));
        assert_eq!(parse_lenient(b""), json!({}));
    }

    #[test]
    fn test_missing_fields_index_as_null() {
        // Non-object payloads are kept; field access just finds nothing.
        let payload = parse_lenient(b"[1,2,3]");
        assert!(payload["phone"].as_str().is_none());
    }
}
