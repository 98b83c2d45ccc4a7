// SPDX-License-Identifier: MIT

//! Password hashing, token minting, and the token authorizer.

use hmac::{Hmac, Mac};
use rand::Rng;
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::db::{collections, FileDb};
use crate::error::ApiError;
use crate::models::Token;

// Type alias for HMAC-SHA256
type HmacSha256 = Hmac<Sha256>;

/// Length of a token id in characters.
pub const TOKEN_ID_LEN: usize = 20;

/// Alphabet for token ids.
const TOKEN_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Keyed hash of a password: HMAC-SHA256 under the configured hashing
/// secret, hex-encoded. Deterministic, so equal passwords always produce
/// equal digests for the same secret.
pub fn hash_password(secret: &str, password: &str) -> Result<String, ApiError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| ApiError::internal("Could not hash the user password", e))?;
    mac.update(password.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Constant-time comparison of two hex digests.
pub fn hashes_match(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Random 20-character alphanumeric token id.
pub fn generate_token_id() -> String {
    let mut rng = rand::thread_rng();
    (0..TOKEN_ID_LEN)
        .map(|_| TOKEN_ALPHABET[rng.gen_range(0..TOKEN_ALPHABET.len())] as char)
        .collect()
}

/// Current time in milliseconds since the Unix epoch.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Verify that `token_header` names a live token bound to `phone`.
///
/// Looked up fresh on every call: expiry is time-dependent, so results
/// are never cached across requests. Any failure (missing header,
/// unknown id, wrong owner, expired, storage error) collapses into the
/// same 403 so callers can short-circuit with it directly.
pub async fn verify_token(
    db: &FileDb,
    token_header: Option<&str>,
    phone: &str,
) -> Result<(), ApiError> {
    let Some(token_id) = token_header else {
        return Err(ApiError::TokenUnauthorized);
    };

    match db.read::<Token>(collections::TOKENS, token_id).await {
        Ok(token) if token.is_valid_for(phone, now_ms()) => Ok(()),
        _ => Err(ApiError::TokenUnauthorized),
    }
}
