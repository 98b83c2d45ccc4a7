// SPDX-License-Identifier: MIT

//! Session token records.

use serde::{Deserialize, Serialize};

/// Token lifetime: one hour, in milliseconds.
pub const TOKEN_TTL_MS: i64 = 60 * 60 * 1000;

/// Bearer token record stored in the `tokens` collection, keyed by its
/// id. Expired tokens are not reaped; they sit on disk until explicitly
/// deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// Owning user's phone number. A weak reference: the store does not
    /// enforce that the user still exists.
    pub phone: String,
    /// 20-character random id; also the record key.
    pub token_id: String,
    /// Absolute expiration, milliseconds since the Unix epoch.
    pub expires: i64,
}

impl Token {
    /// Mint a token for `phone` expiring one hour after `now_ms`.
    pub fn issue(phone: String, token_id: String, now_ms: i64) -> Self {
        Self {
            phone,
            token_id,
            expires: now_ms + TOKEN_TTL_MS,
        }
    }

    /// Whether the token is no longer live at `now_ms`.
    pub fn is_expired(&self, now_ms: i64) -> bool {
        self.expires <= now_ms
    }

    /// Whether the token authorizes `phone` at `now_ms`.
    pub fn is_valid_for(&self, phone: &str, now_ms: i64) -> bool {
        self.phone == phone && !self.is_expired(now_ms)
    }

    /// Push the expiration back out to one hour after `now_ms`.
    pub fn extend(&mut self, now_ms: i64) {
        self.expires = now_ms + TOKEN_TTL_MS;
    }
}
