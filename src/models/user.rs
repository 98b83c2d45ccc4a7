// SPDX-License-Identifier: MIT

//! User account records.

use serde::{Deserialize, Serialize};

/// User record as stored in the `users` collection, keyed by phone
/// number. Wire and on-disk field names are camelCase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    /// Unique key; doubles as the record filename.
    pub phone: String,
    /// Keyed HMAC-SHA256 hex digest. Write-only from the API's point of
    /// view: never serialized into a response.
    pub hashed_password: String,
    pub tos_agreement: bool,
}

/// Wire view of a user: everything except the password hash.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub tos_agreement: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            first_name: user.first_name,
            last_name: user.last_name,
            phone: user.phone,
            tos_agreement: user.tos_agreement,
        }
    }
}
