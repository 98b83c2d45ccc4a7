// SPDX-License-Identifier: MIT

//! Record store layer (one JSON file per record).

pub mod file_store;

pub use file_store::{FileDb, StoreError};

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    pub const TOKENS: &str = "tokens";
}
