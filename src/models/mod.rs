// SPDX-License-Identifier: MIT

//! Data models for the API.

pub mod token;
pub mod user;

pub use token::{Token, TOKEN_TTL_MS};
pub use user::{User, UserResponse};
