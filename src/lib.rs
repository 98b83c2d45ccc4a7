// SPDX-License-Identifier: MIT

//! Shoebox: user accounts and session tokens kept as one JSON file per
//! record on disk.
//!
//! This crate provides the backend API for registering users, trading
//! phone + password for short-lived bearer tokens, and managing both.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod validate;

use config::Config;
use db::FileDb;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FileDb,
}
