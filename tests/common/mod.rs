// SPDX-License-Identifier: MIT

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::Value;
use shoebox::config::Config;
use shoebox::db::{collections, FileDb};
use shoebox::models::{Token, User};
use shoebox::routes::{create_router, App};
use shoebox::{auth, AppState};
use std::sync::Arc;
use tower::ServiceExt;

/// A fully wired app backed by a throwaway data directory.
pub struct TestApp {
    pub app: App,
    pub state: Arc<AppState>,
    _data_dir: tempfile::TempDir,
}

/// Create a test app with its record store rooted in a tempdir.
pub async fn create_test_app() -> TestApp {
    let data_dir = tempfile::tempdir().expect("failed to create tempdir");

    let mut config = Config::test_default();
    config.data_dir = data_dir.path().to_path_buf();

    let db = FileDb::open(&config.data_dir)
        .await
        .expect("failed to open record store");

    let state = Arc::new(AppState { config, db });

    TestApp {
        app: create_router(state.clone()),
        state,
        _data_dir: data_dir,
    }
}

impl TestApp {
    /// Send a request and return the status plus the parsed JSON body.
    #[allow(dead_code)]
    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("token", token);
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, json)
    }

    /// Create a user record directly in the store.
    #[allow(dead_code)]
    pub async fn seed_user(&self, phone: &str, password: &str) -> User {
        let user = User {
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            phone: phone.to_string(),
            hashed_password: auth::hash_password(&self.state.config.hashing_secret, password)
                .unwrap(),
            tos_agreement: true,
        };
        self.state
            .db
            .create(collections::USERS, phone, &user)
            .await
            .expect("failed to seed user");
        user
    }

    /// Store a token record directly, letting the test control `expires`.
    #[allow(dead_code)]
    pub async fn seed_token(&self, phone: &str, expires: i64) -> Token {
        let token = Token {
            phone: phone.to_string(),
            token_id: auth::generate_token_id(),
            expires,
        };
        self.state
            .db
            .create(collections::TOKENS, &token.token_id, &token)
            .await
            .expect("failed to seed token");
        token
    }
}
