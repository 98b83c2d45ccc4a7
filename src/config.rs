// SPDX-License-Identifier: MIT

//! Application configuration loaded from environment variables.
//!
//! Each deployment environment carries its own default port and hashing
//! secret; individual values can be overridden with `PORT`,
//! `HASHING_SECRET` and `DATA_DIR`.

use std::env;
use std::path::PathBuf;

/// Deployment environment, selected with `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Staging,
    Production,
}

impl Environment {
    fn from_env() -> Self {
        match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            _ => Environment::Staging,
        }
    }

    /// Per-environment defaults: (port, hashing secret).
    fn defaults(self) -> (u16, &'static str) {
        match self {
            Environment::Staging => (3030, "stagingSecret38"),
            Environment::Production => (5000, "productionSecret59"),
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Staging => write!(f, "staging"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    /// Port the HTTP listener binds.
    pub port: u16,
    /// Key for the HMAC password hash.
    pub hashing_secret: String,
    /// Base directory of the record store.
    pub data_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let environment = Environment::from_env();
        let (default_port, default_secret) = environment.defaults();

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            Err(_) => default_port,
        };

        let hashing_secret =
            env::var("HASHING_SECRET").unwrap_or_else(|_| default_secret.to_string());
        if hashing_secret.is_empty() {
            return Err(ConfigError::Invalid("HASHING_SECRET"));
        }

        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".data"));

        Ok(Self {
            environment,
            port,
            hashing_secret,
            data_dir,
        })
    }

    /// Default config for tests only.
    pub fn test_default() -> Self {
        Self {
            environment: Environment::Staging,
            port: 0,
            hashing_secret: "testSecret".to_string(),
            data_dir: PathBuf::from(".data-test"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staging_defaults() {
        let (port, secret) = Environment::Staging.defaults();
        assert_eq!(port, 3030);
        assert_eq!(secret, "stagingSecret38");
    }

    #[test]
    fn test_production_defaults() {
        let (port, secret) = Environment::Production.defaults();
        assert_eq!(port, 5000);
        assert_eq!(secret, "productionSecret59");
    }

    #[test]
    fn test_environment_display() {
        assert_eq!(Environment::Staging.to_string(), "staging");
        assert_eq!(Environment::Production.to_string(), "production");
    }
}
