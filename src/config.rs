// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// GCP project that owns the Firestore database
    pub gcp_project_id: String,
    /// Server port
    pub port: u16,
    /// Path the document routes are mounted under (e.g. `/api`).
    /// Empty string means the routes live at the root.
    pub mount_path: String,
    /// Extra origin allowed by CORS, besides localhost
    pub allowed_origin: Option<String>,
}

impl Config {
    /// Config for tests: routes under `/api`, no extra CORS origin.
    pub fn test_default() -> Self {
        Self {
            gcp_project_id: "test-project".to_string(),
            port: 8080,
            mount_path: "/api".to_string(),
            allowed_origin: None,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honored for local development.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            gcp_project_id: env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            mount_path: normalize_mount_path(
                &env::var("API_MOUNT_PATH").unwrap_or_else(|_| "/api".to_string()),
            )?,
            allowed_origin: env::var("ALLOWED_ORIGIN")
                .ok()
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty()),
        })
    }
}

/// Normalize a mount path to `/segment[/segment...]`, or `""` for the root.
///
/// Route parameter syntax is rejected since axum would treat it as a capture.
pub fn normalize_mount_path(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        return Ok(String::new());
    }

    if trimmed
        .chars()
        .any(|c| matches!(c, ':' | '*' | '{' | '}' | '?' | '#') || c.is_whitespace())
    {
        return Err(ConfigError::Invalid {
            name: "API_MOUNT_PATH",
            reason: format!("'{}' is not a plain path", raw),
        });
    }

    if trimmed.split('/').any(str::is_empty) {
        return Err(ConfigError::Invalid {
            name: "API_MOUNT_PATH",
            reason: format!("'{}' contains an empty segment", raw),
        });
    }

    Ok(format!("/{}", trimmed))
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}
