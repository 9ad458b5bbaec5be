//! Configuration type definitions for projector.
//!
//! This module contains all configuration struct definitions. These types are
//! serialized/deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [server]
//! url = "http://copernicus.example.org:14807"
//! connect_timeout_secs = 5
//! request_timeout_secs = 30
//! ```

use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// Runtime configuration resolved from config files, environment variables,
/// and explicit overrides.
///
/// This is what the HTTP client consumes. Resolution order (highest wins):
/// explicit override, `PROJECTOR_SERVER_URL`, config file, built-in default.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Copernicus server
    pub server_url: String,
    /// TCP connect timeout in seconds
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Config {
    /// Resolve the runtime configuration from a loaded file config plus an
    /// optional explicit server override (e.g. a CLI flag).
    pub fn resolve(file_config: &ProjectorConfig, server_override: Option<&str>) -> Self {
        let server_url = server_override
            .map(|s| s.to_string())
            .or_else(defaults::env_server_url)
            .unwrap_or_else(|| file_config.server.url().to_string());

        Self {
            server_url,
            connect_timeout_secs: file_config.server.connect_timeout_secs(),
            request_timeout_secs: file_config.server.request_timeout_secs(),
        }
    }
}

/// Main configuration loaded from TOML config files.
///
/// This is the primary configuration structure that gets loaded from:
/// 1. User config: `~/.projector/config.toml`
/// 2. Project config: `./.projector/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProjectorConfig {
    /// Copernicus server connection settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// Server connection configuration.
///
/// All fields are optional in the file; accessor methods apply the built-in
/// defaults so merged configs keep per-field override semantics.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServerConfig {
    /// Base URL of the Copernicus server.
    /// Default: `http://127.0.0.1:14807`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// TCP connect timeout in seconds.
    /// Default: 5 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_timeout_secs: Option<u64>,

    /// Whole-request timeout in seconds.
    /// Default: 30 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl ServerConfig {
    pub fn url(&self) -> &str {
        self.url.as_deref().unwrap_or(defaults::DEFAULT_SERVER_URL)
    }

    pub fn connect_timeout_secs(&self) -> u64 {
        self.connect_timeout_secs
            .unwrap_or_else(defaults::default_connect_timeout_secs)
    }

    pub fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
            .unwrap_or_else(defaults::default_request_timeout_secs)
    }
}
