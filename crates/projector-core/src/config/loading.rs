//! Configuration loading and merging logic.
//!
//! This module handles loading configuration from files and merging
//! configurations from different sources (user config, project config).
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.projector/config.toml` (global user preferences)
//! 3. **Project config** - `./.projector/config.toml` (project-specific overrides)
//! 4. **Environment / CLI arguments** - `PROJECTOR_SERVER_URL`, `--server` (highest priority)

use crate::config::types::{ProjectorConfig, ServerConfig};
use crate::config::validation::validate_config;
use std::fs;
use std::path::PathBuf;

/// Check if an error is a "file not found" error.
fn is_file_not_found(e: &(dyn std::error::Error + 'static)) -> bool {
    if let Some(io_err) = e.downcast_ref::<std::io::Error>() {
        return io_err.kind() == std::io::ErrorKind::NotFound;
    }

    let err_str = e.to_string();
    err_str.contains("No such file or directory") || err_str.contains("cannot find the path")
}

/// Load configuration from the hierarchy of config files.
///
/// Loads and merges configuration from:
/// 1. Default values
/// 2. User config (`~/.projector/config.toml`)
/// 3. Project config (`./.projector/config.toml`)
///
/// # Errors
///
/// Returns an error if validation fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<ProjectorConfig, Box<dyn std::error::Error>> {
    let mut config = ProjectorConfig::default();

    // Load user config (file not found is expected, parse errors fail)
    match load_user_config() {
        Ok(user_config) => config = merge_configs(config, user_config),
        Err(e) if !is_file_not_found(e.as_ref()) => return Err(e),
        Err(_) => {} // File not found - continue with defaults
    }

    // Load project config (file not found is expected, parse errors fail)
    match load_project_config() {
        Ok(project_config) => config = merge_configs(config, project_config),
        Err(e) if !is_file_not_found(e.as_ref()) => return Err(e),
        Err(_) => {} // File not found - continue with merged config
    }

    // Validate the final configuration
    validate_config(&config)?;

    Ok(config)
}

/// Load the user configuration from ~/.projector/config.toml.
fn load_user_config() -> Result<ProjectorConfig, Box<dyn std::error::Error>> {
    let home_dir = dirs::home_dir().ok_or("Could not find home directory")?;
    let config_path = home_dir.join(".projector").join("config.toml");
    load_config_file(&config_path)
}

/// Load the project configuration from ./.projector/config.toml.
fn load_project_config() -> Result<ProjectorConfig, Box<dyn std::error::Error>> {
    let config_path = std::env::current_dir()?.join(".projector").join("config.toml");
    load_config_file(&config_path)
}

/// Load a configuration file from the given path.
fn load_config_file(path: &PathBuf) -> Result<ProjectorConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;
    let config: ProjectorConfig = toml::from_str(&content)
        .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;
    Ok(config)
}

/// Merge two configurations, with override_config taking precedence.
///
/// All file-config fields are optional, so override values replace base values
/// only when present in the override config.
pub fn merge_configs(base: ProjectorConfig, override_config: ProjectorConfig) -> ProjectorConfig {
    ProjectorConfig {
        server: ServerConfig {
            url: override_config.server.url.or(base.server.url),
            connect_timeout_secs: override_config
                .server
                .connect_timeout_secs
                .or(base.server.connect_timeout_secs),
            request_timeout_secs: override_config
                .server
                .request_timeout_secs
                .or(base.server.request_timeout_secs),
        },
    }
}
