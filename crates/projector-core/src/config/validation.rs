//! Configuration validation.

use crate::config::types::ProjectorConfig;
use crate::errors::ConfigError;

/// Validate a loaded file configuration.
///
/// Only explicitly set fields are checked; absent fields fall back to
/// built-in defaults, which are always valid.
pub fn validate_config(config: &ProjectorConfig) -> Result<(), ConfigError> {
    if let Some(url) = &config.server.url {
        validate_server_url(url)?;
    }

    if config.server.connect_timeout_secs == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "server.connect_timeout_secs must be greater than zero".to_string(),
        });
    }

    if config.server.request_timeout_secs == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "server.request_timeout_secs must be greater than zero".to_string(),
        });
    }

    Ok(())
}

/// Validate a server base URL.
pub fn validate_server_url(url: &str) -> Result<(), ConfigError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidServerUrl {
            url: url.to_string(),
        })
    }
}
