//! # Configuration System
//!
//! Hierarchical TOML configuration system for projector.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.projector/config.toml` (global user preferences)
//! 3. **Project config** - `./.projector/config.toml` (project-specific overrides)
//! 4. **Environment / CLI arguments** - `PROJECTOR_SERVER_URL`, `--server` (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.projector/config.toml
//! [server]
//! url = "http://copernicus.example.org:14807"
//! request_timeout_secs = 60
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use projector_core::config::{Config, ProjectorConfig};
//!
//! // Handle config errors explicitly - don't silently fall back to defaults
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let file_config = ProjectorConfig::load_hierarchy()?;
//!     let config = Config::resolve(&file_config, None);
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

// Public API exports
pub use types::{Config, ProjectorConfig, ServerConfig};
pub use validation::{validate_config, validate_server_url};

// Delegation for ProjectorConfig methods
impl ProjectorConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, Box<dyn std::error::Error>> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
