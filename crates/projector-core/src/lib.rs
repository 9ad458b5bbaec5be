//! projector-core: Core library for browsing Copernicus projects
//!
//! This library provides the client and view-model logic for fetching the
//! project list from a Copernicus server and browsing it (list, selection,
//! per-project detail with task reports). It is used by the CLI.
//!
//! # Main Entry Points
//!
//! - [`browser`] - The `ProjectBrowser` controller and its command/event dispatch
//! - [`client`] - Blocking HTTP client for the server's command endpoint
//! - [`protocol`] - Request encoding and response envelope parsing
//! - [`config`] - Configuration management
//! - [`templates`] - Pure render functions for the list and detail markup

pub mod browser;
pub mod client;
pub mod config;
pub mod errors;
pub mod escape;
pub mod events;
pub mod logging;
pub mod panels;
pub mod projects;
pub mod protocol;
pub mod templates;

// Re-export commonly used types at crate root for convenience
pub use browser::{Command, Event, IgnoreReason, ProjectBrowser, ProjectSource, Store};
pub use client::{ClientError, HttpClient};
pub use config::{Config, ProjectorConfig};
pub use errors::{ProjectorError, ProjectorResult};
pub use projects::{Project, Reports, Task};
pub use protocol::ServerCommand;

// Re-export logging initialization
pub use logging::init_logging;
