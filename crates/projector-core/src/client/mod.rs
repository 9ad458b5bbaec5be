//! Synchronous HTTP client for the server's command endpoint.
//!
//! Uses `reqwest::blocking` — the browsing flow is strictly sequential, so a
//! blocking client keeps the controller free of any async runtime. Each
//! operation POSTs one form-encoded command and reads one envelope back.

use std::time::Duration;

use tracing::{info, warn};

use crate::config::Config;
use crate::errors::ProjectorError;
use crate::projects::Project;
use crate::protocol::{self, EnvelopeError, ServerCommand};

/// Error talking to the server's command endpoint.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid server url '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Failed to build HTTP client: {source}")]
    BuildFailed { source: reqwest::Error },

    #[error("Request to {url} failed: {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Server answered {url} with HTTP status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error(transparent)]
    Envelope(#[from] EnvelopeError),
}

impl ProjectorError for ClientError {
    fn error_code(&self) -> &'static str {
        match self {
            ClientError::InvalidUrl { .. } => "CLIENT_INVALID_URL",
            ClientError::BuildFailed { .. } => "CLIENT_BUILD_FAILED",
            ClientError::RequestFailed { .. } => "CLIENT_REQUEST_FAILED",
            ClientError::HttpStatus { .. } => "CLIENT_HTTP_STATUS",
            ClientError::Envelope(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, ClientError::InvalidUrl { .. })
    }
}

/// Blocking client bound to one server's command endpoint.
#[derive(Debug, Clone)]
pub struct HttpClient {
    command_url: String,
    http: reqwest::blocking::Client,
}

impl HttpClient {
    /// Build a client for the configured server.
    ///
    /// Validates the base URL and fixes the connect and request timeouts up
    /// front; no connection is opened until the first request.
    pub fn connect(config: &Config) -> Result<Self, ClientError> {
        crate::config::validate_server_url(&config.server_url).map_err(|e| {
            ClientError::InvalidUrl {
                url: config.server_url.clone(),
                message: e.to_string(),
            }
        })?;

        let http = reqwest::blocking::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ClientError::BuildFailed { source: e })?;

        Ok(Self {
            command_url: command_url(&config.server_url),
            http,
        })
    }

    /// Full URL of the command endpoint this client POSTs to.
    pub fn command_url(&self) -> &str {
        &self.command_url
    }

    /// Fetch the full project list.
    ///
    /// Sends the `list projects` command and blocks until the envelope is
    /// parsed or an error surfaces.
    pub fn list_projects(&self) -> Result<Vec<Project>, ClientError> {
        info!(
            event = "core.client.list_projects_started",
            url = %self.command_url
        );

        let response = self
            .http
            .post(&self.command_url)
            .form(&ServerCommand::ListProjects.form_params())
            .send()
            .map_err(|e| ClientError::RequestFailed {
                url: self.command_url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                event = "core.client.list_projects_failed",
                url = %self.command_url,
                status = status.as_u16()
            );
            return Err(ClientError::HttpStatus {
                url: self.command_url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|e| ClientError::RequestFailed {
            url: self.command_url.clone(),
            source: e,
        })?;

        let projects = protocol::parse_projects(&body)?;

        info!(
            event = "core.client.list_projects_completed",
            count = projects.len()
        );

        Ok(projects)
    }
}

/// Join the fixed command path onto a base URL.
fn command_url(base: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), protocol::COMMAND_PATH)
}
