use crate::client::ClientError;
use crate::errors::ProjectorError;

/// Error executing a dispatched command.
#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Project list is already loaded; dispatch Refresh to fetch again")]
    AlreadyLoaded,
}

impl ProjectorError for BrowserError {
    fn error_code(&self) -> &'static str {
        match self {
            BrowserError::Client(e) => e.error_code(),
            BrowserError::AlreadyLoaded => "BROWSER_ALREADY_LOADED",
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            BrowserError::Client(e) => e.is_user_error(),
            BrowserError::AlreadyLoaded => false,
        }
    }
}
