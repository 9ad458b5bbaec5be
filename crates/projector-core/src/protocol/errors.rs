use crate::errors::ProjectorError;

/// Deviations from the expected response envelope shape.
#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    #[error("Server response is not a JSON envelope: {message}")]
    MalformedResponse { message: String },

    #[error("Server response envelope is empty")]
    EmptyResponse,

    #[error("Server reported error status '{status}': {message}")]
    ErrorStatus { status: String, message: String },

    #[error("First envelope item carries no message field")]
    MissingMessage,

    #[error("Envelope message is not a project list: {message}")]
    InvalidProjects { message: String },
}

impl ProjectorError for EnvelopeError {
    fn error_code(&self) -> &'static str {
        match self {
            EnvelopeError::MalformedResponse { .. } => "ENVELOPE_MALFORMED",
            EnvelopeError::EmptyResponse => "ENVELOPE_EMPTY",
            EnvelopeError::ErrorStatus { .. } => "ENVELOPE_ERROR_STATUS",
            EnvelopeError::MissingMessage => "ENVELOPE_MISSING_MESSAGE",
            EnvelopeError::InvalidProjects { .. } => "ENVELOPE_INVALID_PROJECTS",
        }
    }
}
