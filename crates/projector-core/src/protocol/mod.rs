//! Wire protocol for the server's command endpoint.
//!
//! Requests are form-encoded command parameters POSTed to a fixed path
//! ([`request::COMMAND_PATH`]); responses arrive wrapped in a JSON array
//! envelope ([`envelope::ResponseItem`]).

pub mod envelope;
pub mod errors;
pub mod request;

pub use envelope::{ResponseItem, STATUS_OK, parse_projects};
pub use errors::EnvelopeError;
pub use request::{COMMAND_PATH, ServerCommand};
