//! The browsing controller: session state plus its command/event loop.
//!
//! A [`ProjectBrowser`] owns everything one browsing session holds (project
//! list, panels, selection) and is driven exclusively through
//! [`Store::dispatch`]. Callers observe outcomes through the returned
//! [`Event`]s instead of watching the view for changes.

pub mod controller;
pub mod errors;
pub mod events;
pub mod source;
pub mod store;
pub mod types;

pub use controller::ProjectBrowser;
pub use errors::BrowserError;
pub use events::{Event, IgnoreReason};
pub use source::ProjectSource;
pub use store::Store;
pub use types::Command;
