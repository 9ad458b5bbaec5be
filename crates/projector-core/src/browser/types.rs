use serde::{Deserialize, Serialize};

/// All browsing operations that can be dispatched through the store.
///
/// Each variant captures the parameters needed to execute the operation.
/// Commands use owned types so they can be serialized, stored, and sent
/// across boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Fetch the project list for the first time and build the list panel.
    ///
    /// Valid once per browsing session; dispatch [`Command::Refresh`] to
    /// fetch again.
    LoadProjects,
    /// Select a project by identifier and render its detail view.
    SelectProject { id: String },
    /// Re-fetch the project list, replace it wholesale, and reconcile the
    /// current selection.
    Refresh,
}
