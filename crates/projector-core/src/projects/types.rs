use serde::{Deserialize, Serialize};

/// A unit of work tracked by the Copernicus server.
///
/// Deserialized straight out of the response envelope. The server sends more
/// fields than these; everything the browsing surface does not use is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Server-assigned project identifier
    pub id: String,
    /// Current project state as reported by the server (e.g. "running")
    pub state: String,
    /// Task reports attached to the project
    #[serde(default)]
    pub reports: Reports,
}

/// The reports block of a project.
///
/// Older servers omit it for projects without tasks, so it defaults to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Reports {
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// A sub-unit of a project's work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Server-assigned task identifier
    pub id: String,
    /// Current task state as reported by the server
    pub state: String,
}
