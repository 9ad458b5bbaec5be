//! Project data model and lookups.

pub mod types;

pub use types::{Project, Reports, Task};

/// Find a project by identifier with a linear scan.
///
/// The first match wins when the server hands out duplicate identifiers.
pub fn find_project<'a>(projects: &'a [Project], id: &str) -> Option<&'a Project> {
    projects.iter().find(|p| p.id == id)
}
