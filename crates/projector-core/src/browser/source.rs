use crate::client::{ClientError, HttpClient};
use crate::projects::Project;

/// Backend capable of producing the project list.
///
/// Seam between the controller and the transport: the CLI plugs in
/// [`HttpClient`], tests plug in an in-memory double.
pub trait ProjectSource {
    /// Fetch the current project list from the backing server.
    fn list_projects(&self) -> Result<Vec<Project>, ClientError>;
}

impl ProjectSource for HttpClient {
    fn list_projects(&self) -> Result<Vec<Project>, ClientError> {
        HttpClient::list_projects(self)
    }
}
