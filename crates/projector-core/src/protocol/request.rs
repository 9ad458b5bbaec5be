/// Path of the command endpoint under the server base URL.
///
/// The server routes every command POST through this single path; the
/// intent lives in the form parameters.
pub const COMMAND_PATH: &str = "copernicus";

/// Commands understood by the server's command endpoint.
///
/// Each variant encodes to `application/x-www-form-urlencoded` parameters
/// via [`ServerCommand::form_params`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerCommand {
    /// Fetch the full project list.
    ListProjects,
}

impl ServerCommand {
    /// The exact form parameters for this command, in wire order.
    pub fn form_params(&self) -> Vec<(&'static str, &'static str)> {
        match self {
            ServerCommand::ListProjects => vec![("cmd", "list"), ("type", "projects")],
        }
    }
}
