//! Default values and environment resolution for configuration types.

/// Default base URL of the Copernicus server.
///
/// 14807 is the server's stock HTTP port; a bare local install listens there.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:14807";

/// Returns the default TCP connect timeout in seconds (5s).
///
/// Used by the accessor methods on `ServerConfig`.
pub fn default_connect_timeout_secs() -> u64 {
    5
}

/// Returns the default whole-request timeout in seconds (30s).
///
/// The list response is small; 30 seconds covers a loaded server without
/// leaving a wedged connection hanging forever.
///
/// Used by the accessor methods on `ServerConfig`.
pub fn default_request_timeout_secs() -> u64 {
    30
}

/// Read the server URL from `PROJECTOR_SERVER_URL` with validation and warnings.
///
/// Invalid values (wrong scheme) are ignored with a warning rather than
/// failing resolution.
pub fn env_server_url() -> Option<String> {
    let Ok(val) = std::env::var("PROJECTOR_SERVER_URL") else {
        return None;
    };

    if val.starts_with("http://") || val.starts_with("https://") {
        Some(val)
    } else {
        eprintln!(
            "Warning: Invalid PROJECTOR_SERVER_URL '{}', expected an http(s) URL. Ignoring.",
            val
        );
        None
    }
}
