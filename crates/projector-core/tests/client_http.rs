//! Integration tests for the HTTP client against a real server.
//!
//! Each test starts an axum double on an ephemeral port, drives the blocking
//! client, and asserts on both the parsed result and the recorded wire
//! traffic.

mod support;

use projector_core::{ClientError, HttpClient, ProjectorError};
use support::{TestServer, error_envelope, ok_envelope, sample_projects_json};

#[test]
fn test_list_projects_roundtrip() {
    let server = TestServer::serving(ok_envelope(sample_projects_json()));
    let client = HttpClient::connect(&server.config()).expect("connect");

    let projects = client.list_projects().expect("list projects");

    assert_eq!(projects.len(), 3);
    assert_eq!(projects[0].id, "proj-1");
    assert_eq!(projects[0].state, "running");
    assert_eq!(projects[0].reports.tasks.len(), 2);
    assert_eq!(projects[0].reports.tasks[1].id, "task-b");
    assert_eq!(projects[2].id, "proj-3");
    assert!(projects[2].reports.tasks.is_empty());
}

#[test]
fn test_list_projects_sends_exact_command_body() {
    let server = TestServer::serving(ok_envelope(serde_json::json!([])));
    let client = HttpClient::connect(&server.config()).expect("connect");

    client.list_projects().expect("list projects");

    let recorded = server.recorded();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].body, "cmd=list&type=projects");
    assert_eq!(recorded[0].content_type, "application/x-www-form-urlencoded");
}

#[test]
fn test_list_projects_error_status() {
    let server = TestServer::serving(error_envelope("no such command"));
    let client = HttpClient::connect(&server.config()).expect("connect");

    let err = client.list_projects().unwrap_err();

    assert_eq!(err.error_code(), "ENVELOPE_ERROR_STATUS");
    assert!(err.to_string().contains("ERROR"));
    assert!(err.to_string().contains("no such command"));
}

#[test]
fn test_list_projects_empty_envelope() {
    let server = TestServer::serving("[]".to_string());
    let client = HttpClient::connect(&server.config()).expect("connect");

    let err = client.list_projects().unwrap_err();

    assert_eq!(err.error_code(), "ENVELOPE_EMPTY");
}

#[test]
fn test_list_projects_malformed_body() {
    let server = TestServer::serving("<html>gateway timeout</html>".to_string());
    let client = HttpClient::connect(&server.config()).expect("connect");

    let err = client.list_projects().unwrap_err();

    assert_eq!(err.error_code(), "ENVELOPE_MALFORMED");
}

#[test]
fn test_list_projects_http_error_status() {
    let server = TestServer::start(vec![(500, "internal error".to_string())]);
    let client = HttpClient::connect(&server.config()).expect("connect");

    let err = client.list_projects().unwrap_err();

    assert_eq!(err.error_code(), "CLIENT_HTTP_STATUS");
    assert!(matches!(err, ClientError::HttpStatus { status: 500, .. }));
}

#[test]
fn test_list_projects_connection_refused() {
    // Grab a free port, then close it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let config = projector_core::config::Config {
        server_url: format!("http://{addr}"),
        connect_timeout_secs: 1,
        request_timeout_secs: 1,
    };
    let client = HttpClient::connect(&config).expect("connect");

    let err = client.list_projects().unwrap_err();

    assert_eq!(err.error_code(), "CLIENT_REQUEST_FAILED");
    assert!(!err.is_user_error());
}
