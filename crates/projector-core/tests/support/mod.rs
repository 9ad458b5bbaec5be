//! Shared server double for integration tests.
//!
//! Runs a real axum server on an ephemeral port inside a background thread's
//! tokio runtime, so the blocking client under test can talk to it without
//! nesting runtimes. Every request body is recorded for exact-wire asserts.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, mpsc};
use std::thread::JoinHandle;
use std::time::Duration;

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::post;
use tokio::sync::oneshot;

use projector_core::config::Config;

/// One recorded command POST.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub content_type: String,
    pub body: String,
}

struct AppState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    responses: Vec<(u16, String)>,
    cursor: AtomicUsize,
}

/// A command-endpoint double plus everything needed to assert against it.
///
/// Serves the canned responses in order; the last one repeats for any
/// further requests. Shuts the server down on drop.
pub struct TestServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl TestServer {
    /// Start a server answering `POST /copernicus` with the given
    /// `(http status, body)` sequence.
    pub fn start(responses: Vec<(u16, String)>) -> Self {
        assert!(!responses.is_empty(), "test server needs at least one response");

        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = Arc::new(AppState {
            requests: requests.clone(),
            responses,
            cursor: AtomicUsize::new(0),
        });

        let (addr_tx, addr_rx) = mpsc::channel();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let handle = std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().expect("tokio runtime");
            rt.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind test server");
                addr_tx
                    .send(listener.local_addr().expect("local addr"))
                    .expect("report addr");

                let app = Router::new()
                    .route("/copernicus", post(handle_command))
                    .with_state(state);

                axum::serve(listener, app)
                    .with_graceful_shutdown(async move {
                        let _ = shutdown_rx.await;
                    })
                    .await
                    .expect("serve");
            });
        });

        let addr = addr_rx
            .recv_timeout(Duration::from_secs(3))
            .expect("test server never came up");

        Self {
            addr,
            requests,
            shutdown: Some(shutdown_tx),
            handle: Some(handle),
        }
    }

    /// Start a server answering every request with one 200 body.
    pub fn serving(body: String) -> Self {
        Self::start(vec![(200, body)])
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Client config pointing at this server.
    pub fn config(&self) -> Config {
        Config {
            server_url: self.base_url(),
            connect_timeout_secs: 5,
            request_timeout_secs: 30,
        }
    }

    /// Everything POSTed to the command endpoint so far.
    pub fn recorded(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

async fn handle_command(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    state
        .requests
        .lock()
        .unwrap()
        .push(RecordedRequest { content_type, body });

    let index = state
        .cursor
        .fetch_add(1, Ordering::SeqCst)
        .min(state.responses.len() - 1);
    let (status, body) = state.responses[index].clone();

    (
        StatusCode::from_u16(status).expect("valid status"),
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
}

/// Wrap a project array in the server's success envelope.
pub fn ok_envelope(projects: serde_json::Value) -> String {
    serde_json::json!([{ "message": projects, "status": "OK" }]).to_string()
}

/// An error envelope the way the server reports failed commands.
pub fn error_envelope(message: &str) -> String {
    serde_json::json!([{ "message": message, "status": "ERROR" }]).to_string()
}

/// Three projects covering tasks, empty reports, and a missing reports block.
pub fn sample_projects_json() -> serde_json::Value {
    serde_json::json!([
        {
            "id": "proj-1",
            "state": "running",
            "reports": {
                "tasks": [
                    {"id": "task-a", "state": "done"},
                    {"id": "task-b", "state": "queued"}
                ]
            }
        },
        {"id": "proj-2", "state": "idle", "reports": {"tasks": []}},
        {"id": "proj-3", "state": "held"}
    ])
}
