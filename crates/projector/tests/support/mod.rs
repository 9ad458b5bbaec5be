//! Minimal server double for CLI integration tests.
//!
//! Serves one canned envelope from a background thread's tokio runtime so the
//! spawned binary has a real endpoint to talk to.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::Duration;

use axum::http::header;
use axum::routing::post;
use axum::Router;
use tokio::sync::oneshot;

pub struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl TestServer {
    /// Start a server answering every `POST /copernicus` with the given body.
    pub fn serving(body: String) -> Self {
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

                let app = Router::new().route(
                    "/copernicus",
                    post(move || async move {
                        ([(header::CONTENT_TYPE, "application/json")], body)
                    }),
                );

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
            shutdown: Some(shutdown_tx),
            handle: Some(handle),
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
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

/// A success envelope carrying two projects, one with tasks and one without.
pub fn sample_body() -> String {
    serde_json::json!([{
        "message": [
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
            {"id": "proj-2", "state": "idle", "reports": {"tasks": []}}
        ],
        "status": "OK"
    }])
    .to_string()
}
