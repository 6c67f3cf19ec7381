//! Local stand-in for the audit service.
//!
//! The server runs on its own thread with its own tokio runtime: the blocking
//! `reqwest` client used by the crate must never be driven from inside a runtime.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use tokio::sync::oneshot;

/// One multipart part as received by the stub.
#[derive(Debug, Clone)]
pub struct ReceivedPart {
    pub name: Option<String>,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

struct Stub {
    status: StatusCode,
    body: Value,
    received: Mutex<Vec<ReceivedPart>>,
}

/// Running stub; shut down on drop.
pub struct StubServer {
    pub addr: SocketAddr,
    stub: Arc<Stub>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl StubServer {
    /// Starts a server answering both validation endpoints with `status` and `body`.
    pub fn start(status: StatusCode, body: Value) -> Self {
        let stub = Arc::new(Stub {
            status,
            body,
            received: Mutex::new(Vec::new()),
        });
        let (addr_tx, addr_rx) = std::sync::mpsc::channel();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let app = Router::new()
            .route("/api/audit/validate-pdf", post(validate))
            .route("/api/validate-document", post(validate))
            .with_state(Arc::clone(&stub));

        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("tokio runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
                addr_tx.send(listener.local_addr().expect("local addr")).expect("report addr");
                axum::serve(listener, app)
                    .with_graceful_shutdown(async {
                        let _ = shutdown_rx.await;
                    })
                    .await
                    .expect("serve");
            });
        });

        let addr = addr_rx.recv().expect("stub server failed to start");
        Self {
            addr,
            stub,
            shutdown: Some(shutdown_tx),
        }
    }

    /// Base URL, e.g. `http://127.0.0.1:41234`.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn received(&self) -> Vec<ReceivedPart> {
        self.stub.received.lock().expect("lock").clone()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

async fn validate(State(stub): State<Arc<Stub>>, mut multipart: Multipart) -> (StatusCode, Json<Value>) {
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().map(str::to_string);
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
        stub.received.lock().expect("lock").push(ReceivedPart {
            name,
            file_name,
            content_type,
            bytes,
        });
    }
    (stub.status, Json(stub.body.clone()))
}

/// A mixed report: page 1 partly valid, two page-2 rows.
pub fn failing_report() -> Value {
    serde_json::json!({
        "overall_status": "FAIL",
        "page_1": {
            "fields": {
                "company_name": { "valid": true, "value": "Acme Ltd" },
                "year": { "valid": false, "value": null, "error": "Missing year" },
                "completed_by": { "valid": true, "value": "J. Smith" }
            }
        },
        "page_2": {
            "rows": [
                {
                    "row_number": 1,
                    "row_status": "PASS",
                    "fields": {
                        "business_person_name": { "valid": true, "value": "Jane Roe" },
                        "criteria_code": { "valid": true, "value": "1.a" },
                        "transaction_type": { "valid": true, "value": "Lease" }
                    }
                },
                {
                    "row_number": 2,
                    "row_status": "FAIL",
                    "fields": {
                        "business_person_name": { "valid": false, "value": "", "error": "Name required" }
                    }
                }
            ]
        }
    })
}

pub fn passing_report() -> Value {
    serde_json::json!({
        "overall_status": "PASS",
        "page_1": {
            "fields": {
                "company_name": { "valid": true, "value": "Acme Ltd" },
                "year": { "valid": true, "value": "2024" },
                "completed_by": { "valid": true, "value": "J. Smith" },
                "date": { "valid": true, "value": "2024-03-31" }
            }
        },
        "page_2": { "rows": [] }
    })
}

/// An issue summary that blocks progress.
pub fn blocking_summary() -> Value {
    serde_json::json!({
        "success": true,
        "overall_status": "FAIL",
        "can_proceed": false,
        "issues": [
            { "field": "year", "message": "Year is missing" }
        ]
    })
}

/// Writes a small PDF-looking file into `dir` and returns its path.
pub fn write_document(dir: &std::path::Path, name: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"%PDF-1.4\n%stub\n").expect("write document");
    path
}
