//! End-to-end submissions against a local multipart server.

mod common;

use std::sync::mpsc;
use std::time::Duration;

use axum::http::StatusCode;
use common::StubServer;
use pdf_audit::app::ValidationOutcome;
use pdf_audit::transport::{HttpTransport, Transport, Upload, FILE_FIELD};
use pdf_audit::ui::{self, ColorMode};
use pdf_audit::worker::{UploadWorker, WorkerResponse};
use pdf_audit::{handle_event, initialize, Action, AppState, AuditStatus, Config, Event, PdfAuditError, SubmissionStatus};

const RESPONSE_TIMEOUT: Duration = Duration::from_secs(10);

fn state_for(server: &StubServer, summary: bool) -> AppState {
    let mut config = Config {
        server_url: server.url(),
        ..Config::default()
    };
    if summary {
        config.mode = pdf_audit::ValidationMode::Summary;
    }
    initialize(&config)
}

/// Selects `path`, submits it through a real worker and applies the response.
fn submit_and_wait(state: &mut AppState, path: std::path::PathBuf) {
    let (tx, rx) = mpsc::channel();
    let transport = HttpTransport::new(Some(RESPONSE_TIMEOUT)).unwrap();
    let worker = UploadWorker::new(Box::new(transport))
        .spawn(move |response| {
            let _ = tx.send(response);
        })
        .unwrap();

    handle_event(state, &Event::OpenFile(path)).unwrap();
    let (_, actions) = handle_event(state, &Event::Submit).unwrap();
    assert_eq!(state.submission, SubmissionStatus::Submitting);

    for action in actions {
        match action {
            Action::PostToWorker(message) => worker.post(message).unwrap(),
            Action::Quit => panic!("unexpected quit"),
        }
    }

    let response = rx.recv_timeout(RESPONSE_TIMEOUT).expect("worker response");
    handle_event(state, &Event::WorkerResponse(response)).unwrap();
    worker.shutdown();
}

#[test]
fn transport_sends_file_field_with_name_and_type() {
    let server = StubServer::start(StatusCode::OK, common::passing_report());
    let transport = HttpTransport::new(None).unwrap();

    let body = transport
        .post_document(Upload {
            url: format!("{}/api/audit/validate-pdf", server.url()),
            file_name: "statement.pdf".into(),
            mime_type: "application/pdf".into(),
            bytes: b"%PDF-1.4".to_vec(),
        })
        .unwrap();

    let report = pdf_audit::AuditReport::from_slice(&body).unwrap();
    assert_eq!(report.overall_status, AuditStatus::Pass);

    let received = server.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].name.as_deref(), Some(FILE_FIELD));
    assert_eq!(received[0].file_name.as_deref(), Some("statement.pdf"));
    assert_eq!(received[0].content_type.as_deref(), Some("application/pdf"));
    assert_eq!(received[0].bytes, b"%PDF-1.4");
}

#[test]
fn non_success_status_is_upload_failed() {
    let server = StubServer::start(StatusCode::UNPROCESSABLE_ENTITY, serde_json::json!({ "detail": "bad pdf" }));
    let transport = HttpTransport::new(None).unwrap();

    let result = transport.post_document(Upload {
        url: format!("{}/api/audit/validate-pdf", server.url()),
        file_name: "statement.pdf".into(),
        mime_type: "application/pdf".into(),
        bytes: Vec::new(),
    });

    assert!(matches!(result, Err(PdfAuditError::UploadFailed { status: 422 })));
}

#[test]
fn failing_report_renders_cards_and_rows() {
    let server = StubServer::start(StatusCode::OK, common::failing_report());
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_document(dir.path(), "q1-statement.pdf");

    let mut state = state_for(&server, false);
    submit_and_wait(&mut state, path);

    assert_eq!(state.submission, SubmissionStatus::Idle);
    assert!(state.alert.is_none());
    let Some(ValidationOutcome::Report { document, report }) = &state.outcome else {
        panic!("expected a report, got {:?}", state.outcome);
    };
    assert_eq!(document.file_name, "q1-statement.pdf");
    assert_eq!(report.page_2.rows.len(), 2);

    let output = ui::render_results(&state, ColorMode::Plain, 80);
    assert!(output.contains("Overall Status: FAIL"));
    assert!(output.contains("Acme Ltd"));
    assert!(output.contains("Missing year"));
    assert!(output.contains("Row 2"));
    assert!(output.contains("Name required"));

    let received = server.received();
    assert_eq!(received[0].file_name.as_deref(), Some("q1-statement.pdf"));
    assert_eq!(received[0].content_type.as_deref(), Some("application/pdf"));
}

#[test]
fn server_error_raises_alert_and_resets_button() {
    let server = StubServer::start(StatusCode::INTERNAL_SERVER_ERROR, serde_json::json!({}));
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_document(dir.path(), "statement.pdf");

    let mut state = state_for(&server, false);
    submit_and_wait(&mut state, path);

    assert_eq!(state.alert.as_deref(), Some("Error: Upload failed"));
    assert_eq!(state.submission, SubmissionStatus::Idle);
    assert!(state.outcome.is_none());
    assert!(state.compute_viewmodel().submit.enabled);
}

#[test]
fn unreachable_server_raises_alert() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let config = Config {
        server_url: format!("http://{addr}"),
        ..Config::default()
    };
    let mut state = initialize(&config);
    let dir = tempfile::tempdir().unwrap();
    submit_and_wait(&mut state, common::write_document(dir.path(), "statement.pdf"));

    let alert = state.alert.as_deref().unwrap_or_default();
    assert!(alert.starts_with("Error: "), "unexpected alert: {alert}");
    assert_eq!(state.submission, SubmissionStatus::Idle);
}

#[test]
fn summary_mode_lists_issues() {
    let server = StubServer::start(StatusCode::OK, common::blocking_summary());
    let dir = tempfile::tempdir().unwrap();

    let mut state = state_for(&server, true);
    submit_and_wait(&mut state, common::write_document(dir.path(), "statement.pdf"));

    assert!(matches!(state.outcome, Some(ValidationOutcome::Summary { .. })));
    let output = ui::render_results(&state, ColorMode::Plain, 80);
    assert!(output.contains("year: Year is missing"));
}

#[test]
fn worker_answers_every_request_in_order() {
    let server = StubServer::start(StatusCode::OK, common::passing_report());
    let dir = tempfile::tempdir().unwrap();
    let (tx, rx) = mpsc::channel();
    let worker = UploadWorker::new(Box::new(HttpTransport::new(None).unwrap()))
        .spawn(move |response| {
            let _ = tx.send(response);
        })
        .unwrap();

    let url = format!("{}/api/audit/validate-pdf", server.url());
    for name in ["a.pdf", "b.pdf"] {
        let document = pdf_audit::SelectedDocument::from_path(common::write_document(dir.path(), name)).unwrap();
        worker
            .post(pdf_audit::worker::WorkerMessage::submit_document(
                document,
                url.clone(),
                pdf_audit::ValidationMode::Report,
            ))
            .unwrap();
    }

    let names: Vec<String> = (0..2)
        .map(|_| match rx.recv_timeout(RESPONSE_TIMEOUT).unwrap() {
            WorkerResponse::ReportReceived { document, .. } => document.file_name,
            other => panic!("unexpected response: {other:?}"),
        })
        .collect();
    assert_eq!(names, ["a.pdf", "b.pdf"]);
    worker.shutdown();
}
