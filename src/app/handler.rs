//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user commands and
//! worker responses, translating them into state changes and action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the stdin reader or the upload worker
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Alerts
//!
//! A pending alert blocks user input: the next user event only dismisses it.
//! `Quit` and worker responses are never swallowed.
//!
//! # Example
//!
//! ```rust
//! use pdf_audit::app::{handle_event, AppState, Event};
//! use pdf_audit::ui::Theme;
//! use pdf_audit::ValidationMode;
//!
//! let mut state = AppState::new("http://127.0.0.1:8000/api/audit/validate-pdf".into(), ValidationMode::Report, Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::Submit)?;
//! assert!(!render && actions.is_empty());
//! # Ok::<(), pdf_audit::PdfAuditError>(())
//! ```

use crate::app::state::ValidationOutcome;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::SelectedDocument;
use crate::worker::WorkerResponse;
use std::path::PathBuf;

/// Events triggered by user commands or worker responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The user picked a file.
    OpenFile(PathBuf),

    /// The user asked to validate the current file.
    Submit,

    /// Hides the results area.
    ClearResults,

    /// Toggles the full command reference in the footer.
    ToggleHelp,

    /// Acknowledges the pending alert.
    DismissAlert,

    /// Stops the client.
    Quit,

    /// Wraps a response from the upload worker.
    WorkerResponse(WorkerResponse),
}

impl Event {
    const fn is_user_input(&self) -> bool {
        !matches!(self, Self::Quit | Self::WorkerResponse(_))
    }
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns `(should_render, actions)`. `should_render` is `false` when the
/// event changed nothing visible (for example a submit without a file).
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the runtime's error path uniform.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    if state.alert.is_some() && event.is_user_input() {
        state.dismiss_alert();
        tracing::debug!("alert dismissed");
        return Ok((true, vec![]));
    }

    match event {
        Event::OpenFile(path) => {
            match SelectedDocument::from_path(path) {
                Ok(document) => state.select_document(document),
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "selection failed");
                    state.raise_alert(&e.to_string());
                }
            }
            Ok((true, vec![]))
        }
        Event::Submit => {
            let Some(message) = state.begin_submission() else {
                tracing::debug!(
                    has_document = state.current_document.is_some(),
                    submission = ?state.submission,
                    "submit ignored"
                );
                return Ok((false, vec![]));
            };

            tracing::info!(file = %message.document().file_name, url = %state.endpoint_url, "submitting document");
            Ok((true, vec![Action::PostToWorker(message)]))
        }
        Event::ClearResults => {
            state.hide_results();
            Ok((true, vec![]))
        }
        Event::ToggleHelp => {
            state.show_help = !state.show_help;
            Ok((true, vec![]))
        }
        Event::DismissAlert => Ok((false, vec![])),
        Event::Quit => Ok((false, vec![Action::Quit])),
        Event::WorkerResponse(response) => {
            state.finish_submission();
            handle_worker_response(state, response);
            Ok((true, vec![]))
        }
    }
}

fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) {
    match response {
        WorkerResponse::ReportReceived { document, report } => {
            tracing::info!(file = %document.file_name, status = %report.overall_status, "report received");
            state.show_outcome(ValidationOutcome::Report {
                document: document.clone(),
                report: report.clone(),
            });
        }
        WorkerResponse::SummaryReceived { document, summary } => {
            tracing::info!(
                file = %document.file_name,
                status = %summary.overall_status,
                issues = summary.issues.len(),
                "summary received"
            );
            state.show_outcome(ValidationOutcome::Summary {
                document: document.clone(),
                summary: summary.clone(),
            });
        }
        WorkerResponse::SubmissionFailed { document, message } => {
            tracing::warn!(file = %document.file_name, error = %message, "submission failed");
            state.raise_alert(message);
        }
    }
}
