//! Upload worker implementation.
//!
//! The worker owns the [`Transport`] and runs on its own thread so the network
//! round trip never blocks the event loop. Each request is answered exactly once:
//! a [`CompletionGuard`] reports a failure if the handler unwinds before a
//! response is delivered.

use crate::domain::error::{PdfAuditError, Result};
use crate::domain::{AuditReport, IssueSummary, SelectedDocument};
use crate::transport::{Transport, Upload};
use crate::worker::{WorkerMessage, WorkerResponse};
use crate::ValidationMode;
use std::sync::mpsc::{self, Sender};
use std::thread::JoinHandle;

/// Message delivered when the worker stops before answering a request.
const ABORTED_MESSAGE: &str = "Upload worker stopped unexpectedly";

/// Background worker that performs document submissions.
pub struct UploadWorker {
    transport: Box<dyn Transport>,
}

impl UploadWorker {
    /// Creates a worker over the given transport.
    #[must_use]
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Processes one request and returns its response.
    ///
    /// Never fails: every error becomes [`WorkerResponse::SubmissionFailed`]
    /// carrying the error's display text.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);

        let span = tracing::debug_span!("worker_handle_message", file = %message.document().file_name);
        let _guard = span.entered();

        match message {
            WorkerMessage::SubmitDocument { document, url, mode, .. } => {
                match self.submit(&document, url, mode) {
                    Ok(response) => response,
                    Err(e) => {
                        tracing::debug!(error = %e, "submission failed");
                        WorkerResponse::SubmissionFailed {
                            document,
                            message: e.to_string(),
                        }
                    }
                }
            }
        }
    }

    fn submit(&self, document: &SelectedDocument, url: String, mode: ValidationMode) -> Result<WorkerResponse> {
        let bytes = std::fs::read(&document.path).map_err(|e| PdfAuditError::Selection {
            path: document.path.display().to_string(),
            reason: e.to_string(),
        })?;

        tracing::debug!(bytes = bytes.len(), url = %url, "posting document");

        let body = self.transport.post_document(Upload {
            url,
            file_name: document.file_name.clone(),
            mime_type: document.mime_type(),
            bytes,
        })?;

        Ok(match mode {
            ValidationMode::Report => WorkerResponse::ReportReceived {
                document: document.clone(),
                report: AuditReport::from_slice(&body)?,
            },
            ValidationMode::Summary => WorkerResponse::SummaryReceived {
                document: document.clone(),
                summary: IssueSummary::from_slice(&body)?,
            },
        })
    }

    /// Re-attaches the submitting span's OpenTelemetry context on this thread.
    ///
    /// The returned guard must be held for the duration of the request.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(trace_id, span_id, TraceFlags::SAMPLED, true, TraceState::default());

        Some(opentelemetry::Context::current().with_remote_span_context(span_context).attach())
    }

    /// Moves the worker onto its own thread.
    ///
    /// `deliver` is called once per request with the response; it must not block
    /// for long since it runs on the worker thread. The thread exits when the
    /// returned handle is shut down or dropped.
    pub fn spawn<F>(mut self, deliver: F) -> Result<WorkerHandle>
    where
        F: Fn(WorkerResponse) + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel::<WorkerMessage>();

        let thread = std::thread::Builder::new()
            .name("pdf-audit-upload".to_string())
            .spawn(move || {
                for message in receiver {
                    let guard = CompletionGuard::new(message.document().clone(), &deliver);
                    let response = self.handle_message(message);
                    guard.complete(response);
                }
                tracing::debug!("upload worker exiting");
            })?;

        Ok(WorkerHandle { sender, thread })
    }
}

impl std::fmt::Debug for UploadWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadWorker").finish_non_exhaustive()
    }
}

/// Guarantees a response for an in-flight request.
///
/// If dropped without [`CompletionGuard::complete`] (for example while the
/// handler unwinds), it delivers a `SubmissionFailed` response instead.
struct CompletionGuard<'a, F: Fn(WorkerResponse)> {
    document: Option<SelectedDocument>,
    deliver: &'a F,
}

impl<'a, F: Fn(WorkerResponse)> CompletionGuard<'a, F> {
    const fn new(document: SelectedDocument, deliver: &'a F) -> Self {
        Self {
            document: Some(document),
            deliver,
        }
    }

    fn complete(mut self, response: WorkerResponse) {
        self.document = None;
        (self.deliver)(response);
    }
}

impl<F: Fn(WorkerResponse)> Drop for CompletionGuard<'_, F> {
    fn drop(&mut self) {
        if let Some(document) = self.document.take() {
            tracing::warn!(file = %document.file_name, "request abandoned without a response");
            (self.deliver)(WorkerResponse::SubmissionFailed {
                document,
                message: ABORTED_MESSAGE.to_string(),
            });
        }
    }
}

/// Handle to a running upload worker.
#[derive(Debug)]
pub struct WorkerHandle {
    sender: Sender<WorkerMessage>,
    thread: JoinHandle<()>,
}

impl WorkerHandle {
    /// Queues a request for the worker.
    ///
    /// # Errors
    ///
    /// Returns [`PdfAuditError::Worker`] if the worker thread has exited.
    pub fn post(&self, message: WorkerMessage) -> Result<()> {
        self.sender
            .send(message)
            .map_err(|e| PdfAuditError::Worker(format!("upload worker is not running: {e}")))
    }

    /// Closes the request channel and waits for the worker to finish.
    pub fn shutdown(self) {
        drop(self.sender);
        if self.thread.join().is_err() {
            tracing::warn!("upload worker panicked");
        }
    }
}
