//! Worker thread message types for cross-thread communication.
//!
//! This module defines the request and response protocol between the event loop
//! and the background upload worker. Requests carry a [`TraceContext`] so the
//! worker's spans are linked to the span that issued the submission.

use crate::domain::{AuditReport, IssueSummary, SelectedDocument};
use crate::ValidationMode;
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the OpenTelemetry IDs of the active `tracing` span.
    ///
    /// Returns `None` when tracing is not initialized or the span is not sampled.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Requests sent from the event loop to the upload worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Read the document and post it to `url`.
    SubmitDocument {
        /// Document to upload.
        document: SelectedDocument,

        /// Fully-qualified endpoint URL.
        url: String,

        /// Which response body to expect.
        mode: ValidationMode,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Creates a `SubmitDocument` message with the current trace context.
    #[must_use]
    pub fn submit_document(document: SelectedDocument, url: String, mode: ValidationMode) -> Self {
        Self::SubmitDocument {
            document,
            url,
            mode,
            trace_context: TraceContext::from_current(),
        }
    }

    /// The document this message concerns.
    #[must_use]
    pub const fn document(&self) -> &SelectedDocument {
        match self {
            Self::SubmitDocument { document, .. } => document,
        }
    }

    /// The propagated trace context, if any.
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::SubmitDocument { trace_context, .. } => trace_context.as_ref(),
        }
    }
}

/// Responses sent from the upload worker back to the event loop.
///
/// Every `SubmitDocument` request produces exactly one response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The server returned a well-formed audit report.
    ReportReceived {
        /// Document the report belongs to.
        document: SelectedDocument,
        /// Decoded report.
        report: AuditReport,
    },

    /// The server returned a well-formed issue summary.
    SummaryReceived {
        /// Document the summary belongs to.
        document: SelectedDocument,
        /// Decoded summary.
        summary: IssueSummary,
    },

    /// The submission failed before a usable body was decoded.
    SubmissionFailed {
        /// Document whose submission failed.
        document: SelectedDocument,
        /// Human-readable failure message.
        message: String,
    },
}
