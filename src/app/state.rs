//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! client: the selected document, the submission status, the last decoded
//! response and the pending alert. It is the single source of truth for
//! everything the renderer shows.
//!
//! # State Components
//!
//! - **Current document**: The file the next submission will upload
//! - **Submission status**: Idle or Submitting (one request in flight at most)
//! - **Results**: Last decoded response plus the document it belongs to
//! - **Visibility**: Whether the results area is shown
//! - **Alert**: A pending error message that the user must acknowledge
//!
//! # View Model Computation
//!
//! [`AppState::compute_viewmodel`] turns a state snapshot into a renderable
//! [`UIViewModel`]. Result presentation is delegated to [`crate::ui::results`],
//! which is a pure function of the decoded response.
//!
//! # Example
//!
//! ```rust
//! use pdf_audit::app::AppState;
//! use pdf_audit::ui::Theme;
//! use pdf_audit::ValidationMode;
//!
//! let state = AppState::new("http://127.0.0.1:8000/api/audit/validate-pdf".into(), ValidationMode::Report, Theme::default());
//! let viewmodel = state.compute_viewmodel();
//! assert!(!viewmodel.submit.enabled);
//! ```

use super::modes::{ResultsVisibility, SubmissionStatus};
use crate::domain::{AuditReport, IssueSummary, SelectedDocument};
use crate::ui::results;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{AlertInfo, FooterInfo, HeaderInfo, ResultsView, SubmitControl, UIViewModel};
use crate::worker::WorkerMessage;
use crate::ValidationMode;

/// Title shown in the header bar.
pub const APP_TITLE: &str = "PDF Audit";

/// A decoded response together with the document it was produced for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Full per-field report.
    Report {
        /// Document the report belongs to.
        document: SelectedDocument,
        /// Decoded report.
        report: AuditReport,
    },

    /// Flattened issue list.
    Summary {
        /// Document the summary belongs to.
        document: SelectedDocument,
        /// Decoded summary.
        summary: IssueSummary,
    },
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// File the next submission will upload.
    ///
    /// Replaced on every successful selection; never cleared.
    pub current_document: Option<SelectedDocument>,

    /// Whether a submission is in flight.
    pub submission: SubmissionStatus,

    /// Whether the results area is shown.
    pub visibility: ResultsVisibility,

    /// Last decoded response. Dropped when a new file is chosen.
    pub outcome: Option<ValidationOutcome>,

    /// Pending alert text, already prefixed with `Error: `.
    pub alert: Option<String>,

    /// Fully-qualified endpoint URL submissions are posted to.
    pub endpoint_url: String,

    /// Which response body the endpoint returns.
    pub mode: ValidationMode,

    /// Whether the footer shows the full command reference.
    pub show_help: bool,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates an idle state with no document selected.
    #[must_use]
    pub const fn new(endpoint_url: String, mode: ValidationMode, theme: Theme) -> Self {
        Self {
            current_document: None,
            submission: SubmissionStatus::Idle,
            visibility: ResultsVisibility::Hidden,
            outcome: None,
            alert: None,
            endpoint_url,
            mode,
            show_help: false,
            theme,
        }
    }

    /// Makes `document` the current file and discards any shown results.
    pub fn select_document(&mut self, document: SelectedDocument) {
        tracing::debug!(file = %document.file_name, size = document.size_bytes, "document selected");
        self.current_document = Some(document);
        self.visibility = ResultsVisibility::Hidden;
        self.outcome = None;
    }

    /// Returns `true` when a submit would start a request.
    #[must_use]
    pub const fn can_submit(&self) -> bool {
        self.current_document.is_some() && matches!(self.submission, SubmissionStatus::Idle)
    }

    /// Enters `Submitting` and builds the worker request.
    ///
    /// Returns `None` (and changes nothing) when no file is selected or a
    /// request is already in flight.
    pub fn begin_submission(&mut self) -> Option<WorkerMessage> {
        if !self.can_submit() {
            return None;
        }
        let document = self.current_document.clone()?;
        self.submission = SubmissionStatus::Submitting;
        Some(WorkerMessage::submit_document(document, self.endpoint_url.clone(), self.mode))
    }

    /// Returns to `Idle`. Called before any worker response is inspected.
    pub fn finish_submission(&mut self) {
        self.submission = SubmissionStatus::Idle;
    }

    /// Stores a decoded response and reveals the results area.
    pub fn show_outcome(&mut self, outcome: ValidationOutcome) {
        self.outcome = Some(outcome);
        self.visibility = ResultsVisibility::Visible;
    }

    /// Hides the results area without forgetting the current document.
    pub fn hide_results(&mut self) {
        self.visibility = ResultsVisibility::Hidden;
    }

    /// Raises the blocking alert for a failure message.
    pub fn raise_alert(&mut self, message: &str) {
        self.alert = Some(format!("Error: {message}"));
    }

    /// Clears the pending alert. Returns `true` if one was shown.
    pub fn dismiss_alert(&mut self) -> bool {
        self.alert.take().is_some()
    }

    /// Computes the complete view model for the current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        UIViewModel {
            header: self.compute_header(),
            submit: SubmitControl {
                label: self.submission.label().to_string(),
                enabled: self.can_submit(),
            },
            alert: self.alert.as_ref().map(|message| AlertInfo {
                message: message.clone(),
            }),
            results: self.compute_results(),
            footer: self.compute_footer(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: APP_TITLE.to_string(),
            document: self
                .current_document
                .as_ref()
                .map(|doc| format!("{} ({})", doc.file_name, doc.display_size())),
        }
    }

    fn compute_results(&self) -> Option<ResultsView> {
        if self.visibility == ResultsVisibility::Hidden {
            return None;
        }

        self.outcome.as_ref().map(|outcome| match outcome {
            ValidationOutcome::Report { document, report } => {
                ResultsView::Report(results::present_report(&document.file_name, report))
            }
            ValidationOutcome::Summary { document, summary } => {
                ResultsView::Summary(results::present_summary(&document.file_name, summary))
            }
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.alert.is_some() {
            "Enter: dismiss".to_string()
        } else if self.show_help {
            "open <path>: choose file  validate | v: submit  clear: hide results  help: toggle help  quit | q: exit"
                .to_string()
        } else {
            "open <path>  v: validate  help  q: quit".to_string()
        };

        FooterInfo { keybindings }
    }
}
