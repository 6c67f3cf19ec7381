//! State machine enums for the submission controller and the results area.
//!
//! # State Machine
//!
//! The submit control is either **Idle** or **Submitting**; exactly one
//! submission can be in flight. The results area is either **Hidden** or
//! **Visible**: it becomes visible when a response is decoded and is hidden
//! again the moment a new file is chosen.
//!
//! ```text
//!            Submit (file present)            WorkerResponse (any)
//!   Idle ───────────────────────────▶ Submitting ─────────────────▶ Idle
//!
//!            ReportReceived/SummaryReceived
//!   Hidden ─────────────────────────────────▶ Visible
//!     ▲                                          │
//!     └────────────── FileSelected ──────────────┘
//! ```

/// Label of the submit control while idle.
pub const IDLE_LABEL: &str = "Validate Document";

/// Label of the submit control while a request is in flight.
pub const BUSY_LABEL: &str = "Processing...";

/// Whether a submission is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    /// Ready to submit (when a file is selected).
    #[default]
    Idle,

    /// A request is in flight; further submits are ignored.
    Submitting,
}

impl SubmissionStatus {
    /// The submit control's label for this status.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => IDLE_LABEL,
            Self::Submitting => BUSY_LABEL,
        }
    }
}

/// Whether the results area is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultsVisibility {
    /// Nothing rendered below the submit control.
    #[default]
    Hidden,

    /// The last decoded response is rendered.
    Visible,
}
