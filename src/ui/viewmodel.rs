//! View model types representing renderable UI state.
//!
//! View models are computed from application state and contain no business
//! logic, only display-ready data: labels, substituted placeholders and the
//! tone (pass or fail styling) of every element.
//!
//! # Architecture
//!
//! `AppState::compute_viewmodel()` builds a [`UIViewModel`]; the results part
//! comes from the pure presenter in [`crate::ui::results`]. The renderer paints
//! view models and never looks at the domain types.

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Header information (title, selected document).
    pub header: HeaderInfo,

    /// Submit control label and enabled state.
    pub submit: SubmitControl,

    /// Pending alert, if any.
    pub alert: Option<AlertInfo>,

    /// Results area; `None` while hidden.
    pub results: Option<ResultsView>,

    /// Footer information (command hints).
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,

    /// Selected document with its size, e.g. `audit.pdf (12.3 KB)`.
    pub document: Option<String>,
}

/// Submit control display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    /// `Validate Document` or `Processing...`.
    pub label: String,

    /// Whether a submit would start a request.
    pub enabled: bool,
}

/// Blocking alert display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertInfo {
    /// Alert text, e.g. `Error: Upload failed`.
    pub message: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Command hint text.
    pub keybindings: String,
}

/// Pass or fail styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Positive styling.
    Pass,
    /// Negative styling, also used for unknown statuses.
    Fail,
}

impl Tone {
    /// `Pass` when `passed`, otherwise `Fail`.
    #[must_use]
    pub const fn from_bool(passed: bool) -> Self {
        if passed {
            Self::Pass
        } else {
            Self::Fail
        }
    }
}

/// The revealed results area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    /// Full per-field report.
    Report(ReportView),
    /// Flattened issue list.
    Summary(SummaryView),
}

/// Status banner or badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBanner {
    /// Text to display.
    pub text: String,
    /// Styling.
    pub tone: Tone,
}

/// A value to display, with placeholders marked so they can be dimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayValue {
    /// Value text or the `Empty` placeholder.
    pub text: String,
    /// Whether `text` is the placeholder.
    pub is_placeholder: bool,
}

/// Results of the full report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportView {
    /// File name of the document the results belong to.
    pub document: String,

    /// Overall status banner.
    pub banner: StatusBanner,

    /// One card per expected header field, in fixed order.
    pub page_one: Vec<FieldCard>,

    /// Table rows or the no-data placeholder.
    pub page_two: PageTwoView,
}

/// One page-1 field card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCard {
    /// Human label, e.g. `Company Name`.
    pub label: String,
    /// Extracted value or placeholder.
    pub value: DisplayValue,
    /// `VALID` or `INVALID`.
    pub verdict: String,
    /// Validation message.
    pub error: Option<String>,
    /// Card styling.
    pub tone: Tone,
}

/// Page-2 area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageTwoView {
    /// No rows were returned.
    NoData {
        /// Placeholder message.
        message: String,
    },
    /// One card per row, in received order.
    Rows(Vec<RowCard>),
}

/// One page-2 row card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowCard {
    /// `Row <n>`.
    pub title: String,
    /// `PASS` or `FAIL` badge.
    pub badge: StatusBanner,
    /// Name, Criteria and Type mini-fields.
    pub fields: Vec<MiniField>,
}

/// Compact field inside a row card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiniField {
    /// Short label, e.g. `Name`.
    pub label: String,
    /// Extracted value or placeholder.
    pub value: DisplayValue,
    /// Validation message.
    pub error: Option<String>,
    /// Styling.
    pub tone: Tone,
}

/// Results of the summary endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    /// File name of the document the results belong to.
    pub document: String,
    /// Overall status banner.
    pub banner: StatusBanner,
    /// `Can proceed: yes` or `Can proceed: no`.
    pub can_proceed: String,
    /// One line per issue; a single placeholder line when there are none.
    pub issues: Vec<String>,
    /// Whether `issues` holds the placeholder.
    pub no_issues: bool,
}
