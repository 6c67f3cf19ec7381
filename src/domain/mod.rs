//! Domain layer for the audit client.
//!
//! Core types independent of the terminal, the HTTP stack and the event loop.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`report`]: Audit report wire model and status classification
//! - [`summary`]: Issue summary wire model
//! - [`document`]: The file selected for submission

pub mod document;
pub mod error;
pub mod report;
pub mod summary;

pub use document::SelectedDocument;
pub use error::{PdfAuditError, Result};
pub use report::{AuditReport, AuditStatus, FieldResult, PageOne, PageTwo, RowFields, RowResult};
pub use summary::{Issue, IssueSummary};
