//! Issue summary returned by the document-validation endpoint.
//!
//! The summary endpoint flattens the full report into a list of problems, each
//! naming the field (and row, for table fields) and the validation message.
//! Early-exit responses send bare strings instead of objects, so both shapes are
//! accepted.

use crate::domain::report::{null_as_default, AuditStatus};
use serde::{Deserialize, Serialize};

/// Message shown when the server names a field but sends no message for it.
pub const DEFAULT_ISSUE_MESSAGE: &str = "Invalid or missing value";

/// One reported problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Issue {
    /// A problem tied to a named field.
    Field {
        /// Display name of the field, e.g. `Criteria Code (Row 2)`.
        field: String,
        /// Validation message.
        #[serde(default)]
        message: Option<String>,
    },
    /// A free-form note.
    Note(String),
}

impl Issue {
    /// Single-line text for display.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Field { field, message } => {
                format!("{field}: {}", message.as_deref().unwrap_or(DEFAULT_ISSUE_MESSAGE))
            }
            Self::Note(text) => text.clone(),
        }
    }
}

/// Response body of the document-validation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IssueSummary {
    /// Whether extraction succeeded at all.
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    /// Document-wide verdict (`INSUFFICIENT_DATA` is possible here).
    #[serde(default)]
    pub overall_status: AuditStatus,
    /// Whether the document may move on to the next step.
    #[serde(default, deserialize_with = "null_as_default")]
    pub can_proceed: bool,
    /// Problems in server order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub issues: Vec<Issue>,
}

impl IssueSummary {
    /// Decodes a response body.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json` error when the body is not a summary document.
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_members_decode_to_defaults() {
        let summary = IssueSummary::from_slice(
            br#"{"success": null, "overall_status": null, "can_proceed": null, "issues": null}"#,
        )
        .expect("summary should decode");
        assert!(!summary.success);
        assert!(!summary.can_proceed);
        assert!(summary.issues.is_empty());
        assert_eq!(summary.overall_status, AuditStatus::Missing);
    }

    #[test]
    fn decodes_mixed_issue_shapes() {
        let body = br#"{
            "success": false,
            "overall_status": "INSUFFICIENT_DATA",
            "can_proceed": false,
            "issues": [
                "No data extracted from document",
                {"field": "Date", "message": "Date must be in strictly MM/DD/YYYY format."},
                {"field": "Criteria Code (Row 2)", "message": null}
            ]
        }"#;

        let summary = IssueSummary::from_slice(body).expect("summary should decode");
        assert_eq!(summary.overall_status, AuditStatus::Other("INSUFFICIENT_DATA".into()));
        let lines: Vec<String> = summary.issues.iter().map(Issue::describe).collect();
        assert_eq!(
            lines,
            vec![
                "No data extracted from document".to_string(),
                "Date: Date must be in strictly MM/DD/YYYY format.".to_string(),
                "Criteria Code (Row 2): Invalid or missing value".to_string(),
            ]
        );
    }

    #[test]
    fn passing_summary_has_no_issues() {
        let summary = IssueSummary::from_slice(br#"{"success": true, "overall_status": "PASS", "can_proceed": true, "issues": []}"#)
            .expect("decode");
        assert!(summary.overall_status.is_pass());
        assert!(summary.can_proceed);
        assert!(summary.issues.is_empty());
    }
}
