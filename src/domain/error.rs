//! Error types for the audit client.
//!
//! This module defines the centralized error type [`PdfAuditError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented with the
//! `thiserror` crate.
//!
//! The `Display` text of the transport-facing variants is what the user sees in the
//! alert box (prefixed with `Error: `), so those messages are kept short.

use thiserror::Error;

/// The main error type for audit client operations.
///
/// # Examples
///
/// ```
/// use pdf_audit::PdfAuditError;
///
/// let err = PdfAuditError::UploadFailed { status: 500 };
/// assert_eq!(err.to_string(), "Upload failed");
/// ```
#[derive(Debug, Error)]
pub enum PdfAuditError {
    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is unreadable or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// The chosen path cannot be used as a document.
    #[error("Cannot select {path}: {reason}")]
    Selection {
        /// Path as typed by the user.
        path: String,
        /// Why the selection was rejected.
        reason: String,
    },

    /// The request never produced an HTTP response (connect, TLS, timeout).
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    ///
    /// Every status is reported the same way; the code is kept for logging only.
    #[error("Upload failed")]
    UploadFailed {
        /// HTTP status code returned by the server.
        status: u16,
    },

    /// The response body was not the JSON document we expected.
    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// Communication with the upload worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),
}

/// A specialized `Result` type for audit client operations.
pub type Result<T> = std::result::Result<T, PdfAuditError>;
