//! HTTP transport abstraction.
//!
//! This module defines the [`Transport`] trait the upload worker submits documents
//! through. The production implementation is [`HttpTransport`]; tests substitute
//! scripted transports without touching the network.
//!
//! The contract is deliberately narrow: one multipart POST, one response body.
//! Status handling lives in the implementation so that every non-2xx answer is
//! reported uniformly as [`PdfAuditError::UploadFailed`](crate::PdfAuditError::UploadFailed).

pub mod http;

pub use http::HttpTransport;

use crate::domain::error::Result;

/// Multipart form field name the validation endpoint reads the document from.
pub const FILE_FIELD: &str = "file";

/// A document ready to be posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    /// Fully-qualified endpoint URL.
    pub url: String,
    /// File name attached to the multipart part.
    pub file_name: String,
    /// Content type of the multipart part.
    pub mime_type: String,
    /// Document bytes.
    pub bytes: Vec<u8>,
}

/// Abstraction over the request/response round trip.
///
/// # Implementations
///
/// - [`HttpTransport`]: blocking `reqwest` client (default)
pub trait Transport: Send {
    /// Posts `upload` as multipart form data under [`FILE_FIELD`].
    ///
    /// Returns the raw body of a 2xx response.
    ///
    /// # Errors
    ///
    /// - [`PdfAuditError::Transport`](crate::PdfAuditError::Transport) if no response arrived
    /// - [`PdfAuditError::UploadFailed`](crate::PdfAuditError::UploadFailed) for any non-2xx status
    fn post_document(&self, upload: Upload) -> Result<Vec<u8>>;
}

/// Joins a server base URL and an endpoint path with exactly one slash.
///
/// ```
/// use pdf_audit::transport::endpoint_url;
///
/// assert_eq!(
///     endpoint_url("http://127.0.0.1:8000/", "api/audit/validate-pdf"),
///     "http://127.0.0.1:8000/api/audit/validate-pdf"
/// );
/// ```
#[must_use]
pub fn endpoint_url(server_url: &str, endpoint_path: &str) -> String {
    format!(
        "{}/{}",
        server_url.trim_end_matches('/'),
        endpoint_path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_without_doubling_slashes() {
        assert_eq!(endpoint_url("http://h", "/x"), "http://h/x");
        assert_eq!(endpoint_url("http://h//", "//x"), "http://h/x");
        assert_eq!(endpoint_url("http://h/base", "x/y"), "http://h/base/x/y");
    }
}
