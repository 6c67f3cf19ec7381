//! Blocking `reqwest` transport.

use super::{Transport, Upload, FILE_FIELD};
use crate::domain::error::{PdfAuditError, Result};
use reqwest::blocking::multipart::{Form, Part};
use std::time::Duration;

/// HTTP client for the validation endpoint.
///
/// Runs on the upload worker thread, so blocking calls never stall the event loop.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    timeout: Option<Duration>,
}

impl HttpTransport {
    /// Creates a transport. `None` disables the request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`PdfAuditError::Transport`] if the TLS backend cannot be initialized.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PdfAuditError::Transport(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, timeout })
    }

    fn describe_send_error(&self, url: &str, error: &reqwest::Error) -> String {
        if error.is_connect() {
            format!("Failed to connect to {url}")
        } else if error.is_timeout() {
            let secs = self.timeout.map_or(0, |t| t.as_secs());
            format!("Request timed out after {secs}s")
        } else {
            error.to_string()
        }
    }
}

impl Transport for HttpTransport {
    fn post_document(&self, upload: Upload) -> Result<Vec<u8>> {
        let _span = tracing::debug_span!(
            "http_post_document",
            url = %upload.url,
            file_name = %upload.file_name,
            size = upload.bytes.len()
        )
        .entered();

        let part = Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(&upload.mime_type)
            .map_err(|e| PdfAuditError::Transport(e.to_string()))?;
        let form = Form::new().part(FILE_FIELD, part);

        let response = self
            .client
            .post(&upload.url)
            .multipart(form)
            .send()
            .map_err(|e| PdfAuditError::Transport(self.describe_send_error(&upload.url, &e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            tracing::debug!(status = status.as_u16(), body = %body, "server rejected upload");
            return Err(PdfAuditError::UploadFailed { status: status.as_u16() });
        }

        let body = response
            .bytes()
            .map_err(|e| PdfAuditError::Transport(e.to_string()))?;

        tracing::debug!(status = status.as_u16(), body_len = body.len(), "upload accepted");
        Ok(body.to_vec())
    }
}
