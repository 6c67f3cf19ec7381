//! The document chosen by the user for validation.

use crate::domain::error::{PdfAuditError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A file selected for submission.
///
/// Only metadata is captured at selection time; the bytes are read by the upload
/// worker when the document is actually submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedDocument {
    /// Absolute or user-relative path to the file.
    pub path: PathBuf,
    /// File name sent as the multipart part's filename.
    pub file_name: String,
    /// Size at selection time.
    pub size_bytes: u64,
}

impl SelectedDocument {
    /// Selects the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PdfAuditError::Selection`] if the path does not exist, is not a
    /// regular file, or has no file name.
    ///
    /// ```no_run
    /// use pdf_audit::domain::SelectedDocument;
    ///
    /// let doc = SelectedDocument::from_path("statement.pdf")?;
    /// assert_eq!(doc.file_name, "statement.pdf");
    /// # Ok::<(), pdf_audit::PdfAuditError>(())
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let reject = |reason: String| PdfAuditError::Selection {
            path: path.display().to_string(),
            reason,
        };

        let metadata = std::fs::metadata(path).map_err(|e| reject(e.to_string()))?;
        if !metadata.is_file() {
            return Err(reject("not a regular file".to_string()));
        }

        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
            .ok_or_else(|| reject("file name is not valid UTF-8".to_string()))?;

        Ok(Self {
            path: path.to_path_buf(),
            file_name,
            size_bytes: metadata.len(),
        })
    }

    /// MIME type guessed from the file extension, `application/octet-stream` if unknown.
    #[must_use]
    pub fn mime_type(&self) -> String {
        mime_guess::from_path(&self.path)
            .first_or_octet_stream()
            .essence_str()
            .to_string()
    }

    /// Human-readable size, e.g. `12.3 KB`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn display_size(&self) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;

        match self.size_bytes {
            n if n >= MB => format!("{:.1} MB", n as f64 / MB as f64),
            n if n >= KB => format!("{:.1} KB", n as f64 / KB as f64),
            n => format!("{n} B"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn selects_regular_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("audit.pdf");
        let mut file = std::fs::File::create(&path).expect("create");
        file.write_all(&[0_u8; 2048]).expect("write");

        let doc = SelectedDocument::from_path(&path).expect("select");
        assert_eq!(doc.file_name, "audit.pdf");
        assert_eq!(doc.size_bytes, 2048);
        assert_eq!(doc.display_size(), "2.0 KB");
        assert_eq!(doc.mime_type(), "application/pdf");
    }

    #[test]
    fn rejects_missing_path_and_directories() {
        let dir = tempfile::tempdir().expect("tempdir");

        let missing = SelectedDocument::from_path(dir.path().join("nope.pdf"));
        assert!(matches!(missing, Err(PdfAuditError::Selection { .. })));

        let directory = SelectedDocument::from_path(dir.path());
        match directory {
            Err(PdfAuditError::Selection { reason, .. }) => assert_eq!(reason, "not a regular file"),
            other => panic!("expected selection error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_extension_falls_back_to_octet_stream() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("scan.zzunknown");
        std::fs::write(&path, b"x").expect("write");

        let doc = SelectedDocument::from_path(&path).expect("select");
        assert_eq!(doc.mime_type(), "application/octet-stream");
        assert_eq!(doc.display_size(), "1 B");
    }
}
