//! pdf-audit: a terminal client for a document-auditing service.
//!
//! The user picks a file, the client POSTs it as multipart form data to the
//! validation endpoint, and the JSON verdict is rendered as:
//! - an overall status banner (pass styling only for exactly `PASS`)
//! - one card per expected page-1 header field
//! - one mini-card per page-2 table row, or a no-data placeholder
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI runtime (main.rs)                              │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - File selection, submission status                │
//! │  - Event handling, action dispatching               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Worker Layer  │   │ Transport     │
//! │ (ui/)         │   │ (worker/)     │   │ (transport/)  │
//! │ - Presenter   │   │ - Upload      │   │ - Multipart   │
//! │ - Components  │   │   thread      │   │   POST        │
//! │ - Theming     │   │ - Decoding    │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Report, summary, document (domain/)              │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing to a rotating OTLP file    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! Read from `<config_dir>/pdf-audit/config.toml` (or `--config PATH`), then
//! overridden by command-line flags:
//!
//! ```toml
//! server_url = "http://127.0.0.1:8000"
//! endpoint_path = "/api/audit/validate-pdf"
//! mode = "report"
//! theme = "catppuccin-mocha"
//! trace_level = "info"
//! request_timeout_secs = 60
//! ```
//!
//! # Example
//!
//! ```rust
//! use pdf_audit::{handle_event, initialize, Config, Event};
//!
//! let config = Config::from_toml_str(r#"server_url = "http://audit.internal:8000""#)?;
//! let mut state = initialize(&config);
//! assert_eq!(state.endpoint_url, "http://audit.internal:8000/api/audit/validate-pdf");
//!
//! // Without a selected file, submitting does nothing.
//! let (render, actions) = handle_event(&mut state, &Event::Submit)?;
//! assert!(!render && actions.is_empty());
//! # Ok::<(), pdf_audit::PdfAuditError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod transport;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, ResultsVisibility, SubmissionStatus};
pub use domain::{AuditReport, AuditStatus, FieldResult, PdfAuditError, Result, SelectedDocument};
pub use ui::Theme;

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default address of the audit service.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

/// Endpoint returning the full per-field report.
pub const REPORT_ENDPOINT: &str = "/api/audit/validate-pdf";

/// Endpoint returning the flattened issue summary.
pub const SUMMARY_ENDPOINT: &str = "/api/validate-document";

/// Which response shape the endpoint returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Full report: banner, page-1 cards, page-2 rows.
    #[default]
    Report,
    /// Issue list with a can-proceed flag.
    Summary,
}

impl ValidationMode {
    /// Endpoint path used when the config does not set one.
    #[must_use]
    pub const fn default_endpoint(self) -> &'static str {
        match self {
            Self::Report => REPORT_ENDPOINT,
            Self::Summary => SUMMARY_ENDPOINT,
        }
    }
}

/// Client configuration.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Scheme, host and port of the audit service. Default: `http://127.0.0.1:8000`
    pub server_url: String,

    /// Endpoint path. Defaults to the mode's endpoint.
    pub endpoint_path: Option<String>,

    /// Which response shape to expect. Default: `report`
    pub mode: ValidationMode,

    /// Built-in theme name (`catppuccin-mocha`, `catppuccin-latte`).
    /// Ignored if `theme_file` is set.
    pub theme: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme`.
    pub theme_file: Option<String>,

    /// Tracing filter, e.g. `debug` or `pdf_audit=trace`. Default: `info`
    pub trace_level: Option<String>,

    /// Whole-request timeout. Default: none (wait for the server).
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            endpoint_path: None,
            mode: ValidationMode::Report,
            theme: None,
            theme_file: None,
            trace_level: None,
            request_timeout_secs: None,
        }
    }
}

impl Config {
    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`PdfAuditError::Config`] on syntax errors, unknown keys or
    /// mistyped values.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| PdfAuditError::Config(e.to_string()))
    }

    /// Loads a config file.
    ///
    /// # Errors
    ///
    /// Returns [`PdfAuditError::Config`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| PdfAuditError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml_str(&contents)
    }

    /// Loads `path` if given, else the default config file if it exists, else defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PdfAuditError::Config`] if an existing file cannot be read or parsed.
    /// An explicit `path` that does not exist is an error; a missing default file is not.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match infrastructure::default_config_path() {
            Some(default) if default.is_file() => Self::load(&default),
            _ => Ok(Self::default()),
        }
    }

    /// Fully-qualified URL submissions are posted to.
    #[must_use]
    pub fn endpoint_url(&self) -> String {
        let path = self
            .endpoint_path
            .as_deref()
            .unwrap_or_else(|| self.mode.default_endpoint());
        transport::endpoint_url(&self.server_url, path)
    }

    /// Request timeout, `None` meaning no limit.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.filter(|secs| *secs > 0).map(Duration::from_secs)
    }

    /// Resolves the configured theme, falling back to the default.
    ///
    /// A theme that cannot be loaded is logged and replaced rather than
    /// aborting the run.
    #[must_use]
    pub fn resolve_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Builds the initial application state from configuration.
///
/// Does not install tracing; call [`observability::init_tracing`] first if
/// spans should be exported.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    let endpoint_url = config.endpoint_url();
    tracing::debug!(endpoint = %endpoint_url, mode = ?config.mode, "initializing pdf-audit");

    AppState::new(endpoint_url, config.mode, config.resolve_theme())
}
