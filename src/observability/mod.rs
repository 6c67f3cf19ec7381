//! OpenTelemetry-based observability with file-based trace export.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! # Features
//!
//! - **File-Based Export**: Traces written to `<data_dir>/pdf-audit/pdf-audit-otlp.json`
//! - **Rotation**: Files rotate at 10MB into `.1`, `.2`, `.3` backups
//! - **OTLP Format**: Standard OpenTelemetry Protocol JSON, one batch per line
//! - **Cross-thread traces**: Worker spans join the submitting span's trace
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` in the config file or `--trace-level`
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - `init`: Tracing initialization and subscriber setup
//! - `tracer`: OpenTelemetry tracer provider with file export
//! - `span_formatter`: OTLP JSON span serialization
//! - `file_writer`: Rotating file writer with numbered backups

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, SERVICE_NAME, TRACE_FILE_NAME};
