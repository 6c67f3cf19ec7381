//! Background worker thread for document submission.
//!
//! The worker reads the selected file, posts it through the configured
//! [`Transport`](crate::transport::Transport) and decodes the response body, so
//! the only long wait in the client happens off the event loop.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation, thread spawning and completion guarantee

pub mod handler;
pub mod messages;

pub use handler::{UploadWorker, WorkerHandle};
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
