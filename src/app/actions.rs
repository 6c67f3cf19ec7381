//! Actions representing side effects to be executed by the runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! runtime in `main.rs` executes them in order; the handler itself never touches
//! the network, the terminal or the worker thread.
//!
//! # Example
//!
//! ```rust
//! use pdf_audit::app::Action;
//!
//! let actions = vec![Action::Quit];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Posts a request to the upload worker thread.
    PostToWorker(WorkerMessage),

    /// Stops the event loop.
    Quit,
}
