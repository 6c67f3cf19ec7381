//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the runtime (`main.rs`) and the domain, worker and
//! UI layers. It implements the event-driven flow behind the file selector and
//! the submission controller.
//!
//! # Architecture
//!
//! ```text
//! stdin commands → Events → Event Handler → State Mutations → Actions → Side Effects
//!                               ↑                                  ↓
//!                               └──────── Worker Responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Submission and results-visibility state machine types
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{ResultsVisibility, SubmissionStatus};
pub use state::{AppState, ValidationOutcome};
