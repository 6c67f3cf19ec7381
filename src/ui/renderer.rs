//! Top-level rendering coordinator.
//!
//! Computes the view model from application state and delegates to the layout
//! functions in [`components`]. Rendering produces a `String`; writing it to
//! the terminal is left to the runtime.
//!
//! # Example
//!
//! ```rust
//! use pdf_audit::app::AppState;
//! use pdf_audit::ui::{render, ColorMode, Theme};
//! use pdf_audit::ValidationMode;
//!
//! let state = AppState::new("http://127.0.0.1:8000/api/audit/validate-pdf".into(), ValidationMode::Report, Theme::default());
//! let screen = render(&state, ColorMode::Plain, 80);
//! assert!(screen.contains("No file selected"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::{ColorMode, Frame};

/// Clears the terminal and homes the cursor.
pub const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[H";

/// Renders the full interactive screen.
#[must_use]
pub fn render(state: &AppState, mode: ColorMode, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel();
    let mut frame = Frame::new(mode, cols);
    components::render_screen(&mut frame, &viewmodel, &state.theme);
    frame.render()
}

/// Renders only the alert and results areas, for one-shot output.
#[must_use]
pub fn render_results(state: &AppState, mode: ColorMode, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel();
    let mut frame = Frame::new(mode, cols);
    components::render_results(&mut frame, &viewmodel, &state.theme);
    frame.render()
}
