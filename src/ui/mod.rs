//! User interface rendering layer with component-based architecture.
//!
//! This module turns application state into ANSI-styled (or plain) text through
//! composable rendering components.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → Frame → String
//!                  │
//!                  └── results::present_report / present_summary
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`results`]: Pure presentation of decoded reports and summaries
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Frame, color mode and width utilities
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod results;
pub mod theme;
pub mod viewmodel;

pub use helpers::{ColorMode, Frame};
pub use renderer::{render, render_results, CLEAR_SCREEN};
pub use theme::Theme;
pub use viewmodel::{
    AlertInfo, DisplayValue, FieldCard, FooterInfo, HeaderInfo, MiniField, PageTwoView, ReportView, ResultsView,
    RowCard, StatusBanner, SubmitControl, SummaryView, Tone, UIViewModel,
};
