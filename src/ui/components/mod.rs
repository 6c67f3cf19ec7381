//! Composable UI component renderers.
//!
//! Each component paints one part of the interface into a [`Frame`].
//!
//! # Components
//!
//! - [`header`]: Title bar, selected document and submit control
//! - [`alert`]: Blocking error box
//! - [`report`]: Status banner, page-1 field cards, page-2 row cards
//! - [`summary`]: Issue list for the summary endpoint
//! - [`footer`]: Command hints
//!
//! # Layout Modes
//!
//! - [`render_screen`]: Header + Submit + Alert + Results + Footer (interactive)
//! - [`render_results`]: Alert + Results only (one-shot output)

mod alert;
mod footer;
mod header;
mod report;
mod summary;

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ResultsView, UIViewModel};

use alert::render_alert;
use footer::render_footer;
use header::{render_header, render_submit};
use report::render_report;
use summary::render_summary;

/// Paints a horizontal separator line.
fn render_border(frame: &mut Frame, theme: &Theme) {
    let line = frame.fg(&theme.colors.border, &"─".repeat(frame.width()));
    frame.push(line);
}

/// Paints the interactive layout.
///
/// ```text
/// [Header]
/// [Selected document]
/// [Border]
/// [Submit control]
/// [Alert box, when pending]
/// [Results, when visible]
/// [Border]
/// [Footer]
/// ```
pub fn render_screen(frame: &mut Frame, vm: &UIViewModel, theme: &Theme) {
    render_header(frame, &vm.header, theme);
    render_border(frame, theme);
    render_submit(frame, &vm.submit, theme);
    frame.blank();

    if let Some(alert) = &vm.alert {
        render_alert(frame, alert, theme);
        frame.blank();
    }

    if let Some(results) = &vm.results {
        render_results_view(frame, results, theme);
        frame.blank();
    }

    render_border(frame, theme);
    render_footer(frame, &vm.footer, theme);
}

/// Paints only the alert and results areas.
pub fn render_results(frame: &mut Frame, vm: &UIViewModel, theme: &Theme) {
    if let Some(alert) = &vm.alert {
        render_alert(frame, alert, theme);
    }
    if let Some(results) = &vm.results {
        render_results_view(frame, results, theme);
    }
}

fn render_results_view(frame: &mut Frame, results: &ResultsView, theme: &Theme) {
    match results {
        ResultsView::Report(report) => render_report(frame, report, theme),
        ResultsView::Summary(summary) => render_summary(frame, summary, theme),
    }
}
