//! Issue summary results.

use super::report::{render_banner, render_section, tone_fg};
use crate::ui::helpers::{truncate, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SummaryView, Tone};

/// Paints the banner, the proceed line and one line per issue.
pub fn render_summary(frame: &mut Frame, summary: &SummaryView, theme: &Theme) {
    let heading = frame.dim_fg(&theme.colors.text_dim, &format!("Results for {}", summary.document));
    frame.push(format!("  {heading}"));
    render_banner(frame, &summary.banner, theme);

    let proceed = frame.fg(&theme.colors.text_normal, &summary.can_proceed);
    frame.push(format!("  {proceed}"));
    frame.blank();

    render_section(frame, "Issues", theme);
    let width = frame.width().saturating_sub(6);
    for issue in &summary.issues {
        let line = if summary.no_issues {
            frame.dim_fg(&theme.colors.placeholder_fg, issue)
        } else {
            frame.fg(tone_fg(theme, Tone::Fail), &format!("• {}", truncate(issue, width)))
        };
        frame.push(format!("  {line}"));
    }
}
