//! Header and submit control.
//!
//! The header shows the centered app title and the selected document; the
//! submit control sits right below it.

use crate::ui::helpers::{center, truncate, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{HeaderInfo, SubmitControl};

/// Paints the title bar and the selected-document line.
///
/// # Layout
///
/// ```text
/// [left padding] TITLE [right padding]
///   File: audit.pdf (12.3 KB)
/// ```
pub fn render_header(frame: &mut Frame, header: &HeaderInfo, theme: &Theme) {
    let width = frame.width();
    let title = center(&header.title, width);
    let line = match &theme.colors.header_bg {
        Some(bg) => frame.on_bg(&theme.colors.header_fg, bg, &title),
        None => frame.bold_fg(&theme.colors.header_fg, &title),
    };
    frame.push(line);

    let line = match &header.document {
        Some(document) => {
            let label = frame.dim_fg(&theme.colors.text_dim, "File: ");
            let name = frame.fg(&theme.colors.text_normal, &truncate(document, width.saturating_sub(8)));
            format!("  {label}{name}")
        }
        None => format!("  {}", frame.dim_fg(&theme.colors.text_dim, "No file selected")),
    };
    frame.push(line);
}

/// Paints the submit control as a button-like label.
///
/// Disabled controls (no file, or a request in flight) are dimmed.
pub fn render_submit(frame: &mut Frame, submit: &SubmitControl, theme: &Theme) {
    let label = format!("[ {} ]", submit.label);
    let painted = if submit.enabled {
        frame.on_bg(&theme.colors.button_fg, &theme.colors.button_bg, &label)
    } else {
        frame.dim_fg(&theme.colors.button_disabled_fg, &label)
    };
    frame.push(format!("  {painted}"));
}
