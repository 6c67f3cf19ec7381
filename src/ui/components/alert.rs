//! Blocking alert box.

use crate::ui::helpers::{text_width, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::AlertInfo;

/// Paints the alert message in a frame.
///
/// ```text
///   ┌────────────────────────┐
///   │ Error: Upload failed   │
///   └────────────────────────┘
/// ```
pub fn render_alert(frame: &mut Frame, alert: &AlertInfo, theme: &Theme) {
    let inner = frame.width().saturating_sub(6).max(text_width(&alert.message) + 2);
    let rule = "─".repeat(inner);
    let padding = " ".repeat(inner.saturating_sub(text_width(&alert.message) + 1));

    let top = frame.fg(&theme.colors.alert_border, &format!("┌{rule}┐"));
    let side = frame.fg(&theme.colors.alert_border, "│");
    let message = frame.bold_fg(&theme.colors.alert_fg, &alert.message);
    let bottom = frame.fg(&theme.colors.alert_border, &format!("└{rule}┘"));

    frame.push(format!("  {top}"));
    frame.push(format!("  {side} {message}{padding}{side}"));
    frame.push(format!("  {bottom}"));
}
