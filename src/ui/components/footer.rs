//! Footer component renderer.
//!
//! This module renders the footer help bar with centered command hints.

use crate::ui::helpers::{center, truncate, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Paints the command hints centered and dimmed.
///
/// Text wider than the frame is truncated so narrow terminals keep one line.
pub fn render_footer(frame: &mut Frame, footer: &FooterInfo, theme: &Theme) {
    let width = frame.width();
    let text = center(&truncate(&footer.keybindings, width), width);
    let line = frame.fg(&theme.colors.text_dim, text.trim_end());
    frame.push(line);
}
