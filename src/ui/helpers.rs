//! Shared rendering utilities.
//!
//! Components paint into a [`Frame`]: a list of finished lines plus the
//! [`ColorMode`] that decides whether styling escapes are emitted. Widths are
//! counted in `char`s so multi-byte file names do not break alignment.
//!
//! # Example
//!
//! ```rust
//! use pdf_audit::ui::helpers::{ColorMode, Frame};
//!
//! let mut frame = Frame::new(ColorMode::Plain, 40);
//! let text = frame.fg("#a6e3a1", "VALID");
//! frame.push(text);
//! assert_eq!(frame.render(), "VALID\n");
//! ```

use crate::ui::theme::Theme;

/// Whether painted output carries ANSI escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// 24-bit color escapes from the theme.
    Ansi,
    /// Bare text.
    Plain,
}

/// Lines of painted output.
#[derive(Debug, Clone)]
pub struct Frame {
    mode: ColorMode,
    width: usize,
    lines: Vec<String>,
}

impl Frame {
    /// Creates an empty frame `width` columns wide.
    #[must_use]
    pub const fn new(mode: ColorMode, width: usize) -> Self {
        Self {
            mode,
            width,
            lines: Vec::new(),
        }
    }

    /// Layout width in columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Appends a finished line.
    pub fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    /// Appends an empty line.
    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Painted lines so far.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Joins the lines, each terminated by a newline.
    #[must_use]
    pub fn render(&self) -> String {
        self.lines.iter().fold(String::new(), |mut out, line| {
            out.push_str(line);
            out.push('\n');
            out
        })
    }

    fn wrap(&self, prefix: &str, text: &str) -> String {
        match self.mode {
            ColorMode::Ansi => format!("{prefix}{text}{}", Theme::reset()),
            ColorMode::Plain => text.to_string(),
        }
    }

    /// `text` in foreground color `hex`.
    #[must_use]
    pub fn fg(&self, hex: &str, text: &str) -> String {
        self.wrap(&Theme::fg(hex), text)
    }

    /// Bold `text` in foreground color `hex`.
    #[must_use]
    pub fn bold_fg(&self, hex: &str, text: &str) -> String {
        self.wrap(&format!("{}{}", Theme::bold(), Theme::fg(hex)), text)
    }

    /// Dimmed `text` in foreground color `hex`.
    #[must_use]
    pub fn dim_fg(&self, hex: &str, text: &str) -> String {
        self.wrap(&format!("{}{}", Theme::dim(), Theme::fg(hex)), text)
    }

    /// Bold `text` in color `fg` on background `bg`.
    #[must_use]
    pub fn on_bg(&self, fg: &str, bg: &str, text: &str) -> String {
        self.wrap(&format!("{}{}{}", Theme::bold(), Theme::fg(fg), Theme::bg(bg)), text)
    }
}

/// Display width of `text` in columns.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Truncates `text` to `max` columns, ending with `...` when cut.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text_width(text) <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let kept: String = text.chars().take(max - 3).collect();
    format!("{kept}...")
}

/// Centers `text` in `width` columns, left padding slightly larger on odd splits.
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    let len = text_width(text);
    let padding = width.saturating_sub(len) / 2;
    format!(
        "{}{text}{}",
        " ".repeat(padding),
        " ".repeat(width.saturating_sub(padding + len))
    )
}

/// Spaces needed after `left` so that `right` ends at column `width`.
#[must_use]
pub fn gap(left: &str, right: &str, width: usize) -> usize {
    width.saturating_sub(text_width(left) + text_width(right)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_frame_has_no_escapes() {
        let frame = Frame::new(ColorMode::Plain, 20);
        assert_eq!(frame.bold_fg("#ffffff", "x"), "x");
        assert_eq!(frame.on_bg("#000000", "#ffffff", "y"), "y");
    }

    #[test]
    fn ansi_frame_wraps_and_resets() {
        let frame = Frame::new(ColorMode::Ansi, 20);
        let painted = frame.fg("#a6e3a1", "ok");
        assert!(painted.starts_with("\u{1b}[38;2;166;227;161m"));
        assert!(painted.ends_with("ok\u{1b}[0m"));
    }

    #[test]
    fn truncate_counts_chars() {
        assert_eq!(truncate("résumé.pdf", 20), "résumé.pdf");
        assert_eq!(truncate("résumé-final-v2.pdf", 10), "résumé-...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn center_pads_both_sides() {
        assert_eq!(center("ab", 7), "  ab   ");
        assert_eq!(center("toolong", 3), "toolong");
    }
}
