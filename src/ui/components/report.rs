//! Report results: banner, page-1 field cards and page-2 row cards.

use crate::ui::helpers::{center, gap, truncate, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayValue, FieldCard, MiniField, PageTwoView, ReportView, RowCard, StatusBanner, Tone};

const CARD_BAR: &str = "▌";

/// Accent color for a tone.
pub(super) fn tone_fg(theme: &Theme, tone: Tone) -> &str {
    match tone {
        Tone::Pass => theme.colors.pass_fg.as_str(),
        Tone::Fail => theme.colors.fail_fg.as_str(),
    }
}

/// Paints the overall status banner across the frame.
pub(super) fn render_banner(frame: &mut Frame, banner: &StatusBanner, theme: &Theme) {
    let bg = match banner.tone {
        Tone::Pass => &theme.colors.pass_bg,
        Tone::Fail => &theme.colors.fail_bg,
    };
    let text = center(&format!("Overall Status: {}", banner.text), frame.width().saturating_sub(4));
    let line = frame.on_bg(&theme.colors.banner_fg, bg, &text);
    frame.push(format!("  {line}"));
}

/// Paints a section heading such as `Page 1 · Header Fields`.
pub(super) fn render_section(frame: &mut Frame, title: &str, theme: &Theme) {
    let line = frame.bold_fg(&theme.colors.header_fg, title);
    frame.push(format!("  {line}"));
}

/// Paints the full report.
pub fn render_report(frame: &mut Frame, report: &ReportView, theme: &Theme) {
    let heading = frame.dim_fg(&theme.colors.text_dim, &format!("Results for {}", report.document));
    frame.push(format!("  {heading}"));
    render_banner(frame, &report.banner, theme);
    frame.blank();

    render_section(frame, "Page 1 · Header Fields", theme);
    for card in &report.page_one {
        render_field_card(frame, card, theme);
    }
    frame.blank();

    render_section(frame, "Page 2 · Table Rows", theme);
    match &report.page_two {
        PageTwoView::NoData { message } => {
            let line = frame.dim_fg(&theme.colors.placeholder_fg, message);
            frame.push(format!("  {line}"));
        }
        PageTwoView::Rows(rows) => {
            for row in rows {
                render_row_card(frame, row, theme);
            }
        }
    }
}

fn paint_value(frame: &Frame, value: &DisplayValue, color: &str, theme: &Theme) -> String {
    if value.is_placeholder {
        frame.dim_fg(&theme.colors.placeholder_fg, &value.text)
    } else {
        frame.fg(color, &value.text)
    }
}

/// ```text
///   ▌ Company Name                                  VALID
///   ▌   Acme
///   ▌   Missing
/// ```
fn render_field_card(frame: &mut Frame, card: &FieldCard, theme: &Theme) {
    let accent = tone_fg(theme, card.tone);
    let bar = frame.fg(accent, CARD_BAR);
    let inner = frame.width().saturating_sub(4);

    let spacing = " ".repeat(gap(&card.label, &card.verdict, inner.saturating_sub(1)));
    let label = frame.fg(&theme.colors.text_dim, &card.label);
    let verdict = frame.bold_fg(accent, &card.verdict);
    frame.push(format!("  {bar} {label}{spacing}{verdict}"));

    let shown = DisplayValue {
        text: truncate(&card.value.text, inner.saturating_sub(3)),
        is_placeholder: card.value.is_placeholder,
    };
    let value = paint_value(frame, &shown, &theme.colors.text_normal, theme);
    frame.push(format!("  {bar}   {value}"));

    if let Some(error) = &card.error {
        let error = frame.fg(&theme.colors.fail_fg, &truncate(error, inner.saturating_sub(3)));
        frame.push(format!("  {bar}   {error}"));
    }
}

/// ```text
///   ▌ Row 1                                        [PASS]
///   ▌   Name: Jane Roe
///   ▌   Criteria: Empty
///   ▌     Missing
///   ▌   Type: Lease
/// ```
fn render_row_card(frame: &mut Frame, row: &RowCard, theme: &Theme) {
    let accent = tone_fg(theme, row.badge.tone);
    let bar = frame.fg(accent, CARD_BAR);
    let inner = frame.width().saturating_sub(4);

    let badge_text = format!("[{}]", row.badge.text);
    let spacing = " ".repeat(gap(&row.title, &badge_text, inner.saturating_sub(1)));
    let title = frame.bold_fg(&theme.colors.text_normal, &row.title);
    let badge = frame.bold_fg(accent, &badge_text);
    frame.push(format!("  {bar} {title}{spacing}{badge}"));

    for field in &row.fields {
        render_mini_field(frame, &bar, field, inner, theme);
    }
}

fn render_mini_field(frame: &mut Frame, bar: &str, field: &MiniField, inner: usize, theme: &Theme) {
    let label = frame.fg(&theme.colors.text_dim, &format!("{}:", field.label));
    let shown = DisplayValue {
        text: truncate(&field.value.text, inner.saturating_sub(field.label.len() + 5)),
        is_placeholder: field.value.is_placeholder,
    };
    let value = paint_value(frame, &shown, tone_fg(theme, field.tone), theme);
    frame.push(format!("  {bar}   {label} {value}"));

    if let Some(error) = &field.error {
        let error = frame.fg(&theme.colors.fail_fg, &truncate(error, inner.saturating_sub(5)));
        frame.push(format!("  {bar}     {error}"));
    }
}
