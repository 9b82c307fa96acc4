//! Footer component renderer.
//!
//! Two lines: the last change notice above the border, keybinding hints
//! below it.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the change notice at `row`, or clears the line when there is none.
///
/// Returns the next free row.
pub fn render_notice(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    let notice = footer
        .notice
        .as_deref()
        .map(|n| truncate(&format!(" {n}"), cols))
        .unwrap_or_default();

    print!("{}", Theme::fg(&theme.colors.notice_fg));
    print!("{notice}");
    print!("{}", " ".repeat(cols.saturating_sub(notice.chars().count())));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the keybinding hints centred at `row`, truncated to fit.
///
/// Returns the next free row.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = truncate(&footer.keybindings, cols);

    let text_len = help_text.chars().count();
    let padding = (cols.saturating_sub(text_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{help_text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
    row + 1
}
