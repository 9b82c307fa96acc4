//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: title bar
//! - [`control`]: the closed control box
//! - [`overlay`]: the open list under the box
//! - [`footer`]: change notice and keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Control box - 3 lines]
//! [Overlay rows + frame, when open]
//! [Blank padding to fill screen]
//! [Notice]
//! [Border]
//! [Footer]
//! ```

mod control;
mod footer;
mod header;
mod overlay;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use control::render_control;
use footer::{render_footer, render_notice};
use header::render_header;
use overlay::render_overlay;

fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the whole pane.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_control(current_row, &vm.control, theme, cols);
    if let Some(overlay) = &vm.overlay {
        let _current_row = render_overlay(current_row, overlay, theme, vm.control.width);
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);
    let notice_row = border_row.saturating_sub(1);

    render_notice(notice_row, &vm.footer, theme, cols);
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
