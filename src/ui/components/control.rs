//! Control box renderer.
//!
//! ```text
//! ╭──────────────────────────╮
//! │ Banana                 ▾ │  tooltip
//! ╰──────────────────────────╯
//! ```

use crate::ui::helpers::{justify, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ControlView;

/// Columns taken by the frame, padding and arrow on the text row.
const FRAME_COLS: usize = 6;

/// Renders the three-row control box starting at `row`.
///
/// Returns the next free row.
pub fn render_control(row: usize, control: &ControlView, theme: &Theme, cols: usize) -> usize {
    let width = control.width.max(FRAME_COLS + 1);
    let border = Theme::fg(&theme.colors.control_border);
    let rule = "─".repeat(width - 2);

    position_cursor(row, 1);
    print!("{border}╭{rule}╮{}", Theme::reset());

    position_cursor(row + 1, 1);
    print!("{border}│ {}", Theme::reset());

    let mut text = control.text.clone();
    if control.is_editing {
        text.push('▏');
    }
    let text = justify(&text, width - FRAME_COLS, control.justification);

    if control.is_placeholder {
        print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.placeholder_fg));
    } else {
        print!("{}", Theme::fg(&control.text_colour));
    }
    print!("{text}{}", Theme::reset());

    let arrow = if control.popup_open { '▴' } else { '▾' };
    print!(" {}{arrow}{} ", Theme::fg(&theme.colors.arrow_fg), Theme::reset());
    print!("{border}│{}", Theme::reset());

    let tooltip_room = cols.saturating_sub(width + 2);
    if !control.tooltip.is_empty() && tooltip_room > 0 {
        print!(
            "  {}{}{}",
            Theme::fg(&theme.colors.text_dim),
            truncate(&control.tooltip, tooltip_room),
            Theme::reset()
        );
    }

    position_cursor(row + 2, 1);
    print!("{border}╰{rule}╯{}", Theme::reset());

    row + 3
}
