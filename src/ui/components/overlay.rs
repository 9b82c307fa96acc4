//! Overlay list renderer.
//!
//! Draws the open list directly under the control box, one row per entry,
//! framed at the same width. Separators become rules, headings are bold and
//! the checked item gets a tick. Arrows in the closing frame show that the
//! window was cut off above or below.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{OverlayRow, OverlayRowKind, OverlayView};

/// Renders the visible overlay rows starting at `row`, then the closing frame.
///
/// Returns the next free row.
pub fn render_overlay(row: usize, overlay: &OverlayView, theme: &Theme, width: usize) -> usize {
    let width = width.max(8);
    let mut current_row = row;

    for entry in &overlay.rows {
        position_cursor(current_row, 1);
        render_row(entry, theme, width);
        current_row += 1;
    }

    let marker = match (overlay.more_above, overlay.more_below) {
        (true, true) => "▲▼",
        (true, false) => "▲─",
        (false, true) => "─▼",
        (false, false) => "──",
    };

    position_cursor(current_row, 1);
    print!("{}", Theme::fg(&theme.colors.border));
    print!("╰{marker}{}╯", "─".repeat(width - 4));
    print!("{}", Theme::reset());

    current_row + 1
}

fn render_row(entry: &OverlayRow, theme: &Theme, width: usize) {
    let frame = Theme::fg(&theme.colors.border);
    let inner = width - 4;

    match &entry.kind {
        OverlayRowKind::Separator => {
            print!("{frame}├{}┤{}", "─".repeat(width - 2), Theme::reset());
        }
        OverlayRowKind::Heading(text) => {
            let label = truncate(text, inner);
            print!("{frame}│ {}", Theme::reset());
            print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.heading_fg));
            print!("{label:<inner$}{}", Theme::reset());
            print!("{frame} │{}", Theme::reset());
        }
        OverlayRowKind::Item {
            label,
            enabled,
            checked,
        } => {
            let label = truncate(label, inner - 2);
            print!("{frame}│ {}", Theme::reset());

            let tick = if *checked { "✓ " } else { "  " };
            if entry.is_highlighted {
                print!(
                    "{}{}{tick}",
                    Theme::fg(&theme.colors.highlight_fg),
                    Theme::bg(&theme.colors.highlight_bg)
                );
            } else if !enabled {
                print!("{}{}{tick}", Theme::dim(), Theme::fg(&theme.colors.disabled_fg));
            } else {
                print!("{}{tick}{}", Theme::fg(&theme.colors.checked_fg), Theme::reset());
            }

            let label_width = inner - 2;
            print!("{label:<label_width$}{}", Theme::reset());
            print!("{frame} │{}", Theme::reset());
        }
    }
}
