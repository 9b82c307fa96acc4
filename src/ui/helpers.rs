//! Shared rendering utilities.
//!
//! Cursor positioning plus width-aware text fitting. Widths are counted in
//! `char`s, which is exact for the labels this plugin draws and never splits
//! a UTF-8 sequence.
//!
//! # Example
//!
//! ```rust
//! use dropdown::ui::helpers::justify;
//! use dropdown::widget::Justification;
//!
//! assert_eq!(justify("ab", 6, Justification::Centred), "  ab  ");
//! assert_eq!(justify("abcdefgh", 6, Justification::Left), "abc...");
//! ```

use crate::widget::Justification;

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Shortens `text` to at most `width` chars, ending in `...` when cut.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }

    let mut out: String = text.chars().take(width - 3).collect();
    out.push_str("...");
    out
}

/// Fits `text` into exactly `width` chars using `justification`.
#[must_use]
pub fn justify(text: &str, width: usize, justification: Justification) -> String {
    let text = truncate(text, width);
    let gap = width - text.chars().count();

    let left = match justification {
        Justification::Left => 0,
        Justification::Centred => gap / 2,
        Justification::Right => gap,
    };

    format!("{}{text}{}", " ".repeat(left), " ".repeat(gap - left))
}
