//! Capability interfaces the control consumes from its host.
//!
//! The control never draws anything itself. It talks to three collaborators:
//!
//! - [`DisplaySurface`]: shows, and optionally edits, the current text
//! - [`OverlayProvider`]: presents the modal list and reports the choice
//! - [`StyleProvider`]: builds display surfaces and supplies colours
//!
//! Hosts inject implementations when constructing a
//! [`ComboBox`](crate::widget::ComboBox).

use crate::domain::ItemId;
use crate::widget::popup::OverlayContent;

/// Horizontal placement of the displayed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justification {
    /// Flush left (default).
    #[default]
    Left,
    /// Centred in the available width.
    Centred,
    /// Flush right.
    Right,
}

impl Justification {
    /// Parses `left`, `centred`/`centered`/`center` or `right`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "left" => Some(Self::Left),
            "centred" | "centered" | "center" | "centre" => Some(Self::Centred),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

/// The text field that shows the current selection.
///
/// The surface owns the displayed string. The control writes it whenever the
/// selection changes and reads it back to decide what is selected, so a
/// surface must never change its text on its own: user edits go to a separate
/// edit buffer and only reach the control through
/// [`ComboBox::commit_edit`](crate::widget::ComboBox::commit_edit).
pub trait DisplaySurface {
    /// The displayed text.
    fn text(&self) -> &str;

    /// Replaces the displayed text without notifying anyone.
    fn set_text(&mut self, text: &str);

    /// Makes the text user-editable or read-only.
    fn set_editable(&mut self, editable: bool);

    /// Whether the text is user-editable.
    fn is_editable(&self) -> bool;

    /// Whether an edit session is currently open.
    fn is_being_edited(&self) -> bool;

    /// Opens an edit session seeded with the displayed text.
    fn show_editor(&mut self);

    /// The in-progress edit text, if an edit session is open.
    fn editor_text(&self) -> Option<&str>;

    /// Appends a character to the edit buffer.
    fn insert_char(&mut self, c: char);

    /// Removes the last character of the edit buffer.
    fn delete_backward(&mut self);

    /// Closes the edit session, returning the edited text if `commit` is set.
    fn finish_edit(&mut self, commit: bool) -> Option<String>;

    /// Current justification.
    fn justification(&self) -> Justification;

    /// Sets the justification.
    fn set_justification(&mut self, justification: Justification);

    /// Tooltip text, empty if none.
    fn tooltip(&self) -> &str;

    /// Sets the tooltip text.
    fn set_tooltip(&mut self, tooltip: &str);

    /// Sets the text colour as a hex string.
    fn set_text_colour(&mut self, colour: &str);

    /// The text colour as a hex string.
    fn text_colour(&self) -> &str;
}

/// Callback invoked exactly once when an overlay closes.
///
/// Receives the chosen id, or [`NO_SELECTION`](crate::domain::NO_SELECTION)
/// when the overlay was dismissed.
pub type OverlayCallback = Box<dyn FnOnce(ItemId)>;

/// Presents the modal list of entries.
///
/// `show` must not block. The provider keeps the callback and invokes it when
/// the user chooses or dismisses, possibly many turns later.
pub trait OverlayProvider {
    /// Opens the overlay with `content`.
    fn show(&self, content: OverlayContent, on_complete: OverlayCallback);

    /// Closes every open overlay, completing each with no selection.
    fn dismiss_all(&self);
}

/// Source of display surfaces and drawing parameters.
pub trait StyleProvider {
    /// Name used in logs.
    fn style_name(&self) -> &str;

    /// Builds a fresh display surface.
    fn create_display_surface(&self) -> Box<dyn DisplaySurface>;

    /// Default text colour for the control, as a hex string.
    fn text_colour(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn justification_names() {
        assert_eq!(Justification::from_name("Centered"), Some(Justification::Centred));
        assert_eq!(Justification::from_name(" right "), Some(Justification::Right));
        assert_eq!(Justification::from_name("top"), None);
    }
}
