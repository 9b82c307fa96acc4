//! Input mode of the host application.
//!
//! The mode is derived, never stored: it is read off the control and the
//! overlay each time an event arrives, so it can never drift from what is on
//! screen.
//!
//! - **Normal**: keys step through items, Enter opens the list
//! - **Editing**: keys go to the control's text editor
//! - **Popup**: keys move the overlay highlight

/// How key presses are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// The closed control has focus.
    ///
    /// Up/Down/Left/Right change the selection, Enter opens the list,
    /// `e` opens the editor on editable controls, `t` cycles themes and
    /// `q` or Esc closes the pane.
    #[default]
    Normal,

    /// The text editor is open.
    ///
    /// Printable keys are typed, Enter commits through `set_text` and Esc
    /// cancels.
    Editing,

    /// The overlay list is showing.
    ///
    /// Up/Down move the highlight, Enter chooses and Esc dismisses.
    Popup,
}
