//! Event handling and state transition logic.
//!
//! [`handle_event`] routes each [`Event`] according to the current
//! [`InputMode`](super::InputMode) and returns whether the pane needs a
//! repaint plus the [`Action`]s the plugin runtime should carry out.
//!
//! # Notification turns
//!
//! Change notifications posted by the control sit in the [`MessageQueue`]
//! until the host delivers `NotificationsDue`. Whenever the queue is
//! non-empty after an event, the handler asks for that wake-up with
//! [`Action::ScheduleNotifications`], once per outstanding batch.
//!
//! [`MessageQueue`]: crate::widget::MessageQueue
//!
//! # Example
//!
//! ```rust
//! use dropdown::app::{handle_event, Action, AppState, Event};
//! use dropdown::ui::Theme;
//!
//! let mut state = AppState::new("fruit", Theme::default());
//! state.combo.add_item("Apple", 1);
//!
//! let (render, actions) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(render);
//! assert_eq!(actions, vec![Action::ScheduleNotifications]);
//! # Ok::<(), dropdown::DropdownError>(())
//! ```

use crate::app::overlay::HighlightMove;
use crate::app::{Action, AppState, InputMode};
use crate::domain::error::Result;
use crate::widget::ComboKey;

/// Events delivered by the plugin runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Up arrow or `k`.
    KeyUp,
    /// Down arrow or `j`.
    KeyDown,
    /// Left arrow.
    KeyLeft,
    /// Right arrow.
    KeyRight,
    /// Opens the list, chooses the highlighted row, or commits an edit.
    Enter,
    /// Dismisses the list, cancels an edit, or closes the pane.
    Escape,
    /// A printable key.
    Char(char),
    /// Deletes the last edited character.
    Backspace,
    /// Hides the plugin pane.
    CloseFocus,
    /// Opens the text editor on an editable control.
    ShowEditor,
    /// Switches to the next built-in theme.
    CycleTheme,
    /// The wake-up requested by [`Action::ScheduleNotifications`].
    NotificationsDue,
}

/// Processes an event, mutates application state, and returns the repaint
/// flag and actions to execute.
///
/// # Errors
///
/// None of the current events fail; the `Result` is kept so the plugin
/// shim handles every outcome in one place.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let mode = state.input_mode();
    let _span = tracing::debug_span!("handle_event", event_type = ?event, mode = ?mode).entered();

    let mut actions = vec![];

    let handled = match (mode, *event) {
        (_, Event::NotificationsDue) => {
            state.notifications_scheduled = false;
            let delivered = state.queue.dispatch_pending();
            tracing::debug!(delivered, "notifications dispatched");
            delivered > 0
        }
        (_, Event::CloseFocus) => {
            actions.push(Action::CloseFocus);
            false
        }
        (_, Event::CycleTheme) => {
            state.cycle_theme();
            true
        }

        (InputMode::Popup, Event::KeyUp) => {
            state.overlay.move_highlight(HighlightMove::Previous);
            true
        }
        (InputMode::Popup, Event::KeyDown) => {
            state.overlay.move_highlight(HighlightMove::Next);
            true
        }
        (InputMode::Popup, Event::Enter) => {
            state.overlay.choose();
            true
        }
        (InputMode::Popup, Event::Escape) => {
            state.overlay.dismiss();
            true
        }
        (InputMode::Popup, _) => false,

        (InputMode::Editing, Event::Enter) => {
            state.combo.commit_edit();
            true
        }
        (InputMode::Editing, Event::Escape) => {
            state.combo.cancel_edit();
            true
        }
        (InputMode::Editing, Event::Char(c)) => {
            state.combo.edit_insert(c);
            true
        }
        (InputMode::Editing, Event::Backspace) => {
            state.combo.edit_backspace();
            true
        }
        (InputMode::Editing, _) => false,

        // Editable controls leave the arrows to their text editor.
        (InputMode::Normal, Event::KeyUp | Event::Char('k'))
            if state.combo.wants_keyboard_focus() =>
        {
            state.combo.key_pressed(ComboKey::Up)
        }
        (InputMode::Normal, Event::KeyDown | Event::Char('j'))
            if state.combo.wants_keyboard_focus() =>
        {
            state.combo.key_pressed(ComboKey::Down)
        }
        (InputMode::Normal, Event::KeyLeft) if state.combo.wants_keyboard_focus() => {
            state.combo.key_pressed(ComboKey::Left)
        }
        (InputMode::Normal, Event::KeyRight) if state.combo.wants_keyboard_focus() => {
            state.combo.key_pressed(ComboKey::Right)
        }
        (InputMode::Normal, Event::KeyUp | Event::KeyDown | Event::KeyLeft | Event::KeyRight) => {
            tracing::trace!("arrow ignored by editable control");
            false
        }
        (InputMode::Normal, Event::Enter | Event::Char(' ')) => {
            state.combo.key_pressed(ComboKey::Enter)
        }
        (InputMode::Normal, Event::ShowEditor | Event::Char('e')) => {
            if state.combo.is_text_editable() {
                state.combo.show_editor();
                true
            } else {
                tracing::debug!("editor requested on read-only control");
                false
            }
        }
        (InputMode::Normal, Event::Char('t')) => {
            state.cycle_theme();
            true
        }
        (InputMode::Normal, Event::Escape | Event::Char('q')) => {
            actions.push(Action::CloseFocus);
            false
        }
        (InputMode::Normal, Event::Char(_) | Event::Backspace) => false,
    };

    if state.queue.pending() > 0 && !state.notifications_scheduled {
        state.notifications_scheduled = true;
        actions.push(Action::ScheduleNotifications);
    }

    let repaint = state.combo.take_repaint_request();
    Ok((handled || repaint, actions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NO_SELECTION;
    use crate::ui::Theme;
    use crate::widget::Notification;

    fn fruit() -> AppState {
        let state = AppState::new("fruit", Theme::default());
        state.combo.add_item("Apple", 1);
        state.combo.add_separator();
        state.combo.add_item("Banana", 2);
        state.combo.add_item("Cherry", 3);
        state.combo.set_item_enabled(2, false);
        state
    }

    fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
        handle_event(state, &event).unwrap()
    }

    #[test]
    fn notifications_arrive_on_a_later_turn() {
        let mut state = fruit();

        let (_, actions) = send(&mut state, Event::KeyDown);
        assert_eq!(actions, vec![Action::ScheduleNotifications]);
        assert_eq!(state.last_change.borrow().count, 0);

        let (_, actions) = send(&mut state, Event::KeyDown);
        assert!(actions.is_empty());

        let (render, actions) = send(&mut state, Event::NotificationsDue);
        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.last_change.borrow().count, 1);
        assert_eq!(state.last_change.borrow().id, 2);
    }

    #[test]
    fn popup_flow_selects_highlighted_item() {
        let mut state = fruit();
        state.combo.set_selected_id(1, Notification::DontSend);

        send(&mut state, Event::Enter);
        assert_eq!(state.input_mode(), InputMode::Popup);

        // Banana is disabled, so the highlight jumps to Cherry.
        send(&mut state, Event::KeyDown);
        let (_, actions) = send(&mut state, Event::Enter);

        assert_eq!(state.input_mode(), InputMode::Normal);
        assert_eq!(state.combo.selected_id(), 3);
        assert_eq!(actions, vec![Action::ScheduleNotifications]);
    }

    #[test]
    fn escape_dismisses_popup_without_change() {
        let mut state = fruit();
        state.combo.set_selected_id(1, Notification::DontSend);

        send(&mut state, Event::Enter);
        send(&mut state, Event::KeyDown);
        let (_, actions) = send(&mut state, Event::Escape);

        assert!(!state.combo.is_popup_active());
        assert_eq!(state.combo.selected_id(), 1);
        assert!(actions.is_empty());
    }

    #[test]
    fn editing_commits_typed_text() {
        let mut state = fruit();
        state.combo.set_editable_text(true);

        send(&mut state, Event::ShowEditor);
        for c in "Cherry".chars() {
            send(&mut state, Event::Char(c));
        }
        send(&mut state, Event::Char('x'));
        send(&mut state, Event::Backspace);
        let (_, actions) = send(&mut state, Event::Enter);

        assert_eq!(state.combo.selected_id(), 3);
        assert_eq!(actions, vec![Action::ScheduleNotifications]);
    }

    #[test]
    fn cancelled_edit_keeps_text() {
        let mut state = fruit();
        state.combo.set_editable_text(true);

        send(&mut state, Event::Char('e'));
        send(&mut state, Event::Char('q'));
        assert_eq!(state.input_mode(), InputMode::Editing);
        send(&mut state, Event::Escape);

        assert_eq!(state.combo.text(), "");
        assert_eq!(state.combo.selected_id(), NO_SELECTION);
    }

    #[test]
    fn read_only_control_ignores_editor_request() {
        let mut state = fruit();
        let (render, _) = send(&mut state, Event::ShowEditor);
        assert!(!render);
        assert_eq!(state.input_mode(), InputMode::Normal);
    }

    #[test]
    fn editable_control_leaves_arrows_alone() {
        let mut state = fruit();
        state.combo.set_editable_text(true);
        state.combo.set_selected_id(1, Notification::DontSend);
        state.combo.take_repaint_request();

        for event in [Event::KeyDown, Event::KeyRight, Event::Char('j')] {
            let (render, actions) = send(&mut state, event);
            assert!(!render);
            assert!(actions.is_empty());
        }
        assert_eq!(state.combo.selected_id(), 1);
        assert_eq!(state.queue.pending(), 0);
    }

    #[test]
    fn quit_keys_close_focus() {
        let mut state = fruit();
        assert_eq!(send(&mut state, Event::Char('q')).1, vec![Action::CloseFocus]);
        assert_eq!(send(&mut state, Event::Escape).1, vec![Action::CloseFocus]);
    }

    #[test]
    fn theme_cycle_requests_repaint() {
        let mut state = fruit();
        let (render, _) = send(&mut state, Event::CycleTheme);
        assert!(render);
        assert_eq!(state.theme.name, "catppuccin-latte");
    }
}
