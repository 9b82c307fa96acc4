//! Application state management and view model computation.
//!
//! [`AppState`] owns the one [`ComboBox`] the plugin shows, the message queue
//! its notifications are posted to, the terminal overlay that presents its
//! list, and the active theme. A listener registered at construction keeps a
//! [`ChangeRecord`] of the last delivered change, which the footer displays.
//!
//! # View Model Computation
//!
//! `compute_viewmodel` reads the control and the overlay and produces a
//! [`UIViewModel`]. The overlay list is windowed around its highlight when
//! it is taller than the space left below the control.
//!
//! # Example
//!
//! ```rust
//! use dropdown::app::AppState;
//! use dropdown::ui::Theme;
//! use dropdown::widget::Notification;
//!
//! let state = AppState::new("fruit", Theme::default());
//! state.combo.add_item("Apple", 1);
//! state.combo.set_selected_id(1, Notification::Send);
//!
//! let vm = state.compute_viewmodel(24, 80);
//! assert_eq!(vm.control.text, "Apple");
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::modes::InputMode;
use super::overlay::TerminalOverlay;
use crate::domain::ItemId;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ControlView, FooterInfo, HeaderInfo, OverlayRow, OverlayRowKind, OverlayView, UIViewModel,
};
use crate::widget::{ComboBox, MessageQueue, OverlayEntry, OverlayProvider, StyleProvider};

/// Built-in themes in cycling order.
const BUILTIN_THEMES: [&str; 2] = ["catppuccin-mocha", "catppuccin-latte"];

/// Rows used by everything except the overlay list.
///
/// Blank, header, border, control box (3), list frame, notice, border,
/// footer and the bottom margin.
const CHROME_ROWS: usize = 11;

/// Widest the control box gets.
const MAX_CONTROL_WIDTH: usize = 48;

/// The last change notification the host received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeRecord {
    /// Number of notifications delivered so far.
    pub count: usize,
    /// Selected id at delivery time.
    pub id: ItemId,
    /// Displayed text at delivery time.
    pub text: String,
}

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// The control.
    pub combo: ComboBox,

    /// Queue the control posts deferred notifications to.
    ///
    /// Drained by the `NotificationsDue` event on a later host turn.
    pub queue: MessageQueue,

    /// Overlay presenting the control's list.
    pub overlay: Rc<TerminalOverlay>,

    /// Active colour scheme, also the control's style provider.
    pub theme: Rc<Theme>,

    /// Updated by the control's change listener.
    pub last_change: Rc<RefCell<ChangeRecord>>,

    /// Whether a `ScheduleNotifications` request is outstanding.
    pub notifications_scheduled: bool,
}

impl AppState {
    /// Creates the state with an empty control named `name`.
    #[must_use]
    pub fn new(name: &str, theme: Theme) -> Self {
        let theme = Rc::new(theme);
        let overlay = Rc::new(TerminalOverlay::default());
        let queue = MessageQueue::new();

        let combo = ComboBox::new(
            name,
            Rc::clone(&theme) as Rc<dyn StyleProvider>,
            Rc::clone(&overlay) as Rc<dyn OverlayProvider>,
            queue.clone(),
        );

        let last_change = Rc::new(RefCell::new(ChangeRecord::default()));
        let record = Rc::clone(&last_change);
        combo.add_listener(move |c: &ComboBox| {
            let mut record = record.borrow_mut();
            record.count += 1;
            record.id = c.selected_id();
            record.text = c.text();
            tracing::info!(
                control = %c.name(),
                id = record.id,
                text = %record.text,
                "selection changed"
            );
        });

        Self {
            combo,
            queue,
            overlay,
            theme,
            last_change,
            notifications_scheduled: false,
        }
    }

    /// Mode the next key press is interpreted in.
    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        if self.overlay.is_open() {
            InputMode::Popup
        } else if self.combo.is_being_edited() {
            InputMode::Editing
        } else {
            InputMode::Normal
        }
    }

    /// Switches to the next built-in theme and rebuilds the control's
    /// display surface.
    ///
    /// A custom theme is followed by the first built-in one.
    pub fn cycle_theme(&mut self) {
        let next = BUILTIN_THEMES
            .iter()
            .position(|name| *name == self.theme.name)
            .map_or(0, |i| (i + 1) % BUILTIN_THEMES.len());

        let Some(theme) = Theme::from_name(BUILTIN_THEMES[next]) else {
            tracing::warn!(theme = BUILTIN_THEMES[next], "built-in theme failed to load");
            return;
        };

        tracing::debug!(from = %self.theme.name, to = %theme.name, "cycling theme");
        self.theme = Rc::new(theme);
        self.combo
            .set_style(Rc::clone(&self.theme) as Rc<dyn StyleProvider>);
    }

    /// Computes a renderable view model for a `rows` x `cols` pane.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        UIViewModel {
            header: self.compute_header(),
            control: self.compute_control(cols),
            overlay: self.compute_overlay(rows),
            footer: self.compute_footer(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(" {} ({}) ", self.combo.name(), self.combo.num_items()),
        }
    }

    fn compute_control(&self, cols: usize) -> ControlView {
        let editor_text = self.combo.editor_text();
        let placeholder = self.combo.visible_placeholder();

        let (text, is_placeholder) = match (&editor_text, placeholder) {
            (Some(buffer), _) => (buffer.clone(), false),
            (None, Some(placeholder)) => (placeholder, true),
            (None, None) => (self.combo.text(), false),
        };

        ControlView {
            text,
            is_placeholder,
            is_editing: editor_text.is_some(),
            justification: self.combo.justification_type(),
            text_colour: self.combo.text_colour(),
            popup_open: self.combo.is_popup_active(),
            tooltip: self.combo.tooltip(),
            width: cols.saturating_sub(2).min(MAX_CONTROL_WIDTH),
        }
    }

    fn compute_overlay(&self, rows: usize) -> Option<OverlayView> {
        let (entries, highlighted) = self.overlay.snapshot()?;
        let available_rows = rows.saturating_sub(CHROME_ROWS).max(1);
        let anchor = highlighted.unwrap_or(0);

        let mut visible_start = anchor.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(entries.len());
        if visible_end - visible_start < available_rows && entries.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let rows = entries[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, entry)| OverlayRow {
                kind: match entry {
                    OverlayEntry::Separator => OverlayRowKind::Separator,
                    OverlayEntry::Heading(text) => OverlayRowKind::Heading(text.clone()),
                    OverlayEntry::Item {
                        label,
                        enabled,
                        checked,
                        ..
                    } => OverlayRowKind::Item {
                        label: label.clone(),
                        enabled: *enabled,
                        checked: *checked,
                    },
                },
                is_highlighted: highlighted == Some(visible_start + relative_idx),
            })
            .collect();

        Some(OverlayView {
            rows,
            more_above: visible_start > 0,
            more_below: visible_end < entries.len(),
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode() {
            InputMode::Popup => "↑/↓: move  Enter: choose  Esc: close list",
            InputMode::Editing => "Type to edit  Enter: apply  Esc: cancel",
            InputMode::Normal if self.combo.is_text_editable() => {
                "↑/↓: select  Enter: open list  e: edit  t: theme  q: quit"
            }
            InputMode::Normal => "↑/↓: select  Enter: open list  t: theme  q: quit",
        }
        .to_string();

        let record = self.last_change.borrow();
        let notice = (record.count > 0).then(|| {
            if record.text.is_empty() {
                format!("change #{}: nothing selected", record.count)
            } else {
                format!("change #{}: {} (id {})", record.count, record.text, record.id)
            }
        });

        FooterInfo { keybindings, notice }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NO_SELECTION;
    use crate::widget::Notification;

    fn state_with(count: ItemId) -> AppState {
        let state = AppState::new("test", Theme::default());
        for id in 1..=count {
            state.combo.add_item(&format!("item {id}"), id);
        }
        state
    }

    #[test]
    fn listener_records_last_change() {
        let state = state_with(3);
        state.combo.set_selected_id(2, Notification::Send);
        state.queue.dispatch_pending();

        let record = state.last_change.borrow().clone();
        assert_eq!(record, ChangeRecord { count: 1, id: 2, text: "item 2".into() });

        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.footer.notice.as_deref(), Some("change #1: item 2 (id 2)"));
    }

    #[test]
    fn modes_follow_overlay_and_editor() {
        let state = state_with(2);
        assert_eq!(state.input_mode(), InputMode::Normal);

        state.combo.show_popup();
        assert_eq!(state.input_mode(), InputMode::Popup);
        state.overlay.dismiss();

        state.combo.set_editable_text(true);
        state.combo.show_editor();
        assert_eq!(state.input_mode(), InputMode::Editing);
    }

    #[test]
    fn cycling_theme_keeps_selection() {
        let mut state = state_with(2);
        state.combo.set_selected_id(2, Notification::DontSend);

        state.cycle_theme();
        assert_eq!(state.theme.name, "catppuccin-latte");
        assert_eq!(state.combo.text_colour(), state.theme.colors.control_fg);
        assert_eq!(state.combo.selected_id(), 2);

        state.cycle_theme();
        assert_eq!(state.theme.name, "catppuccin-mocha");
    }

    #[test]
    fn placeholder_is_flagged() {
        let state = state_with(1);
        state.combo.set_text_when_nothing_selected("pick a fruit");

        let control = state.compute_viewmodel(24, 80).control;
        assert!(control.is_placeholder);
        assert_eq!(control.text, "pick a fruit");
        assert_eq!(control.width, MAX_CONTROL_WIDTH);
    }

    #[test]
    fn overlay_window_follows_highlight() {
        let state = state_with(30);
        state.combo.set_selected_id(25, Notification::DontSend);
        state.combo.show_popup();

        let overlay = state.compute_viewmodel(20, 80).overlay.unwrap();
        assert_eq!(overlay.rows.len(), 9);
        assert!(overlay.more_above);
        assert!(overlay.rows.iter().any(|row| row.is_highlighted));
        assert!(overlay.rows.iter().any(|row| matches!(
            &row.kind,
            OverlayRowKind::Item { label, checked: true, .. } if label == "item 25"
        )));
    }

    #[test]
    fn empty_list_shows_disabled_placeholder_row() {
        let state = state_with(0);
        state.combo.show_popup();

        let overlay = state.compute_viewmodel(24, 80).overlay.unwrap();
        assert_eq!(overlay.rows.len(), 1);
        assert!(matches!(
            &overlay.rows[0].kind,
            OverlayRowKind::Item { enabled: false, .. }
        ));
        assert!(!overlay.rows[0].is_highlighted);

        state.overlay.choose();
        assert_eq!(state.combo.selected_id(), NO_SELECTION);
    }
}
