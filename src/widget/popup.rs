//! Overlay content and the open/closed state of the popup.
//!
//! [`PopupController`] is a two-state machine (`Closed` → `Open` → `Closed`).
//! Opening builds an [`OverlayContent`] that mirrors the item store; the
//! provider shows it and later reports a choice through a callback that the
//! control wires back into `set_selected_id`, the same path programmatic
//! selection takes.

use crate::domain::{ItemId, NO_SELECTION};
use crate::widget::store::ItemStore;

/// Id carried by the placeholder row shown when the store is empty.
pub const PLACEHOLDER_ID: ItemId = 1;

/// One row of the overlay list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayEntry {
    /// Divider line.
    Separator,
    /// Non-selectable section title.
    Heading(String),
    /// Choosable row.
    Item {
        /// Id reported back when chosen.
        id: ItemId,
        /// Row label.
        label: String,
        /// Whether the row can be chosen.
        enabled: bool,
        /// Whether this row is the current selection.
        checked: bool,
    },
}

impl OverlayEntry {
    /// Returns the id if the row can be chosen.
    #[must_use]
    pub const fn choosable_id(&self) -> Option<ItemId> {
        match self {
            Self::Item {
                id, enabled: true, ..
            } => Some(*id),
            _ => None,
        }
    }
}

/// Everything an overlay provider needs to present the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayContent {
    /// Rows in display order.
    pub entries: Vec<OverlayEntry>,
    /// Currently selected id, used to position the list. Zero if none.
    pub anchor_id: ItemId,
}

impl OverlayContent {
    /// Mirrors `store` into overlay rows.
    ///
    /// An empty store yields a single disabled row labelled `no_choices_text`.
    #[must_use]
    pub fn build(store: &ItemStore, selected_id: ItemId, no_choices_text: &str) -> Self {
        let mut entries: Vec<OverlayEntry> = store
            .entries()
            .iter()
            .map(|entry| {
                if entry.is_separator() {
                    OverlayEntry::Separator
                } else if entry.is_heading {
                    OverlayEntry::Heading(entry.name.clone())
                } else {
                    OverlayEntry::Item {
                        id: entry.id,
                        label: entry.name.clone(),
                        enabled: entry.enabled,
                        checked: entry.id == selected_id,
                    }
                }
            })
            .collect();

        if store.is_empty() {
            entries.push(OverlayEntry::Item {
                id: PLACEHOLDER_ID,
                label: no_choices_text.to_string(),
                enabled: false,
                checked: false,
            });
        }

        Self {
            entries,
            anchor_id: selected_id,
        }
    }
}

/// Popup lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopupState {
    /// No overlay is showing.
    #[default]
    Closed,
    /// An overlay is showing and its callback is outstanding.
    Open,
}

/// Tracks whether the overlay is open.
#[derive(Debug, Clone, Copy, Default)]
pub struct PopupController {
    state: PopupState,
}

impl PopupController {
    /// Current state.
    #[must_use]
    pub const fn state(&self) -> PopupState {
        self.state
    }

    /// Whether the overlay is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == PopupState::Open
    }

    /// Moves to `Open`. Returns `false` if already open.
    pub fn open(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        self.state = PopupState::Open;
        true
    }

    /// Moves to `Closed` and returns the id to apply, if any.
    pub fn complete(&mut self, chosen: ItemId) -> Option<ItemId> {
        self.state = PopupState::Closed;
        (chosen != NO_SELECTION).then_some(chosen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_gets_single_placeholder() {
        let content = OverlayContent::build(&ItemStore::default(), NO_SELECTION, "(no choices)");

        assert_eq!(
            content.entries,
            vec![OverlayEntry::Item {
                id: PLACEHOLDER_ID,
                label: "(no choices)".to_string(),
                enabled: false,
                checked: false,
            }]
        );
        assert!(content.entries[0].choosable_id().is_none());
    }

    #[test]
    fn content_mirrors_store_and_checks_selection() {
        let mut store = ItemStore::default();
        store.add_section_heading("Fruit");
        store.add_item("Apple", 1);
        store.add_separator();
        store.add_item("Banana", 2);
        store.set_item_enabled(2, false);

        let content = OverlayContent::build(&store, 1, "(none)");

        assert_eq!(content.anchor_id, 1);
        assert_eq!(content.entries.len(), 4);
        assert_eq!(content.entries[0], OverlayEntry::Heading("Fruit".into()));
        assert_eq!(content.entries[1].choosable_id(), Some(1));
        assert!(matches!(content.entries[1], OverlayEntry::Item { checked: true, .. }));
        assert_eq!(content.entries[2], OverlayEntry::Separator);
        assert!(matches!(
            content.entries[3],
            OverlayEntry::Item { enabled: false, checked: false, .. }
        ));
    }

    #[test]
    fn headings_only_store_has_no_placeholder() {
        let mut store = ItemStore::default();
        store.add_section_heading("Nothing here");

        let content = OverlayContent::build(&store, NO_SELECTION, "(none)");
        assert_eq!(content.entries, vec![OverlayEntry::Heading("Nothing here".into())]);
    }

    #[test]
    fn controller_state_machine() {
        let mut popup = PopupController::default();
        assert!(popup.open());
        assert!(!popup.open());
        assert_eq!(popup.complete(NO_SELECTION), None);
        assert_eq!(popup.state(), PopupState::Closed);
        assert!(popup.open());
        assert_eq!(popup.complete(3), Some(3));
    }
}
