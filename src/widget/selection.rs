//! Selection bookkeeping for the drop-down control.
//!
//! Three sources can change what is selected: an explicit id, free text typed
//! into the display surface, and index-based navigation. [`SelectionState`]
//! reconciles them by never trusting a cached id on its own. The selected id
//! is always re-derived from the pair (current id, displayed text): if the
//! entry for the current id is gone, or its label no longer matches the text,
//! nothing is selected.
//!
//! The mutating methods report whether anything observable changed. The
//! caller turns that into a change notification and a repaint.

use crate::domain::{ItemId, NO_SELECTION};
use crate::widget::capabilities::DisplaySurface;
use crate::widget::store::ItemStore;

/// Current and last-committed selection ids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    current_id: ItemId,
    last_committed_id: ItemId,
}

impl SelectionState {
    /// The raw current id, without re-deriving it against the text.
    #[must_use]
    pub const fn current_id(&self) -> ItemId {
        self.current_id
    }

    /// The id most recently applied to the displayed text.
    #[must_use]
    pub const fn last_committed_id(&self) -> ItemId {
        self.last_committed_id
    }

    /// Display index of the selection, if its entry still matches the text.
    #[must_use]
    pub fn selected_index(&self, store: &ItemStore, displayed: &str) -> Option<usize> {
        let index = store.index_of_id(self.current_id)?;
        (store.item_text(index) == displayed).then_some(index)
    }

    /// Selected id, or [`NO_SELECTION`] if its entry no longer matches the text.
    #[must_use]
    pub fn selected_id(&self, store: &ItemStore, displayed: &str) -> ItemId {
        store
            .find_by_id(self.current_id)
            .filter(|entry| entry.name == displayed)
            .map_or(NO_SELECTION, |entry| entry.id)
    }

    /// Selects `id`, writing its label (or nothing) to the surface.
    ///
    /// Returns `false` without touching anything when both the id and the
    /// resulting text already match, so repeated calls stay silent.
    pub fn apply_id(
        &mut self,
        store: &ItemStore,
        surface: &mut dyn DisplaySurface,
        id: ItemId,
    ) -> bool {
        let new_text = store.find_by_id(id).map_or("", |entry| entry.name.as_str());

        if self.last_committed_id == id && surface.text() == new_text {
            return false;
        }

        surface.set_text(new_text);
        self.last_committed_id = id;
        self.current_id = id;

        tracing::debug!(id, text = new_text, "selection committed");
        true
    }

    /// Selects whatever real entry is labelled `text`, or keeps `text` as
    /// free text with nothing selected.
    ///
    /// Returns `true` if a notification is due.
    pub fn apply_text(
        &mut self,
        store: &ItemStore,
        surface: &mut dyn DisplaySurface,
        text: &str,
    ) -> bool {
        if let Some(entry) = store.find_real_by_name(text) {
            let id = entry.id;
            return self.apply_id(store, surface, id);
        }

        self.last_committed_id = NO_SELECTION;
        self.current_id = NO_SELECTION;

        if surface.text() == text {
            return false;
        }

        surface.set_text(text);
        tracing::debug!(text, "free text entered, nothing selected");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::label::TextLabel;

    fn store() -> ItemStore {
        let mut store = ItemStore::default();
        store.add_item("A", 1);
        store.add_item("B", 2);
        store
    }

    #[test]
    fn apply_id_writes_label_and_dedups() {
        let store = store();
        let mut label = TextLabel::new();
        let mut state = SelectionState::default();

        assert!(state.apply_id(&store, &mut label, 2));
        assert_eq!(label.text(), "B");
        assert!(!state.apply_id(&store, &mut label, 2));
        assert_eq!(state.selected_id(&store, label.text()), 2);
        assert_eq!(state.selected_index(&store, label.text()), Some(1));
    }

    #[test]
    fn unknown_id_clears_text() {
        let store = store();
        let mut label = TextLabel::new();
        let mut state = SelectionState::default();

        state.apply_id(&store, &mut label, 1);
        assert!(state.apply_id(&store, &mut label, 7));
        assert_eq!(label.text(), "");
        assert_eq!(state.selected_id(&store, label.text()), NO_SELECTION);
        assert_eq!(state.current_id(), 7);
    }

    #[test]
    fn renamed_entry_deselects_on_next_read() {
        let mut store = store();
        let mut label = TextLabel::new();
        let mut state = SelectionState::default();

        state.apply_id(&store, &mut label, 1);
        store.change_item_text(1, "Alpha");

        assert_eq!(state.selected_id(&store, label.text()), NO_SELECTION);
        assert_eq!(state.selected_index(&store, label.text()), None);
    }

    #[test]
    fn free_text_keeps_literal_and_clears_ids() {
        let store = store();
        let mut label = TextLabel::new();
        let mut state = SelectionState::default();

        state.apply_id(&store, &mut label, 1);
        assert!(state.apply_text(&store, &mut label, "Zed"));
        assert_eq!(label.text(), "Zed");
        assert_eq!(state.current_id(), NO_SELECTION);
        assert_eq!(state.last_committed_id(), NO_SELECTION);
        assert!(!state.apply_text(&store, &mut label, "Zed"));
    }

    #[test]
    fn matching_text_selects_entry() {
        let store = store();
        let mut label = TextLabel::new();
        let mut state = SelectionState::default();

        assert!(state.apply_text(&store, &mut label, "B"));
        assert_eq!(state.selected_id(&store, label.text()), 2);
    }
}
