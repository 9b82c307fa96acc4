//! Ordered storage for the entries of a drop-down list.
//!
//! The store owns every [`Entry`] and answers the two kinds of lookup the
//! control needs: by identifier and by display index. Display indices count
//! real entries only, so separators and headings never shift what index a
//! caller sees. Indices are never cached; they are recomputed on every query.
//!
//! # Pending separators
//!
//! [`ItemStore::add_separator`] does not append anything. It raises a flag
//! which the next [`ItemStore::add_item`] or [`ItemStore::add_section_heading`]
//! turns into a real separator. A store never starts with a separator, never
//! ends with one, and never holds two in a row.
//!
//! # Example
//!
//! ```
//! use dropdown::widget::ItemStore;
//!
//! let mut store = ItemStore::default();
//! store.add_item("Apple", 1);
//! store.add_separator();
//! store.add_item("Banana", 2);
//!
//! assert_eq!(store.num_items(), 2);
//! assert_eq!(store.entries().len(), 3);
//! assert_eq!(store.index_of_id(2), Some(1));
//! ```

use crate::domain::{Entry, ItemId, NO_SELECTION};

/// Ordered sequence of items, headings and separators.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    entries: Vec<Entry>,
    separator_pending: bool,
}

impl ItemStore {
    /// Appends a selectable item.
    ///
    /// The label must be non-empty and the id non-zero; violating either trips
    /// a debug assertion and the call is ignored. Ids must also be unique,
    /// which is only checked in debug builds.
    pub fn add_item(&mut self, text: &str, id: ItemId) {
        debug_assert!(!text.is_empty(), "items need a non-empty label");
        debug_assert!(id != NO_SELECTION, "item ids must be non-zero");
        debug_assert!(self.find_by_id(id).is_none(), "duplicate item id {id}");

        if text.is_empty() || id == NO_SELECTION {
            tracing::warn!(id, text_len = text.len(), "ignoring invalid item");
            return;
        }

        self.flush_pending_separator();
        self.entries.push(Entry::item(text, id));
        tracing::trace!(id, text, "item added");
    }

    /// Requests a separator before the next item or heading.
    ///
    /// Has no effect on an empty store.
    pub fn add_separator(&mut self) {
        self.separator_pending = !self.entries.is_empty();
    }

    /// Appends a non-selectable section heading.
    pub fn add_section_heading(&mut self, text: &str) {
        debug_assert!(!text.is_empty(), "headings need a non-empty label");

        if text.is_empty() {
            tracing::warn!("ignoring empty section heading");
            return;
        }

        self.flush_pending_separator();
        self.entries.push(Entry::heading(text));
    }

    fn flush_pending_separator(&mut self) {
        if self.separator_pending {
            self.separator_pending = false;
            self.entries.push(Entry::separator());
        }
    }

    /// Enables or disables an item. Unknown ids are ignored.
    pub fn set_item_enabled(&mut self, id: ItemId, enabled: bool) {
        if let Some(entry) = self.find_by_id_mut(id) {
            entry.enabled = enabled;
        }
    }

    /// Renames an item.
    ///
    /// The id keeps its position and identity even if the new label collides
    /// with another entry. Unknown ids and empty labels trip a debug
    /// assertion and are ignored.
    pub fn change_item_text(&mut self, id: ItemId, text: &str) {
        debug_assert!(!text.is_empty(), "items need a non-empty label");
        if text.is_empty() {
            tracing::warn!(id, "ignoring empty item label");
            return;
        }

        let entry = self.find_by_id_mut(id);
        debug_assert!(entry.is_some(), "no item with id {id}");

        match entry {
            Some(entry) => entry.name = text.to_string(),
            None => tracing::warn!(id, "cannot rename unknown item"),
        }
    }

    /// Removes every entry and drops any pending separator.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.separator_pending = false;
    }

    /// Returns `true` if the store holds no entries at all.
    ///
    /// A store containing only headings is not empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in insertion order, separators and headings included.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Looks up an entry by id. Zero never matches.
    #[must_use]
    pub fn find_by_id(&self, id: ItemId) -> Option<&Entry> {
        if id == NO_SELECTION {
            return None;
        }
        self.entries.iter().rev().find(|e| e.id == id)
    }

    fn find_by_id_mut(&mut self, id: ItemId) -> Option<&mut Entry> {
        if id == NO_SELECTION {
            return None;
        }
        self.entries.iter_mut().rev().find(|e| e.id == id)
    }

    /// Finds the real entry labelled `text`.
    ///
    /// When several items share a label, the most recently added one wins.
    #[must_use]
    pub fn find_real_by_name(&self, text: &str) -> Option<&Entry> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.is_real() && e.name == text)
    }

    fn real_entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.is_real())
    }

    /// Returns the real entry at a display index.
    #[must_use]
    pub fn get_by_index(&self, index: usize) -> Option<&Entry> {
        self.real_entries().nth(index)
    }

    /// Number of real entries.
    #[must_use]
    pub fn num_items(&self) -> usize {
        self.real_entries().count()
    }

    /// Label of the real entry at `index`, or an empty string.
    #[must_use]
    pub fn item_text(&self, index: usize) -> &str {
        self.get_by_index(index).map_or("", |e| e.name.as_str())
    }

    /// Id of the real entry at `index`, or [`NO_SELECTION`].
    #[must_use]
    pub fn item_id(&self, index: usize) -> ItemId {
        self.get_by_index(index).map_or(NO_SELECTION, |e| e.id)
    }

    /// Display index of the real entry with `id`.
    #[must_use]
    pub fn index_of_id(&self, id: ItemId) -> Option<usize> {
        self.real_entries().position(|e| e.id == id)
    }
}
