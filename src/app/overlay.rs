//! Terminal-hosted overlay provider.
//!
//! [`TerminalOverlay`] implements [`OverlayProvider`] for the plugin. It does
//! not draw anything; it keeps the open list and a highlight cursor so the
//! event handler can move through rows and the renderer can show them. The
//! completion callback is invoked exactly once per `show`, with the chosen id
//! or zero when dismissed.

use std::cell::RefCell;
use std::fmt;

use crate::domain::{ItemId, NO_SELECTION};
use crate::widget::{OverlayCallback, OverlayContent, OverlayEntry, OverlayProvider};

/// Direction of a highlight move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightMove {
    /// Towards the top of the list.
    Previous,
    /// Towards the bottom of the list.
    Next,
}

struct OpenOverlay {
    content: OverlayContent,
    highlighted: Option<usize>,
    on_complete: OverlayCallback,
}

/// Overlay state shared between the control and the host.
#[derive(Default)]
pub struct TerminalOverlay {
    open: RefCell<Option<OpenOverlay>>,
}

impl TerminalOverlay {
    /// Whether a list is showing.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.borrow().is_some()
    }

    /// Rows of the open list and the highlighted row index.
    #[must_use]
    pub fn snapshot(&self) -> Option<(Vec<OverlayEntry>, Option<usize>)> {
        self.open
            .borrow()
            .as_ref()
            .map(|open| (open.content.entries.clone(), open.highlighted))
    }

    /// Moves the highlight to the next choosable row in `direction`.
    ///
    /// Stays put at either end of the list.
    pub fn move_highlight(&self, direction: HighlightMove) {
        let mut guard = self.open.borrow_mut();
        let Some(open) = guard.as_mut() else {
            return;
        };

        let entries = &open.content.entries;
        let choosable = |i: &usize| entries[*i].choosable_id().is_some();

        let next = match (direction, open.highlighted) {
            (HighlightMove::Next, Some(current)) => (current + 1..entries.len()).find(choosable),
            (HighlightMove::Previous, Some(current)) => (0..current).rev().find(choosable),
            (_, None) => (0..entries.len()).find(choosable),
        };

        if next.is_some() {
            open.highlighted = next;
        }
    }

    /// Closes the list, choosing the highlighted row.
    pub fn choose(&self) {
        let chosen = self
            .open
            .borrow()
            .as_ref()
            .and_then(|open| {
                open.highlighted
                    .and_then(|i| open.content.entries.get(i))
                    .and_then(OverlayEntry::choosable_id)
            })
            .unwrap_or(NO_SELECTION);
        self.complete(chosen);
    }

    /// Closes the list without choosing.
    pub fn dismiss(&self) {
        self.complete(NO_SELECTION);
    }

    fn complete(&self, chosen: ItemId) {
        let open = self.open.borrow_mut().take();
        if let Some(open) = open {
            tracing::debug!(chosen, "terminal overlay completed");
            (open.on_complete)(chosen);
        }
    }

    fn initial_highlight(content: &OverlayContent) -> Option<usize> {
        let entries = &content.entries;
        entries
            .iter()
            .position(|e| e.choosable_id().is_some_and(|id| id == content.anchor_id))
            .or_else(|| entries.iter().position(|e| e.choosable_id().is_some()))
    }
}

impl OverlayProvider for TerminalOverlay {
    fn show(&self, content: OverlayContent, on_complete: OverlayCallback) {
        if self.is_open() {
            self.dismiss();
        }

        let highlighted = Self::initial_highlight(&content);
        *self.open.borrow_mut() = Some(OpenOverlay {
            content,
            highlighted,
            on_complete,
        });
    }

    fn dismiss_all(&self) {
        self.dismiss();
    }
}

impl fmt::Debug for TerminalOverlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = self.open.borrow();
        f.debug_struct("TerminalOverlay")
            .field("open", &open.is_some())
            .field("highlighted", &open.as_ref().and_then(|o| o.highlighted))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn content(anchor_id: ItemId) -> OverlayContent {
        let item = |id, enabled| OverlayEntry::Item {
            id,
            label: format!("item {id}"),
            enabled,
            checked: id == anchor_id,
        };
        OverlayContent {
            entries: vec![
                OverlayEntry::Heading("h".into()),
                item(1, true),
                OverlayEntry::Separator,
                item(2, false),
                item(3, true),
            ],
            anchor_id,
        }
    }

    fn recorder() -> (Rc<Cell<Option<ItemId>>>, OverlayCallback) {
        let result = Rc::new(Cell::new(None));
        let sink = Rc::clone(&result);
        (result, Box::new(move |id| sink.set(Some(id))))
    }

    #[test]
    fn highlight_starts_at_anchor_and_skips_unchoosable_rows() {
        let overlay = TerminalOverlay::default();
        let (result, callback) = recorder();
        overlay.show(content(1), callback);

        assert_eq!(overlay.snapshot().and_then(|(_, h)| h), Some(1));
        overlay.move_highlight(HighlightMove::Next);
        assert_eq!(overlay.snapshot().and_then(|(_, h)| h), Some(4));
        overlay.move_highlight(HighlightMove::Next);
        assert_eq!(overlay.snapshot().and_then(|(_, h)| h), Some(4));

        overlay.choose();
        assert_eq!(result.get(), Some(3));
        assert!(!overlay.is_open());
    }

    #[test]
    fn no_anchor_highlights_first_choosable() {
        let overlay = TerminalOverlay::default();
        let (_, callback) = recorder();
        overlay.show(content(NO_SELECTION), callback);
        assert_eq!(overlay.snapshot().and_then(|(_, h)| h), Some(1));
    }

    #[test]
    fn dismiss_completes_with_zero_once() {
        let overlay = TerminalOverlay::default();
        let (result, callback) = recorder();
        overlay.show(content(3), callback);

        overlay.dismiss();
        overlay.dismiss();
        assert_eq!(result.get(), Some(NO_SELECTION));
    }

    #[test]
    fn choosing_with_nothing_choosable_returns_zero() {
        let overlay = TerminalOverlay::default();
        let (result, callback) = recorder();
        let placeholder = OverlayContent {
            entries: vec![OverlayEntry::Item {
                id: 1,
                label: "(no choices)".into(),
                enabled: false,
                checked: false,
            }],
            anchor_id: NO_SELECTION,
        };
        overlay.show(placeholder, callback);
        overlay.choose();
        assert_eq!(result.get(), Some(NO_SELECTION));
    }
}
