//! The drop-down control.
//!
//! [`ComboBox`] ties the item store, the selection state, the change notifier
//! and the popup controller together behind one programmatic API. Every way
//! of changing the selection (an explicit id, an index, typed text, a key
//! press, a popup choice) ends up in the same `set_selected_id` path, so the
//! dedup and notification rules apply uniformly.
//!
//! A `ComboBox` is the owning handle. Deferred work (change notifications and
//! overlay completion callbacks) only holds weak references and becomes a
//! no-op once the owner is dropped.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use dropdown::ui::Theme;
//! use dropdown::app::TerminalOverlay;
//! use dropdown::widget::{ComboBox, MessageQueue, Notification};
//!
//! let queue = MessageQueue::new();
//! let combo = ComboBox::new(
//!     "fruit",
//!     Rc::new(Theme::default()),
//!     Rc::new(TerminalOverlay::default()),
//!     queue.clone(),
//! );
//! combo.add_item("Apple", 1);
//! combo.add_item("Banana", 2);
//!
//! combo.set_selected_id(2, Notification::Send);
//! assert_eq!(combo.selected_item_index(), Some(1));
//! assert_eq!(combo.text(), "Banana");
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::domain::{ItemId, NO_SELECTION};
use crate::widget::capabilities::{
    DisplaySurface, Justification, OverlayProvider, StyleProvider,
};
use crate::widget::notifier::{ChangeNotifier, ListenerId, ListenerList, MessageQueue};
use crate::widget::popup::{OverlayContent, PopupController};
use crate::widget::selection::SelectionState;
use crate::widget::store::ItemStore;

/// Default label of the placeholder row shown for an empty list.
pub const DEFAULT_NO_CHOICES_TEXT: &str = "(no choices)";

/// Whether a selection change should notify listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notification {
    /// Schedule a coalesced change notification.
    #[default]
    Send,
    /// Change silently.
    DontSend,
}

/// Keys the control reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComboKey {
    /// Previous item.
    Up,
    /// Previous item.
    Left,
    /// Next item.
    Down,
    /// Next item.
    Right,
    /// Open the popup.
    Enter,
}

/// Receives change notifications from a [`ComboBox`].
///
/// Closures taking `&ComboBox` implement this trait.
pub trait ComboBoxListener {
    /// Called once per coalesced batch of changes.
    fn combo_box_changed(&self, combo: &ComboBox);
}

impl<F> ComboBoxListener for F
where
    F: Fn(&ComboBox),
{
    fn combo_box_changed(&self, combo: &ComboBox) {
        self(combo);
    }
}

struct Inner {
    name: String,
    store: ItemStore,
    selection: SelectionState,
    surface: Box<dyn DisplaySurface>,
    popup: PopupController,
    listeners: ListenerList<dyn ComboBoxListener>,
    notifier: ChangeNotifier,
    style: Rc<dyn StyleProvider>,
    overlay: Rc<dyn OverlayProvider>,
    text_when_nothing_selected: String,
    no_choices_text: String,
    text_colour: Option<String>,
    repaint_pending: bool,
    self_ref: Weak<RefCell<Inner>>,
}

impl Inner {
    fn selected_id(&self) -> ItemId {
        self.selection.selected_id(&self.store, self.surface.text())
    }

    fn selected_index(&self) -> Option<usize> {
        self.selection.selected_index(&self.store, self.surface.text())
    }

    fn set_selected_id(&mut self, id: ItemId, notification: Notification) {
        if self
            .selection
            .apply_id(&self.store, self.surface.as_mut(), id)
        {
            self.changed(notification);
        }
    }

    fn set_text(&mut self, text: &str, notification: Notification) {
        if self
            .selection
            .apply_text(&self.store, self.surface.as_mut(), text)
        {
            self.changed(notification);
        } else {
            self.repaint_pending = true;
        }
    }

    fn changed(&mut self, notification: Notification) {
        if notification == Notification::Send {
            self.trigger_async_update();
        }
        self.repaint_pending = true;
    }

    fn trigger_async_update(&self) {
        let weak = self.self_ref.clone();
        self.notifier.trigger(move || deliver_change(&weak));
    }

    fn surface_colour(&self) -> String {
        self.text_colour
            .clone()
            .unwrap_or_else(|| self.style.text_colour())
    }

    /// Replaces the display surface, carrying over everything observable.
    fn look_and_feel_changed(&mut self) {
        let mut surface = self.style.create_display_surface();
        surface.set_editable(self.surface.is_editable());
        surface.set_justification(self.surface.justification());
        surface.set_tooltip(self.surface.tooltip());
        surface.set_text(self.surface.text());
        surface.set_text_colour(&self.surface_colour());

        self.surface = surface;
        self.repaint_pending = true;

        tracing::debug!(
            control = %self.name,
            style = self.style.style_name(),
            "display surface rebuilt"
        );
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        if self.popup.is_open() {
            tracing::debug!(control = %self.name, "dropped while overlay open, dismissing");
            self.overlay.dismiss_all();
        }
    }
}

/// Runs queued notification delivery against a possibly dropped control.
///
/// Liveness is re-checked before each listener, and listeners removed by an
/// earlier listener in the same delivery are skipped.
fn deliver_change(weak: &Weak<RefCell<Inner>>) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    let snapshot = inner.borrow().listeners.snapshot();
    drop(inner);

    tracing::debug!(listeners = snapshot.len(), "delivering change notification");

    for (id, listener) in snapshot {
        let Some(inner) = weak.upgrade() else {
            tracing::debug!("control dropped during notification, aborting delivery");
            return;
        };
        if !inner.borrow().listeners.contains(id) {
            continue;
        }
        let combo = ComboBox { inner };
        listener.combo_box_changed(&combo);
    }
}

fn popup_finished(weak: &Weak<RefCell<Inner>>, chosen: ItemId) {
    let Some(inner) = weak.upgrade() else {
        tracing::debug!(chosen, "overlay closed after control was dropped");
        return;
    };
    let combo = ComboBox { inner };

    let apply = combo.inner.borrow_mut().popup.complete(chosen);
    tracing::debug!(chosen, "overlay closed");

    if let Some(id) = apply {
        combo.set_selected_id(id, Notification::Send);
    }
}

/// A drop-down selection control.
pub struct ComboBox {
    inner: Rc<RefCell<Inner>>,
}

impl ComboBox {
    /// Creates an empty control.
    ///
    /// The display surface comes from `style`; the popup is presented by
    /// `overlay`; change notifications are posted to `queue`, which the host
    /// must drain between events.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        style: Rc<dyn StyleProvider>,
        overlay: Rc<dyn OverlayProvider>,
        queue: MessageQueue,
    ) -> Self {
        let name = name.into();
        let mut surface = style.create_display_surface();
        surface.set_text_colour(&style.text_colour());

        let inner = Rc::new_cyclic(|weak| {
            RefCell::new(Inner {
                name,
                store: ItemStore::default(),
                selection: SelectionState::default(),
                surface,
                popup: PopupController::default(),
                listeners: ListenerList::default(),
                notifier: ChangeNotifier::new(queue),
                style,
                overlay,
                text_when_nothing_selected: String::new(),
                no_choices_text: DEFAULT_NO_CHOICES_TEXT.to_string(),
                text_colour: None,
                repaint_pending: true,
                self_ref: weak.clone(),
            })
        });

        Self { inner }
    }

    /// The control's name.
    #[must_use]
    pub fn name(&self) -> String {
        self.inner.borrow().name.clone()
    }

    // Text surface attributes

    /// Lets the user type free text into the control.
    pub fn set_editable_text(&self, editable: bool) {
        let mut inner = self.inner.borrow_mut();
        if inner.surface.is_editable() != editable {
            inner.surface.set_editable(editable);
            inner.repaint_pending = true;
        }
    }

    /// Whether the text is user-editable.
    #[must_use]
    pub fn is_text_editable(&self) -> bool {
        self.inner.borrow().surface.is_editable()
    }

    /// Whether the control itself takes key presses.
    ///
    /// Editable controls leave keys to their text editor.
    #[must_use]
    pub fn wants_keyboard_focus(&self) -> bool {
        !self.is_text_editable()
    }

    /// Sets how the displayed text is justified.
    pub fn set_justification_type(&self, justification: Justification) {
        let mut inner = self.inner.borrow_mut();
        inner.surface.set_justification(justification);
        inner.repaint_pending = true;
    }

    /// How the displayed text is justified.
    #[must_use]
    pub fn justification_type(&self) -> Justification {
        self.inner.borrow().surface.justification()
    }

    /// Sets the tooltip, forwarding it to the display surface.
    pub fn set_tooltip(&self, tooltip: &str) {
        self.inner.borrow_mut().surface.set_tooltip(tooltip);
    }

    /// The tooltip text.
    #[must_use]
    pub fn tooltip(&self) -> String {
        self.inner.borrow().surface.tooltip().to_string()
    }

    // Items

    /// Appends an item. `text` must be non-empty and `id` non-zero and unique.
    pub fn add_item(&self, text: &str, id: ItemId) {
        self.inner.borrow_mut().store.add_item(text, id);
    }

    /// Requests a separator before the next item or heading.
    pub fn add_separator(&self) {
        self.inner.borrow_mut().store.add_separator();
    }

    /// Appends a section heading.
    pub fn add_section_heading(&self, text: &str) {
        self.inner.borrow_mut().store.add_section_heading(text);
    }

    /// Enables or disables an item in the popup.
    pub fn set_item_enabled(&self, id: ItemId, enabled: bool) {
        self.inner.borrow_mut().store.set_item_enabled(id, enabled);
    }

    /// Renames an item. The displayed text is not updated.
    pub fn change_item_text(&self, id: ItemId, text: &str) {
        self.inner.borrow_mut().store.change_item_text(id, text);
    }

    /// Removes every entry.
    ///
    /// Read-only controls also lose their selection; editable ones keep
    /// whatever text is showing.
    pub fn clear(&self, notification: Notification) {
        let mut inner = self.inner.borrow_mut();
        inner.store.clear();

        if !inner.surface.is_editable() {
            inner.set_selected_id(NO_SELECTION, notification);
        }
        inner.repaint_pending = true;
    }

    /// Number of selectable items.
    #[must_use]
    pub fn num_items(&self) -> usize {
        self.inner.borrow().store.num_items()
    }

    /// Label of the item at `index`, or an empty string.
    #[must_use]
    pub fn item_text(&self, index: usize) -> String {
        self.inner.borrow().store.item_text(index).to_string()
    }

    /// Id of the item at `index`, or zero.
    #[must_use]
    pub fn item_id(&self, index: usize) -> ItemId {
        self.inner.borrow().store.item_id(index)
    }

    /// Index of the item with `id`.
    #[must_use]
    pub fn index_of_item_id(&self, id: ItemId) -> Option<usize> {
        self.inner.borrow().store.index_of_id(id)
    }

    // Selection

    /// Index of the selected item, `None` if the text matches no item.
    #[must_use]
    pub fn selected_item_index(&self) -> Option<usize> {
        self.inner.borrow().selected_index()
    }

    /// Selects the item at `index`; `None` or an out-of-range index clears
    /// the selection.
    pub fn set_selected_item_index(&self, index: Option<usize>, notification: Notification) {
        let mut inner = self.inner.borrow_mut();
        let id = index.map_or(NO_SELECTION, |i| inner.store.item_id(i));
        inner.set_selected_id(id, notification);
    }

    /// Id of the selected item, zero if the text matches no item.
    #[must_use]
    pub fn selected_id(&self) -> ItemId {
        self.inner.borrow().selected_id()
    }

    /// Selects the item with `id`. Unknown ids clear the text.
    pub fn set_selected_id(&self, id: ItemId, notification: Notification) {
        self.inner.borrow_mut().set_selected_id(id, notification);
    }

    /// The raw current id, not checked against the displayed text.
    #[must_use]
    pub fn current_id_value(&self) -> ItemId {
        self.inner.borrow().selection.current_id()
    }

    /// Assigns the current id from outside the selection API.
    ///
    /// Goes through `set_selected_id` whenever it differs from the last
    /// committed id, so listeners hear about it like any other change.
    pub fn set_current_id_value(&self, id: ItemId) {
        let mut inner = self.inner.borrow_mut();
        if inner.selection.last_committed_id() != id {
            inner.set_selected_id(id, Notification::Send);
        }
    }

    /// The displayed text.
    #[must_use]
    pub fn text(&self) -> String {
        self.inner.borrow().surface.text().to_string()
    }

    /// Shows `text`, selecting the item with that label if there is one.
    pub fn set_text(&self, text: &str, notification: Notification) {
        self.inner.borrow_mut().set_text(text, notification);
    }

    // Editing

    /// Opens the text editor. Only meaningful for editable controls.
    pub fn show_editor(&self) {
        let mut inner = self.inner.borrow_mut();
        debug_assert!(
            inner.surface.is_editable(),
            "show_editor on a read-only control"
        );
        inner.surface.show_editor();
        inner.repaint_pending = true;
    }

    /// Whether the text editor is open.
    #[must_use]
    pub fn is_being_edited(&self) -> bool {
        self.inner.borrow().surface.is_being_edited()
    }

    /// The in-progress edit text.
    #[must_use]
    pub fn editor_text(&self) -> Option<String> {
        self.inner.borrow().surface.editor_text().map(str::to_string)
    }

    /// Types a character into the open editor.
    pub fn edit_insert(&self, c: char) {
        let mut inner = self.inner.borrow_mut();
        inner.surface.insert_char(c);
        inner.repaint_pending = true;
    }

    /// Deletes the last character of the open editor.
    pub fn edit_backspace(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.surface.delete_backward();
        inner.repaint_pending = true;
    }

    /// Closes the editor and applies the typed text through `set_text`.
    pub fn commit_edit(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.repaint_pending = true;
        if let Some(text) = inner.surface.finish_edit(true) {
            tracing::trace!(text = %text, "edit committed");
            inner.set_text(&text, Notification::Send);
        }
    }

    /// Closes the editor, discarding the typed text.
    pub fn cancel_edit(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.surface.finish_edit(false);
        inner.repaint_pending = true;
    }

    // Placeholder texts

    /// Text drawn dimmed while nothing is selected.
    pub fn set_text_when_nothing_selected(&self, text: &str) {
        let mut inner = self.inner.borrow_mut();
        if inner.text_when_nothing_selected != text {
            inner.text_when_nothing_selected = text.to_string();
            inner.repaint_pending = true;
        }
    }

    /// Text drawn dimmed while nothing is selected.
    #[must_use]
    pub fn text_when_nothing_selected(&self) -> String {
        self.inner.borrow().text_when_nothing_selected.clone()
    }

    /// Label of the disabled row shown when the popup has no entries.
    pub fn set_text_when_no_choices_available(&self, text: &str) {
        self.inner.borrow_mut().no_choices_text = text.to_string();
    }

    /// Label of the disabled row shown when the popup has no entries.
    #[must_use]
    pub fn text_when_no_choices_available(&self) -> String {
        self.inner.borrow().no_choices_text.clone()
    }

    /// The placeholder to draw instead of the text, if it should be drawn.
    ///
    /// Shown only when configured, the displayed text is empty and no edit
    /// session is open.
    #[must_use]
    pub fn visible_placeholder(&self) -> Option<String> {
        let inner = self.inner.borrow();
        let visible = !inner.text_when_nothing_selected.is_empty()
            && inner.surface.text().is_empty()
            && !inner.surface.is_being_edited();
        visible.then(|| inner.text_when_nothing_selected.clone())
    }

    // Listeners

    /// Registers a change listener.
    pub fn add_listener(&self, listener: impl ComboBoxListener + 'static) -> ListenerId {
        let listener: Rc<dyn ComboBoxListener> = Rc::new(listener);
        self.inner.borrow_mut().listeners.add(listener)
    }

    /// Unregisters a change listener. Takes effect even mid-delivery.
    pub fn remove_listener(&self, id: ListenerId) {
        self.inner.borrow_mut().listeners.remove(id);
    }

    /// Whether a change notification is waiting to be delivered.
    #[must_use]
    pub fn has_pending_notification(&self) -> bool {
        self.inner.borrow().notifier.is_pending()
    }

    // Popup and keys

    /// Opens the overlay. Does nothing if it is already open.
    ///
    /// Returns immediately; the choice arrives later through the overlay
    /// provider's callback.
    pub fn show_popup(&self) {
        let (content, overlay, weak) = {
            let mut inner = self.inner.borrow_mut();
            if !inner.popup.open() {
                tracing::trace!("popup already open");
                return;
            }
            let selected = inner.selected_id();
            let content = OverlayContent::build(&inner.store, selected, &inner.no_choices_text);
            (content, Rc::clone(&inner.overlay), inner.self_ref.clone())
        };

        tracing::debug!(
            rows = content.entries.len(),
            anchor_id = content.anchor_id,
            "opening overlay"
        );
        overlay.show(content, Box::new(move |chosen| popup_finished(&weak, chosen)));
    }

    /// Whether the overlay is open.
    #[must_use]
    pub fn is_popup_active(&self) -> bool {
        self.inner.borrow().popup.is_open()
    }

    /// Handles a key press. Returns `true` if the key was used.
    pub fn key_pressed(&self, key: ComboKey) -> bool {
        match key {
            ComboKey::Up | ComboKey::Left => {
                let target = self
                    .selected_item_index()
                    .map_or(0, |i| i.saturating_sub(1));
                self.set_selected_item_index(Some(target), Notification::Send);
            }
            ComboKey::Down | ComboKey::Right => {
                let last = self.num_items().saturating_sub(1);
                let target = self.selected_item_index().map_or(0, |i| i + 1).min(last);
                self.set_selected_item_index(Some(target), Notification::Send);
            }
            ComboKey::Enter => self.show_popup(),
        }
        true
    }

    // Style

    /// Switches to a new style provider, rebuilding the display surface.
    pub fn set_style(&self, style: Rc<dyn StyleProvider>) {
        let mut inner = self.inner.borrow_mut();
        inner.style = style;
        inner.look_and_feel_changed();
    }

    /// Overrides the text colour (`None` restores the style's colour).
    pub fn set_text_colour(&self, colour: Option<String>) {
        let mut inner = self.inner.borrow_mut();
        if inner.text_colour != colour {
            inner.text_colour = colour;
            inner.look_and_feel_changed();
        }
    }

    /// The colour the text is drawn in.
    #[must_use]
    pub fn text_colour(&self) -> String {
        self.inner.borrow().surface.text_colour().to_string()
    }

    /// Returns and clears the pending repaint request.
    pub fn take_repaint_request(&self) -> bool {
        std::mem::take(&mut self.inner.borrow_mut().repaint_pending)
    }
}

impl fmt::Debug for ComboBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ComboBox")
            .field("name", &inner.name)
            .field("text", &inner.surface.text())
            .field("selected_id", &inner.selected_id())
            .field("num_items", &inner.store.num_items())
            .field("popup", &inner.popup.state())
            .finish_non_exhaustive()
    }
}
