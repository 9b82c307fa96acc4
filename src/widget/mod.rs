//! The drop-down control and its building blocks.
//!
//! # Components
//!
//! - [`store`]: ordered entries with deferred separators
//! - [`selection`]: current/committed ids, re-derived against the text
//! - [`notifier`]: coalesced, deferred change notification
//! - [`popup`]: overlay content and open/closed state
//! - [`capabilities`]: traits for the display surface, overlay and style
//! - [`label`]: the default in-memory display surface
//! - [`combo`]: the [`ComboBox`] tying it all together
//!
//! # Data Flow
//!
//! ```text
//! add_item / clear ──▶ ItemStore
//!                         │
//! set_selected_id ◀── set_text / set_selected_item_index / keys / popup
//!        │
//!        ├──▶ DisplaySurface::set_text
//!        └──▶ ChangeNotifier ──(next turn)──▶ listeners
//! ```

pub mod capabilities;
pub mod combo;
pub mod label;
pub mod notifier;
pub mod popup;
pub mod selection;
pub mod store;

pub use capabilities::{
    DisplaySurface, Justification, OverlayCallback, OverlayProvider, StyleProvider,
};
pub use combo::{ComboBox, ComboBoxListener, ComboKey, Notification, DEFAULT_NO_CHOICES_TEXT};
pub use label::TextLabel;
pub use notifier::{ChangeNotifier, ListenerId, ListenerList, MessageQueue};
pub use popup::{OverlayContent, OverlayEntry, PopupController, PopupState, PLACEHOLDER_ID};
pub use selection::SelectionState;
pub use store::ItemStore;
