//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` from the
//! control, the overlay and the footer notice, and consumed by the renderer.
//! They carry display-ready data only: text already fitted to width, rows
//! already windowed, flags already resolved.
//!
//! # Example
//!
//! ```rust
//! use dropdown::ui::viewmodel::{ControlView, FooterInfo, HeaderInfo, UIViewModel};
//! use dropdown::widget::Justification;
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: " fruit ".to_string() },
//!     control: ControlView {
//!         text: "Banana".to_string(),
//!         is_placeholder: false,
//!         is_editing: false,
//!         justification: Justification::Left,
//!         text_colour: "#cdd6f4".to_string(),
//!         popup_open: false,
//!         tooltip: String::new(),
//!         width: 30,
//!     },
//!     overlay: None,
//!     footer: FooterInfo { keybindings: "q: quit".to_string(), notice: None },
//! };
//! assert!(vm.overlay.is_none());
//! ```

use crate::widget::Justification;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Title bar.
    pub header: HeaderInfo,

    /// The closed control box.
    pub control: ControlView,

    /// The open list, if any.
    pub overlay: Option<OverlayView>,

    /// Help text and the last change notice.
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// What the control box shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlView {
    /// Text to draw: the displayed text, the edit buffer, or the placeholder.
    pub text: String,

    /// Whether `text` is the "nothing selected" placeholder (drawn dimmed).
    pub is_placeholder: bool,

    /// Whether `text` is an in-progress edit (drawn with a cursor).
    pub is_editing: bool,

    /// Horizontal placement of `text` inside the box.
    pub justification: Justification,

    /// Colour the control reports for its text.
    pub text_colour: String,

    /// Whether the arrow should point up.
    pub popup_open: bool,

    /// Tooltip, shown beside the box when non-empty.
    pub tooltip: String,

    /// Outer width of the box in columns.
    pub width: usize,
}

/// The visible window of the overlay list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayView {
    /// Rows in display order.
    pub rows: Vec<OverlayRow>,

    /// Whether rows were cut off above the window.
    pub more_above: bool,

    /// Whether rows were cut off below the window.
    pub more_below: bool,
}

/// One overlay row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayRow {
    /// What the row is.
    pub kind: OverlayRowKind,

    /// Whether the keyboard highlight is on this row.
    pub is_highlighted: bool,
}

/// Row content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayRowKind {
    /// Divider line.
    Separator,
    /// Section title.
    Heading(String),
    /// An item.
    Item {
        /// Row label.
        label: String,
        /// Whether it can be chosen.
        enabled: bool,
        /// Whether it is the current selection.
        checked: bool,
    },
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,

    /// Description of the last delivered change notification.
    pub notice: Option<String>,
}
