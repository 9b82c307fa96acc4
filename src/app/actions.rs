//! Side effects requested by the event handler.
//!
//! The handler never calls the Zellij API itself. It returns a list of
//! [`Action`]s that the plugin shim in `main.rs` carries out, which keeps the
//! handler testable on a native target.
//!
//! # Example
//!
//! ```rust
//! use dropdown::app::Action;
//!
//! let actions = vec![Action::ScheduleNotifications];
//! assert!(actions.contains(&Action::ScheduleNotifications));
//! ```

/// Commands for the plugin runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Asks the host for a wake-up on a later turn.
    ///
    /// Queued change notifications are delivered when the resulting
    /// `NotificationsDue` event arrives, never inside the call that caused
    /// the change.
    ScheduleNotifications,
}
