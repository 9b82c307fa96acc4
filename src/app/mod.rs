//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the plugin runtime (`main.rs`) and the control in
//! [`crate::widget`]. It owns the control, routes key presses to it or to the
//! open overlay, and turns queued change notifications into host wake-ups.
//!
//! # Architecture
//!
//! ```text
//! Key / Timer → Event → handle_event → ComboBox / TerminalOverlay
//!                            │
//!                            └──▶ Actions (CloseFocus, ScheduleNotifications)
//! ```
//!
//! # Modules
//!
//! - [`actions`]: side effect commands emitted by the event handler
//! - [`handler`]: event routing per input mode
//! - [`modes`]: the derived input mode
//! - [`overlay`]: the terminal overlay provider
//! - [`state`]: application state and view model computation
//!
//! # Example
//!
//! ```rust
//! use dropdown::app::{handle_event, AppState, Event};
//! use dropdown::ui::Theme;
//!
//! let mut state = AppState::new("fruit", Theme::default());
//! let (_render, _actions) = handle_event(&mut state, &Event::KeyDown)?;
//! # Ok::<(), dropdown::DropdownError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod overlay;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::InputMode;
pub use overlay::{HighlightMove, TerminalOverlay};
pub use state::{AppState, ChangeRecord};
