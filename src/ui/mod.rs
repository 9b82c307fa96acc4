//! Terminal rendering for the plugin pane.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: display-ready snapshot of the control and its list
//! - [`renderer`]: top-level rendering entry point
//! - [`components`]: header, control box, overlay list, footer
//! - [`helpers`]: cursor positioning and width fitting
//! - [`theme`]: colour schemes, which double as the control's style provider

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    ControlView, FooterInfo, HeaderInfo, OverlayRow, OverlayRowKind, OverlayView, UIViewModel,
};
