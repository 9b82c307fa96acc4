//! Zellij sandbox filesystem conventions.
//!
//! Plugins see the host filesystem under `/host`. Everything here maps host
//! paths into that view.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
