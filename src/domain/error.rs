//! Error types for the drop-down control and its host.
//!
//! Only recoverable failures live here: bad configuration, unreadable theme
//! files and I/O. Misuse of the control API (empty labels, a zero id, an
//! unknown id) is not an error; it trips a debug assertion and is ignored in
//! release builds.

use thiserror::Error;

/// The main error type for the crate.
///
/// # Examples
///
/// ```
/// use dropdown::DropdownError;
///
/// fn parse_entry(raw: &str) -> Result<(), DropdownError> {
///     Err(DropdownError::Config(format!("malformed entry: {raw}")))
/// }
///
/// assert!(parse_entry("x").is_err());
/// ```
#[derive(Debug, Error)]
pub enum DropdownError {
    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A theme could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A configuration value is malformed.
    ///
    /// Produced while parsing the plugin's item list and options. Callers log
    /// it and fall back to defaults.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for crate operations.
pub type Result<T> = std::result::Result<T, DropdownError>;
