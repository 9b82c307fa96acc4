//! Domain layer: the entry model, its configuration form and the crate
//! error type.
//!
//! # Examples
//!
//! ```
//! use dropdown::domain::{Entry, NO_SELECTION};
//!
//! let entry = Entry::item("Apple", 1);
//! assert!(entry.is_real());
//! assert_ne!(entry.id, NO_SELECTION);
//! ```

pub mod error;
pub mod item;

pub use error::{DropdownError, Result};
pub use item::{Entry, ItemId, ItemSpec, NO_SELECTION};
