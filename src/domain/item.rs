//! Entry model held by the item store.
//!
//! An entry is one row of the drop-down list: a selectable item, a section
//! heading or a separator. Separators are encoded as entries with an empty
//! name, headings carry a name but never an identifier.
//!
//! [`ItemSpec`] is the textual form of an entry used in plugin configuration.

use std::str::FromStr;

use super::error::DropdownError;

/// Caller-assigned identifier of a selectable item.
///
/// Identifiers are plain integers so that hosts can map them onto their own
/// enumerations. Zero is reserved, see [`NO_SELECTION`].
pub type ItemId = i32;

/// The reserved identifier meaning "nothing selected" or "not selectable".
pub const NO_SELECTION: ItemId = 0;

/// One row of the drop-down list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Display label. Empty for separators.
    pub name: String,
    /// Identifier, [`NO_SELECTION`] for separators and headings.
    pub id: ItemId,
    /// Whether the item can be chosen from the overlay.
    pub enabled: bool,
    /// Section headings are labelled but never selectable.
    pub is_heading: bool,
}

impl Entry {
    /// Creates a selectable, enabled item.
    #[must_use]
    pub fn item(name: impl Into<String>, id: ItemId) -> Self {
        Self {
            name: name.into(),
            id,
            enabled: true,
            is_heading: false,
        }
    }

    /// Creates a section heading.
    #[must_use]
    pub fn heading(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: NO_SELECTION,
            enabled: true,
            is_heading: true,
        }
    }

    /// Creates a separator.
    #[must_use]
    pub const fn separator() -> Self {
        Self {
            name: String::new(),
            id: NO_SELECTION,
            enabled: false,
            is_heading: false,
        }
    }

    /// Returns `true` if this entry is drawn as a divider line.
    #[must_use]
    pub fn is_separator(&self) -> bool {
        self.name.is_empty()
    }

    /// Returns `true` for entries that can be selected, counted and indexed.
    ///
    /// Headings and separators are never real.
    #[must_use]
    pub fn is_real(&self) -> bool {
        !(self.is_heading || self.name.is_empty())
    }
}

/// One entry of a configured item list.
///
/// | Text          | Meaning                 |
/// |---------------|-------------------------|
/// | `3:Banana`    | item with id 3          |
/// | `!4:Cherry`   | disabled item with id 4 |
/// | `-`           | separator               |
/// | `#Fruit`      | section heading         |
///
/// ```
/// use dropdown::domain::ItemSpec;
///
/// let spec: ItemSpec = "!4:Cherry".parse().unwrap();
/// assert_eq!(spec, ItemSpec::Item { id: 4, label: "Cherry".into(), enabled: false });
/// assert!("0:Nothing".parse::<ItemSpec>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemSpec {
    /// A selectable item.
    Item {
        /// Non-zero identifier.
        id: ItemId,
        /// Non-empty label.
        label: String,
        /// Whether it starts enabled.
        enabled: bool,
    },
    /// A separator before the next item or heading.
    Separator,
    /// A section heading.
    Heading(String),
}

impl FromStr for ItemSpec {
    type Err = DropdownError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        let invalid = |why: &str| DropdownError::Config(format!("item `{raw}`: {why}"));

        if raw == "-" {
            return Ok(Self::Separator);
        }

        if let Some(heading) = raw.strip_prefix('#') {
            let heading = heading.trim();
            if heading.is_empty() {
                return Err(invalid("heading needs a label"));
            }
            return Ok(Self::Heading(heading.to_string()));
        }

        let (enabled, rest) = match raw.strip_prefix('!') {
            Some(rest) => (false, rest),
            None => (true, raw),
        };

        let (id, label) = rest
            .split_once(':')
            .ok_or_else(|| invalid("expected `id:label`"))?;
        let id: ItemId = id
            .trim()
            .parse()
            .map_err(|_| invalid("id is not an integer"))?;
        let label = label.trim();

        if id == NO_SELECTION {
            return Err(invalid("id 0 is reserved"));
        }
        if label.is_empty() {
            return Err(invalid("label is empty"));
        }

        Ok(Self::Item {
            id,
            label: label.to_string(),
            enabled,
        })
    }
}
