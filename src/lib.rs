//! Dropdown: a drop-down selection control, hosted as a Zellij plugin.
//!
//! The crate provides:
//! - [`widget::ComboBox`], an ordered list of items, headings and separators
//!   with a single current selection kept in sync with a displayed text
//! - change notification coalesced to one delivery per update cycle and
//!   always delivered on a later turn of the host's event loop
//! - an overlay list that reports its choice through the same path as
//!   programmatic selection
//! - a terminal host (`main.rs`) that renders the control and routes keys

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event routing per input mode                     │
//! │  - Terminal overlay provider                        │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                   │
//! ┌───────────────────────────┐   ┌───────────────────┐
//! │ Widget Layer (widget/)    │   │ UI Layer (ui/)    │
//! │ - Item store, selection   │   │ - Rendering       │
//! │ - Change notifier         │   │ - Theming         │
//! │ - Popup controller        │   │ - Components      │
//! └───────────────────────────┘   └───────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Infrastructure, Observability              │
//! │  - Entries and errors (domain/)                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - File-based OTLP tracing (observability/)         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`widget`]: the control and its collaborators' interfaces
//! - [`app`]: host state machine with event/action model
//! - [`ui`]: terminal rendering with theme support
//! - [`domain`]: entry model and error type
//! - [`infrastructure`]: sandbox path helpers
//! - [`observability`]: tracing setup
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/dropdown.wasm" {
//!         name "fruit"
//!         items "#Fruit,1:Apple,2:Banana,-,!3:Cherry"
//!         selected "2"
//!         nothing_selected_text "pick one"
//!         justification "centred"
//!         theme "catppuccin-latte"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use dropdown::{handle_event, initialize, Config, Event};
//!
//! let mut options = BTreeMap::new();
//! options.insert("items".to_string(), "1:Apple,2:Banana".to_string());
//! options.insert("selected".to_string(), "1".to_string());
//!
//! let mut state = initialize(&Config::from_zellij(&options));
//! assert_eq!(state.combo.text(), "Apple");
//!
//! let (_render, _actions) = handle_event(&mut state, &Event::KeyDown)?;
//! assert_eq!(state.combo.selected_id(), 2);
//! # Ok::<(), dropdown::DropdownError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;
pub mod widget;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{DropdownError, ItemId, ItemSpec, Result};
pub use ui::Theme;
pub use widget::{ComboBox, Justification, Notification};

use std::collections::{BTreeMap, HashSet};

/// Plugin configuration parsed from the Zellij layout.
#[derive(Debug, Clone)]
pub struct Config {
    /// Control name, shown in the header. Default: `"dropdown"`.
    pub name: String,

    /// Raw comma-separated entries, see [`ItemSpec`] for the syntax.
    ///
    /// Parsed by [`initialize`] so that rejected entries are logged.
    pub items: Vec<String>,

    /// Id selected at startup, without notification.
    pub selected: Option<ItemId>,

    /// Whether the text can be typed into. Default: `false`.
    pub editable: bool,

    /// Dimmed text shown while nothing is selected.
    pub nothing_selected_text: Option<String>,

    /// Label of the placeholder row of an empty list.
    pub no_choices_text: Option<String>,

    /// Text placement inside the control box.
    pub justification: Justification,

    /// Tooltip shown beside the control.
    pub tooltip: Option<String>,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Custom TOML theme path, already mapped into the sandbox.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: "dropdown".to_string(),
            items: vec![],
            selected: None,
            editable: false,
            nothing_selected_text: None,
            no_choices_text: None,
            justification: Justification::Left,
            tooltip: None,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unparseable scalar values fall back to their defaults.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use dropdown::{Config, Justification};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("items".to_string(), "1:Apple, -, 2:Banana".to_string());
    /// map.insert("justification".to_string(), "right".to_string());
    /// map.insert("selected".to_string(), "soon".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.items, vec!["1:Apple", "-", "2:Banana"]);
    /// assert_eq!(config.justification, Justification::Right);
    /// assert_eq!(config.selected, None);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let text = |key: &str| config.get(key).filter(|v| !v.is_empty()).cloned();

        let items = config
            .get("items")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|e| !e.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            name: text("name").unwrap_or_else(|| "dropdown".to_string()),
            items,
            selected: config.get("selected").and_then(|s| s.trim().parse().ok()),
            editable: config
                .get("editable")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(false),
            nothing_selected_text: text("nothing_selected_text"),
            no_choices_text: text("no_choices_text"),
            justification: config
                .get("justification")
                .and_then(|s| Justification::from_name(s))
                .unwrap_or_default(),
            tooltip: text("tooltip"),
            theme_name: text("theme"),
            theme_file: text("theme_file").map(|p| infrastructure::expand_tilde(&p)),
            trace_level: text("trace_level"),
        }
    }
}

/// Resolves the configured theme, falling back to the default.
fn resolve_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        return Theme::from_file(theme_file).unwrap_or_else(|e| {
            tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
            Theme::default()
        });
    }

    config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
        Theme::from_name(theme_name).unwrap_or_else(|| {
            tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
            Theme::default()
        })
    })
}

/// Builds the application state described by `config`.
///
/// Malformed or duplicate item entries are logged and skipped. The initial
/// selection is applied without notification.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    let _span = tracing::debug_span!("initialize", control = %config.name).entered();

    let state = AppState::new(&config.name, resolve_theme(config));
    let combo = &state.combo;

    combo.set_editable_text(config.editable);
    combo.set_justification_type(config.justification);
    if let Some(tooltip) = &config.tooltip {
        combo.set_tooltip(tooltip);
    }
    if let Some(text) = &config.nothing_selected_text {
        combo.set_text_when_nothing_selected(text);
    }
    if let Some(text) = &config.no_choices_text {
        combo.set_text_when_no_choices_available(text);
    }

    let mut seen = HashSet::new();
    for raw in &config.items {
        match raw.parse::<ItemSpec>() {
            Ok(ItemSpec::Item { id, label, enabled }) => {
                if !seen.insert(id) {
                    tracing::warn!(id, "duplicate item id, skipping");
                    continue;
                }
                combo.add_item(&label, id);
                if !enabled {
                    combo.set_item_enabled(id, false);
                }
            }
            Ok(ItemSpec::Separator) => combo.add_separator(),
            Ok(ItemSpec::Heading(text)) => combo.add_section_heading(&text),
            Err(e) => tracing::warn!(error = %e, "skipping item"),
        }
    }

    if let Some(id) = config.selected {
        combo.set_selected_id(id, Notification::DontSend);
    }

    tracing::debug!(
        items = combo.num_items(),
        selected = combo.selected_id(),
        theme = %state.theme.name,
        "plugin initialized"
    );

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn options(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn defaults_when_unconfigured() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config.name, "dropdown");
        assert!(config.items.is_empty());
        assert!(!config.editable);
        assert_eq!(config.justification, Justification::Left);
    }

    #[test]
    fn parses_scalar_options() {
        let config = Config::from_zellij(&options(&[
            ("name", "fruit"),
            ("editable", "true"),
            ("selected", " 3 "),
            ("justification", "centered"),
            ("theme_file", "~/themes/mine.toml"),
            ("tooltip", ""),
        ]));

        assert_eq!(config.name, "fruit");
        assert!(config.editable);
        assert_eq!(config.selected, Some(3));
        assert_eq!(config.justification, Justification::Centred);
        assert_eq!(config.theme_file.as_deref(), Some("/host/themes/mine.toml"));
        assert_eq!(config.tooltip, None);
    }

    #[test]
    fn initialize_populates_and_selects_silently() {
        let config = Config::from_zellij(&options(&[
            ("items", "#Fruit,1:Apple,-,!2:Banana,bogus,1:Again,3:Cherry"),
            ("selected", "3"),
            ("no_choices_text", "empty"),
        ]));

        let state = initialize(&config);
        let combo = &state.combo;

        assert_eq!(combo.num_items(), 3);
        assert_eq!(combo.item_text(0), "Apple");
        assert_eq!(combo.selected_id(), 3);
        assert_eq!(combo.text_when_no_choices_available(), "empty");
        assert!(!combo.has_pending_notification());
        assert_eq!(state.queue.pending(), 0);
    }

    #[test]
    fn initialize_applies_surface_options() {
        let config = Config::from_zellij(&options(&[
            ("editable", "true"),
            ("justification", "right"),
            ("tooltip", "choose wisely"),
            ("nothing_selected_text", "none yet"),
        ]));

        let state = initialize(&config);
        assert!(state.combo.is_text_editable());
        assert_eq!(state.combo.justification_type(), Justification::Right);
        assert_eq!(state.combo.tooltip(), "choose wisely");
        assert_eq!(state.combo.visible_placeholder().as_deref(), Some("none yet"));
    }

    #[test]
    fn theme_resolution_falls_back() {
        let unknown = Config {
            theme_name: Some("nope".into()),
            ..Config::default()
        };
        assert_eq!(resolve_theme(&unknown).name, "catppuccin-mocha");

        let missing = Config {
            theme_file: Some("/definitely/not/here.toml".into()),
            theme_name: Some("catppuccin-latte".into()),
            ..Config::default()
        };
        assert_eq!(resolve_theme(&missing).name, "catppuccin-mocha");
    }

    #[test]
    fn theme_file_wins_over_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let source = include_str!("../themes/catppuccin-latte.toml").replace("catppuccin-latte", "custom");
        file.write_all(source.as_bytes()).unwrap();

        let config = Config {
            theme_file: Some(file.path().to_string_lossy().into_owned()),
            theme_name: Some("catppuccin-mocha".into()),
            ..Config::default()
        };
        assert_eq!(initialize(&config).theme.name, "custom");
    }
}
