//! Theme management and ANSI escape sequence generation.
//!
//! A [`Theme`] is both the colour palette used by the renderer and the
//! [`StyleProvider`] handed to the control: it builds the control's display
//! surface and tells it which colour to draw text in.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: dark (default)
//! - `catppuccin-latte`: light
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! control_fg = "#cdd6f4"
//! control_border = "#89b4fa"
//! arrow_fg = "#f5c2e7"
//! placeholder_fg = "#6c7086"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! highlight_fg = "#1e1e2e"
//! highlight_bg = "#f5c2e7"
//! heading_fg = "#f9e2af"
//! disabled_fg = "#585b70"
//! checked_fg = "#a6e3a1"
//! notice_fg = "#89b4fa"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::{DropdownError, Result};
use crate::widget::{DisplaySurface, StyleProvider, TextLabel};

/// Colour scheme for the control and its overlay.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Palette.
    pub colors: ThemeColors,
}

/// Hex colours for every drawn element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text.
    pub header_fg: String,
    /// Optional header background.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Text inside the control box.
    pub control_fg: String,
    /// Frame around the control box.
    pub control_border: String,
    /// Drop-down arrow.
    pub arrow_fg: String,
    /// "Nothing selected" placeholder.
    pub placeholder_fg: String,

    /// Secondary text (footer).
    pub text_dim: String,
    /// Horizontal rules and overlay separators.
    pub border: String,

    /// Highlighted overlay row foreground.
    pub highlight_fg: String,
    /// Highlighted overlay row background.
    pub highlight_bg: String,
    /// Section headings in the overlay.
    pub heading_fg: String,
    /// Disabled overlay rows.
    pub disabled_fg: String,
    /// Tick mark beside the current selection.
    pub checked_fg: String,

    /// Last change notification shown in the footer.
    pub notice_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// ```rust
    /// use dropdown::ui::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`DropdownError::Io`] if the file cannot be read and
    /// [`DropdownError::Theme`] if it is not a valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| DropdownError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground escape for a hex colour.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for a hex colour.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// ANSI bold.
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// ANSI dim.
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// ANSI reset.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    ///
    /// # Panics
    ///
    /// Panics if the bundled theme fails to parse, which the tests rule out.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("Built-in catppuccin-mocha theme should always parse")
    }
}

impl StyleProvider for Theme {
    fn style_name(&self) -> &str {
        &self.name
    }

    fn create_display_surface(&self) -> Box<dyn DisplaySurface> {
        Box::new(TextLabel::new())
    }

    fn text_colour(&self) -> String {
        self.colors.control_fg.clone()
    }
}
