//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system for the dashboard, supporting
//! both built-in themes (Catppuccin variants) and custom themes loaded from
//! TOML files. It provides utilities for converting hex colors to ANSI
//! escape sequences.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//! - `catppuccin-frappe`: Cool dark theme
//! - `catppuccin-macchiato`: Warm dark theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! tier1_fg = "#a6e3a1"
//! tier2_fg = "#89b4fa"
//! tier3_fg = "#f38ba8"
//! score_high_fg = "#a6e3a1"
//! score_mid_fg = "#f9e2af"
//! score_low_fg = "#f38ba8"
//! badge_strong_fg = "#a6e3a1"
//! badge_soft_fg = "#f9e2af"
//! badge_off_fg = "#6c7086"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::{Result, StackdashError};
use crate::ui::viewmodel::{BadgeEmphasis, ScoreBucket};

/// Color scheme configuration for UI rendering.
///
/// Contains theme metadata and color definitions. Can be loaded from
/// built-in themes or custom TOML files.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are specified as hex strings (e.g., "#cdd6f4").
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Cursor row foreground color.
    pub selection_fg: String,
    /// Cursor row background color.
    pub selection_bg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Search bar border color.
    pub search_bar_border: String,
    /// Search match highlight foreground.
    pub match_highlight_fg: String,
    /// Search match highlight background.
    pub match_highlight_bg: String,

    /// Empty state message color.
    pub empty_state_fg: String,

    /// Tier 1 badge color.
    pub tier1_fg: String,
    /// Tier 2 badge color.
    pub tier2_fg: String,
    /// Tier 3 badge color.
    pub tier3_fg: String,

    /// High score bucket color (80 and above).
    pub score_high_fg: String,
    /// Mid score bucket color (70 to 79).
    pub score_mid_fg: String,
    /// Low score bucket color (below 70).
    pub score_low_fg: String,

    /// Color for official/enabled badges.
    pub badge_strong_fg: String,
    /// Color for community badges.
    pub badge_soft_fg: String,
    /// Color for absent badges.
    pub badge_off_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `catppuccin-mocha`, `catppuccin-latte`,
    /// `catppuccin-frappe`, `catppuccin-macchiato`. Returns `None` for
    /// unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`StackdashError::Theme`] if the file cannot be read or the
    /// TOML content cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| StackdashError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| StackdashError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Returns the foreground color for a tier badge.
    #[must_use]
    pub fn tier_fg(&self, tier: u8) -> &str {
        match tier {
            1 => &self.colors.tier1_fg,
            2 => &self.colors.tier2_fg,
            _ => &self.colors.tier3_fg,
        }
    }

    /// Returns the foreground color for a score bucket.
    #[must_use]
    pub fn score_fg(&self, bucket: ScoreBucket) -> &str {
        match bucket {
            ScoreBucket::High => &self.colors.score_high_fg,
            ScoreBucket::Mid => &self.colors.score_mid_fg,
            ScoreBucket::Low => &self.colors.score_low_fg,
        }
    }

    /// Returns the foreground color for a badge emphasis.
    #[must_use]
    pub fn badge_fg(&self, emphasis: BadgeEmphasis) -> &str {
        match emphasis {
            BadgeEmphasis::Strong => &self.colors.badge_strong_fg,
            BadgeEmphasis::Soft => &self.colors.badge_soft_fg,
            BadgeEmphasis::Off => &self.colors.badge_off_fg,
        }
    }

    /// Converts a hex color to RGB tuple.
    ///
    /// Strips `#` prefix if present, validates length, and parses hex
    /// digits. Returns `(255, 255, 255)` (white) on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence.
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence.
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence.
    ///
    /// Clears all styling (colors, bold, dim, etc.).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("Built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_all_parse() {
        for name in [
            "catppuccin-mocha",
            "catppuccin-latte",
            "catppuccin-frappe",
            "catppuccin-macchiato",
        ] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn unknown_theme_name_is_none() {
        assert!(Theme::from_name("solarized-dark").is_none());
    }

    #[test]
    fn fg_emits_truecolor_sequence() {
        assert_eq!(Theme::fg("#ff0080"), "\u{001b}[38;2;255;0;128m");
        assert_eq!(Theme::bg("00ff00"), "\u{001b}[48;2;0;255;0m");
        // Malformed hex falls back to white instead of panicking.
        assert_eq!(Theme::fg("#xyz"), "\u{001b}[38;2;255;255;255m");
    }

    #[test]
    fn tier_and_bucket_lookups_use_palette() {
        let theme = Theme::default();
        assert_eq!(theme.tier_fg(1), theme.colors.tier1_fg);
        assert_eq!(theme.tier_fg(9), theme.colors.tier3_fg);
        assert_eq!(
            theme.score_fg(ScoreBucket::Mid),
            theme.colors.score_mid_fg
        );
        assert_eq!(
            theme.badge_fg(BadgeEmphasis::Off),
            theme.colors.badge_off_fg
        );
    }

    #[test]
    fn from_file_loads_custom_theme() {
        let theme = Theme::default();
        let toml_str = toml::to_string(&theme).unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(toml_str.as_bytes()).unwrap();

        let loaded = Theme::from_file(file.path()).unwrap();
        assert_eq!(loaded.name, theme.name);
    }

    #[test]
    fn from_file_rejects_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = [broken").unwrap();

        let err = Theme::from_file(file.path()).unwrap_err();
        assert!(matches!(err, StackdashError::Theme(_)));
    }
}
