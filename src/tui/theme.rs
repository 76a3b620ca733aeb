//! Theme system for consistent UI colors across dark and light modes.
//!
//! This module provides a centralized theme management system that automatically
//! detects the OS theme (dark/light mode) and applies appropriate colors. It also
//! decides the ambient canvas color behind the orbs.

use ratatui::style::Color;

use crate::config::ThemeMode;
use crate::models::RgbColor;

/// Canvas color in neutral mode: a mid grey so hues are judged without tint.
pub const NEUTRAL_CANVAS: Color = Color::Rgb(92, 92, 92);

/// Brightness percentage of the selected color when used as ambient canvas tint.
const AMBIENT_DIM_PERCENT: u8 = 14;

/// Semantic color theme for the TUI.
///
/// Provides consistent colors across all UI components with support
/// for both dark and light terminal backgrounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // Primary UI colors
    /// Primary color for borders, titles, and emphasis
    pub primary: Color,
    /// Accent color for highlights, selections, and focus states
    pub accent: Color,
    /// Success state color for confirmations and success messages
    pub success: Color,
    /// Error state color for errors and destructive actions
    pub error: Color,
    /// Warning state color for warnings and cautions
    pub warning: Color,

    // Text hierarchy
    /// Primary text content color
    pub text: Color,
    /// Secondary text color for labels and less important content
    pub text_secondary: Color,
    /// Muted text color for help text, the vein stem, and dim content
    pub text_muted: Color,

    // Backgrounds
    /// Main background color
    pub background: Color,
    /// Highlight/selection background color
    pub highlight_bg: Color,
    /// Surface color for panels and elevated elements
    pub surface: Color,

    /// Whether this is the light variant
    pub is_light: bool,
}

impl Theme {
    /// Detects the OS theme and returns the appropriate Theme.
    ///
    /// This uses the `dark-light` crate to detect whether the OS is in
    /// dark or light mode, and returns the matching theme.
    #[must_use]
    pub fn detect() -> Self {
        Self::for_os_mode(dark_light::detect())
    }

    /// Theme for a mode reported by the OS. Unknown modes get the dark theme.
    #[must_use]
    pub const fn for_os_mode(mode: dark_light::Mode) -> Self {
        match mode {
            dark_light::Mode::Light => Self::light(),
            dark_light::Mode::Dark | dark_light::Mode::Default => Self::dark(),
        }
    }

    /// Theme for a configured mode; `Auto` asks the OS.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Creates a dark theme optimized for dark terminal backgrounds.
    ///
    /// Ink-and-paper tones: warm off-white text on near-black, vermilion accent.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Rgb(201, 171, 120),
            accent: Color::Rgb(255, 70, 31),
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,

            text: Color::Rgb(245, 240, 232),
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Rgb(10, 10, 10),
            highlight_bg: Color::Rgb(40, 38, 35),
            surface: Color::Rgb(24, 23, 21),

            is_light: false,
        }
    }

    /// Creates a light theme optimized for light terminal backgrounds.
    ///
    /// All text colors meet WCAG AA contrast against the background.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Rgb(107, 72, 32),
            accent: Color::Rgb(176, 36, 24),
            success: Color::Rgb(0, 128, 0),
            error: Color::Red,
            warning: Color::Rgb(200, 100, 0),

            text: Color::Rgb(26, 26, 26),
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,

            background: Color::Rgb(245, 240, 232),
            highlight_bg: Color::Rgb(230, 224, 212),
            surface: Color::Rgb(238, 232, 222),

            is_light: true,
        }
    }

    /// Canvas color behind the orbs.
    ///
    /// Neutral mode wins; otherwise the selected color tints the canvas.
    #[must_use]
    pub fn ambient(&self, selected: Option<RgbColor>, neutral_mode: bool) -> Color {
        if neutral_mode {
            return NEUTRAL_CANVAS;
        }
        match selected {
            Some(rgb) if !self.is_light => rgb.dim(AMBIENT_DIM_PERCENT).to_ratatui_color(),
            _ => self.background,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
