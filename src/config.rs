//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

use crate::constants::{APP_DATA_DIR, CONFIG_DIR_ENV};
use crate::export::PaletteFormat;
use crate::models::{Lens, Locale};

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl ThemeMode {
    /// Lowercase key used on the command line.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ThemeMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => anyhow::bail!("Invalid theme mode. Must be 'auto', 'light', or 'dark'"),
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Language the explorer starts in
    #[serde(default)]
    pub locale: Locale,
    /// Lens the explorer starts in
    #[serde(default)]
    pub default_lens: Lens,
    /// Start with neutral (desaturated) ambience
    #[serde(default)]
    pub neutral_mode: bool,
    /// Display help on startup
    #[serde(default)]
    pub show_help_on_startup: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            locale: Locale::default(),
            default_lens: Lens::default(),
            neutral_mode: false,
            show_help_on_startup: false,
        }
    }
}

/// Default virtual viewport for headless layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
        }
    }
}

/// Largest viewport dimension accepted in config.
pub const MAX_VIEWPORT_DIMENSION: u32 = 16_384;

/// Palette export configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory exports are written to
    pub output_dir: PathBuf,
    /// Format used when none is given
    pub default_format: PaletteFormat,
}

impl Default for ExportConfig {
    fn default() -> Self {
        // Use config directory for exports by default
        let output_dir = Self::default_output_dir().unwrap_or_else(|_| PathBuf::from("exports"));

        Self {
            output_dir,
            default_format: PaletteFormat::default(),
        }
    }
}

impl ExportConfig {
    /// Gets the default export directory path.
    ///
    /// - Linux: `~/.config/ColorVein/exports/`
    /// - macOS: `~/Library/Application Support/ColorVein/exports/`
    /// - Windows: `%APPDATA%\ColorVein\exports\`
    fn default_output_dir() -> Result<PathBuf> {
        Ok(Config::config_dir()?.join("exports"))
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/ColorVein/config.toml`
/// - macOS: `~/Library/Application Support/ColorVein/config.toml`
/// - Windows: `%APPDATA%\ColorVein\config.toml`
///
/// The `COLORVEIN_CONFIG_DIR` environment variable replaces the directory.
///
/// # Validation
///
/// - viewport width and height must be between 1 and [`MAX_VIEWPORT_DIMENSION`]
/// - export `output_dir` must not be empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Headless layout viewport
    #[serde(default)]
    pub viewport: ViewportConfig,
    /// Palette export settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path.
    ///
    /// Honors `COLORVEIN_CONFIG_DIR`, otherwise the platform config directory
    /// joined with `ColorVein`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Directory the explorer writes its log file to.
    pub fn log_dir() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("logs"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        Self::from_toml(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        // Serialize to TOML
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        // Write to temp file
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        info!(path = %config_path.display(), "saved configuration");
        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        let ViewportConfig { width, height } = self.viewport;
        if width == 0 || height == 0 {
            anyhow::bail!("Viewport dimensions must be positive (got {width}x{height})");
        }
        if width > MAX_VIEWPORT_DIMENSION || height > MAX_VIEWPORT_DIMENSION {
            anyhow::bail!(
                "Viewport dimensions must not exceed {MAX_VIEWPORT_DIMENSION} (got {width}x{height})"
            );
        }

        if self.export.output_dir.as_os_str().is_empty() {
            anyhow::bail!("Export output directory cannot be empty");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert_eq!(config.ui.locale, Locale::Zh);
        assert_eq!(config.ui.default_lens, Lens::Hue);
        assert!(!config.ui.neutral_mode);
        assert_eq!(config.viewport, ViewportConfig { width: 1200, height: 800 });
        assert_eq!(config.export.default_format, PaletteFormat::Json);
    }

    #[test]
    fn test_config_validate() {
        let mut config = Config::new();
        assert!(config.validate().is_ok());

        config.viewport.width = 0;
        assert!(config.validate().is_err());

        config.viewport.width = MAX_VIEWPORT_DIMENSION + 1;
        assert!(config.validate().is_err());

        config.viewport.width = 640;
        config.export.output_dir = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_toml_round_trip() {
        let mut config = Config::new();
        config.ui.theme_mode = ThemeMode::Light;
        config.ui.locale = Locale::En;
        config.ui.default_lens = Lens::Mood;
        config.export.output_dir = PathBuf::from("/tmp/palettes");
        config.export.default_format = PaletteFormat::Css;

        let content = toml::to_string_pretty(&config).unwrap();
        assert!(content.contains("default_lens = \"mood\""));
        let loaded = Config::from_toml(&content).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let loaded = Config::from_toml("[ui]\nlocale = \"en\"\n").unwrap();
        assert_eq!(loaded.ui.locale, Locale::En);
        assert_eq!(loaded.ui.theme_mode, ThemeMode::Auto);
        assert_eq!(loaded.viewport.width, 1200);
    }

    #[test]
    fn test_invalid_file_rejected() {
        assert!(Config::from_toml("[viewport]\nwidth = 0\nheight = 10\n").is_err());
        assert!(Config::from_toml("[ui]\ndefault_lens = \"rainbow\"\n").is_err());
    }

    #[test]
    fn test_theme_mode_parsing() {
        assert_eq!("auto".parse::<ThemeMode>().unwrap(), ThemeMode::Auto);
        assert_eq!("Light".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert_eq!("dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert!("sepia".parse::<ThemeMode>().is_err());
    }
}
