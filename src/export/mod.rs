//! Palette export.
//!
//! Renders the colors of a palette as JSON, CSS custom properties, a Tailwind
//! color map or a Markdown table. Rendering is pure; writing to disk is a
//! separate step so the CLI can print to stdout instead.

pub mod markdown;
pub mod web;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, warn};

use crate::models::{ColorDataset, Palette, TraditionalColor};

pub use markdown::generate_markdown_table;
pub use web::{generate_css, generate_json, generate_tailwind};

/// Output format for a palette export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteFormat {
    /// Pretty JSON array of name / pinyin / hex / rgb
    #[default]
    Json,
    /// `:root` block of CSS custom properties
    Css,
    /// Tailwind `colors` object
    Tailwind,
    /// Markdown table
    Markdown,
}

impl PaletteFormat {
    /// Every format, in menu order.
    pub const ALL: [Self; 4] = [Self::Json, Self::Css, Self::Tailwind, Self::Markdown];

    /// Lowercase key used on the command line and in config.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Css => "css",
            Self::Tailwind => "tailwind",
            Self::Markdown => "markdown",
        }
    }

    /// File extension for exported files.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Css => "css",
            Self::Tailwind => "js",
            Self::Markdown => "md",
        }
    }
}

impl fmt::Display for PaletteFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PaletteFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "css" => Ok(Self::Css),
            "tailwind" | "tw" => Ok(Self::Tailwind),
            "markdown" | "md" => Ok(Self::Markdown),
            other => anyhow::bail!(
                "Unknown export format '{other}'. Must be 'json', 'css', 'tailwind', or 'markdown'"
            ),
        }
    }
}

/// Resolves palette ids against the dataset, in palette order.
///
/// Ids missing from the dataset are skipped with a warning.
#[must_use]
pub fn palette_colors<'a>(palette: &Palette, dataset: &'a ColorDataset) -> Vec<&'a TraditionalColor> {
    palette
        .ids()
        .filter_map(|id| {
            let color = dataset.get(id);
            if color.is_none() {
                warn!(color = id, "palette entry not found in dataset, skipping");
            }
            color
        })
        .collect()
}

/// Renders colors in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_palette(colors: &[&TraditionalColor], format: PaletteFormat) -> Result<String> {
    match format {
        PaletteFormat::Json => generate_json(colors),
        PaletteFormat::Css => Ok(generate_css(colors)),
        PaletteFormat::Tailwind => generate_tailwind(colors),
        PaletteFormat::Markdown => Ok(generate_markdown_table(colors)),
    }
}

/// Default export file name: `colorvein_palette_<date>.<ext>`.
#[must_use]
pub fn default_file_name(format: PaletteFormat) -> PathBuf {
    let date = chrono::Local::now().format("%Y-%m-%d");
    PathBuf::from(format!("colorvein_palette_{}.{}", date, format.extension()))
}

/// Writes rendered export content, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be written.
pub fn write_export(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context(format!(
            "Failed to create export directory: {}",
            parent.display()
        ))?;
    }

    fs::write(path, content).context(format!("Failed to write export file: {}", path.display()))?;
    info!(path = %path.display(), bytes = content.len(), "exported palette");
    Ok(())
}
