//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::{Config, ThemeMode};
use crate::export::PaletteFormat;
use crate::models::{Lens, Locale};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,

    /// Startup language (zh or en)
    #[arg(long, value_name = "LOCALE")]
    locale: Option<String>,

    /// Startup lens (hue, dynasty, or mood)
    #[arg(long, value_name = "LENS")]
    lens: Option<String>,

    /// Start in neutral mode (true or false)
    #[arg(long, value_name = "BOOL")]
    neutral: Option<bool>,

    /// Palette export directory
    #[arg(long, value_name = "DIR")]
    export_dir: Option<PathBuf>,

    /// Default export format (json, css, tailwind, or markdown)
    #[arg(long, value_name = "FORMAT")]
    export_format: Option<String>,

    /// Default layout viewport width
    #[arg(long, value_name = "PX")]
    width: Option<u32>,

    /// Default layout viewport height
    #[arg(long, value_name = "PX")]
    height: Option<u32>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    path: Option<String>,
    ui: UiOutput,
    viewport: ViewportOutput,
    export: ExportOutput,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
    locale: Locale,
    lens: Lens,
    neutral_mode: bool,
}

#[derive(Serialize, Debug)]
struct ViewportOutput {
    width: u32,
    height: u32,
}

#[derive(Serialize, Debug)]
struct ExportOutput {
    output_dir: String,
    format: PaletteFormat,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            print_json(&to_output(&config))?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    fn is_empty(&self) -> bool {
        self.theme.is_none()
            && self.locale.is_none()
            && self.lens.is_none()
            && self.neutral.is_none()
            && self.export_dir.is_none()
            && self.export_format.is_none()
            && self.width.is_none()
            && self.height.is_none()
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --theme, --locale, --lens, \
                 --neutral, --export-dir, --export-format, --width, or --height",
            ));
        }

        // Load current configuration
        let mut config = Config::load().unwrap_or_default();

        if let Some(theme) = &self.theme {
            config.ui.theme_mode = theme
                .parse::<ThemeMode>()
                .map_err(|e| CliError::validation(e.to_string()))?;
        }

        if let Some(locale) = &self.locale {
            config.ui.locale = locale
                .parse::<Locale>()
                .map_err(|e| CliError::validation(e.to_string()))?;
        }

        if let Some(lens) = &self.lens {
            config.ui.default_lens = lens
                .parse::<Lens>()
                .map_err(|e| CliError::validation(e.to_string()))?;
        }

        if let Some(neutral) = self.neutral {
            config.ui.neutral_mode = neutral;
        }

        // Apply export_dir if provided (create if doesn't exist)
        if let Some(path) = &self.export_dir {
            std::fs::create_dir_all(path).map_err(|e| {
                CliError::io(format!(
                    "Failed to create export directory {}: {}",
                    path.display(),
                    e
                ))
            })?;

            config.export.output_dir.clone_from(path);
        }

        if let Some(format) = &self.export_format {
            config.export.default_format = format
                .parse::<PaletteFormat>()
                .map_err(|e| CliError::validation(e.to_string()))?;
        }

        if let Some(width) = self.width {
            config.viewport.width = width;
        }
        if let Some(height) = self.height {
            config.viewport.height = height;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))?;

        // Save configuration
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn to_output(config: &Config) -> ConfigOutput {
    ConfigOutput {
        path: Config::config_file_path()
            .ok()
            .map(|p| p.to_string_lossy().to_string()),
        ui: UiOutput {
            theme: config.ui.theme_mode.key().to_string(),
            locale: config.ui.locale,
            lens: config.ui.default_lens,
            neutral_mode: config.ui.neutral_mode,
        },
        viewport: ViewportOutput {
            width: config.viewport.width,
            height: config.viewport.height,
        },
        export: ExportOutput {
            output_dir: config.export.output_dir.to_string_lossy().to_string(),
            format: config.export.default_format,
        },
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("Color Vein Configuration");
    println!("========================");
    println!();

    if let Ok(path) = Config::config_file_path() {
        println!("File: {}", path.display());
        println!();
    }

    println!("UI:");
    println!("  Theme Mode: {}", config.ui.theme_mode);
    println!("  Locale: {}", config.ui.locale);
    println!("  Default Lens: {}", config.ui.default_lens);
    println!("  Neutral Mode: {}", config.ui.neutral_mode);
    println!();

    println!("Viewport:");
    println!(
        "  Size: {}x{}",
        config.viewport.width, config.viewport.height
    );
    println!();

    println!("Export:");
    println!("  Output Directory: {}", config.export.output_dir.display());
    println!("  Default Format: {}", config.export.default_format);
    println!();
}
