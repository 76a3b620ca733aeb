//! Palette commands: export and suggestions.
//!
//! The palette is built from `--color` arguments through the palette store, so
//! duplicates and anything past the eighth color are dropped exactly as in the
//! explorer.

use crate::cli::common::{print_json, CliContext, CliError, CliResult};
use crate::config::Config;
use crate::export::{self, PaletteFormat};
use crate::models::{ColorDataset, Palette, PALETTE_CAPACITY};
use crate::services::similarity::{suggest_complements, SUGGESTION_COUNT};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

/// Build a palette and export it or ask for suggestions
#[derive(Debug, Clone, Args)]
pub struct PaletteArgs {
    /// Palette subcommand
    #[command(subcommand)]
    pub command: PaletteCommand,
}

/// Palette subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum PaletteCommand {
    /// Export palette colors as JSON, CSS, Tailwind or Markdown
    Export(PaletteExportArgs),
    /// Suggest colors that complement the palette
    Suggest(PaletteSuggestArgs),
}

/// Export a palette
#[derive(Debug, Clone, Args)]
pub struct PaletteExportArgs {
    /// Color ids in palette order (repeatable)
    #[arg(long = "color", value_name = "ID", required = true, num_args = 1..)]
    pub colors: Vec<String>,

    /// Output format (json, css, tailwind, markdown); defaults to the configured format
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Output file; prints to stdout when omitted
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Suggest complementary colors
#[derive(Debug, Clone, Args)]
pub struct PaletteSuggestArgs {
    /// Color ids already in the palette (repeatable)
    #[arg(long = "color", value_name = "ID", num_args = 1..)]
    pub colors: Vec<String>,

    /// Number of suggestions
    #[arg(long, value_name = "N", default_value_t = SUGGESTION_COUNT)]
    pub count: usize,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SuggestionItem {
    id: String,
    name: String,
    hex: String,
}

#[derive(Debug, Serialize)]
struct SuggestResponse {
    palette: Vec<String>,
    suggestions: Vec<SuggestionItem>,
}

impl PaletteArgs {
    /// Execute the palette command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        match &self.command {
            PaletteCommand::Export(args) => args.execute(ctx),
            PaletteCommand::Suggest(args) => args.execute(ctx),
        }
    }
}

impl PaletteExportArgs {
    /// Execute the export command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let config = Config::load().unwrap_or_default();
        let format = match &self.format {
            Some(text) => text
                .parse::<PaletteFormat>()
                .map_err(|e| CliError::validation(e.to_string()))?,
            None => config.export.default_format,
        };

        let dataset = ctx.dataset()?;
        let palette = build_palette(&self.colors, &dataset)?;
        let colors = export::palette_colors(&palette, &dataset);
        let content = export::render_palette(&colors, format)
            .map_err(|e| CliError::io(format!("Failed to render palette: {e}")))?;

        match &self.output {
            Some(path) => {
                export::write_export(path, &content)
                    .map_err(|e| CliError::io(format!("{e:#}")))?;
                println!(
                    "Exported {} colors as {} to: {}",
                    colors.len(),
                    format,
                    path.display()
                );
            }
            None => println!("{content}"),
        }

        Ok(())
    }
}

impl PaletteSuggestArgs {
    /// Execute the suggest command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let dataset = ctx.dataset()?;
        let palette = build_palette(&self.colors, &dataset)?;

        let suggestions = suggest_complements(&palette, &dataset, self.count)
            .into_iter()
            .map(|c| SuggestionItem {
                id: c.id.clone(),
                name: c.name.clone(),
                hex: c.hex.clone(),
            })
            .collect();

        let response = SuggestResponse {
            palette: palette.ids().map(str::to_string).collect(),
            suggestions,
        };

        if self.json {
            print_json(&response)?;
        } else {
            println!("Suggestions ({}):", response.suggestions.len());
            println!();
            for item in &response.suggestions {
                println!("  {:<18} {:<6} {}", item.id, item.name, item.hex);
            }
        }

        Ok(())
    }
}

/// Builds a palette from ids, rejecting ids missing from the dataset.
fn build_palette(ids: &[String], dataset: &ColorDataset) -> CliResult<Palette> {
    let mut palette = Palette::new();
    for id in ids {
        if dataset.get(id).is_none() {
            return Err(CliError::not_found(format!("Color '{id}' not found")));
        }
        if !palette.add(id) {
            debug!(
                color = %id,
                capacity = PALETTE_CAPACITY,
                "ignored duplicate or overflow palette entry"
            );
        }
    }
    Ok(palette)
}
