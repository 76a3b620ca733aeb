//! Headless lens layout command.

use crate::cli::common::{print_json, CliContext, CliError, CliResult};
use crate::config::Config;
use crate::models::Lens;
use crate::services::layout::{compute_layout, LayoutPosition, Viewport};
use clap::Args;
use serde::Serialize;

/// Compute orb positions for a lens
#[derive(Debug, Clone, Args)]
pub struct LayoutArgs {
    /// Lens (hue, dynasty, mood); defaults to the configured lens
    #[arg(long, value_name = "LENS")]
    pub lens: Option<String>,

    /// Viewport width in pixels; defaults to the configured viewport
    #[arg(long, value_name = "PX")]
    pub width: Option<u32>,

    /// Viewport height in pixels; defaults to the configured viewport
    #[arg(long, value_name = "PX")]
    pub height: Option<u32>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct LayoutResponse {
    lens: Lens,
    viewport: Viewport,
    positions: Vec<LayoutPosition>,
    count: usize,
}

impl LayoutArgs {
    /// Execute the layout command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let config = Config::load().unwrap_or_default();

        let lens = match &self.lens {
            Some(text) => text
                .parse::<Lens>()
                .map_err(|e| CliError::validation(e.to_string()))?,
            None => config.ui.default_lens,
        };

        let width = self.width.unwrap_or(config.viewport.width);
        let height = self.height.unwrap_or(config.viewport.height);
        if width == 0 || height == 0 {
            return Err(CliError::validation(format!(
                "Viewport dimensions must be positive (got {width}x{height})"
            )));
        }

        let dataset = ctx.dataset()?;
        let viewport = Viewport::new(f64::from(width), f64::from(height));
        let positions = compute_layout(dataset.colors(), lens, viewport);

        let response = LayoutResponse {
            lens,
            viewport,
            count: positions.len(),
            positions,
        };

        if self.json {
            print_json(&response)?;
        } else {
            println!(
                "Layout: {} lens, {}x{} ({} colors)",
                response.lens, width, height, response.count
            );
            println!();
            for p in &response.positions {
                println!("  {:<18} {:>8.1} {:>8.1}", p.color_id, p.x, p.y);
            }
        }

        Ok(())
    }
}
