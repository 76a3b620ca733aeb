//! Color detail command.

use crate::cli::common::{print_json, CliContext, CliError, CliResult};
use crate::models::{HueFamily, Locale, TraditionalColor};
use crate::services::classifier::classify_color;
use crate::services::similarity::{find_similar, DEFAULT_SIMILAR_COUNT};
use clap::Args;
use serde::Serialize;

/// Show everything known about one color
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Color id (e.g., da-hong)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Number of similar colors to list
    #[arg(long, value_name = "N", default_value_t = DEFAULT_SIMILAR_COUNT)]
    pub similar: usize,

    /// Description language (zh or en)
    #[arg(long, value_name = "LOCALE", default_value = "zh")]
    pub locale: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SimilarItem {
    id: String,
    name: String,
    hex: String,
}

#[derive(Debug, Serialize)]
struct ShowResponse<'a> {
    #[serde(flatten)]
    color: &'a TraditionalColor,
    family: HueFamily,
    contrast_text: String,
    similar: Vec<SimilarItem>,
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let locale: Locale = self
            .locale
            .parse()
            .map_err(|e: anyhow::Error| CliError::validation(e.to_string()))?;

        let dataset = ctx.dataset()?;
        let color = dataset
            .get(&self.id)
            .ok_or_else(|| CliError::not_found(format!("Color '{}' not found", self.id)))?;

        let similar = find_similar(color, dataset.colors(), self.similar)
            .into_iter()
            .map(|c| SimilarItem {
                id: c.id.clone(),
                name: c.name.clone(),
                hex: c.hex.clone(),
            })
            .collect();

        let response = ShowResponse {
            color,
            family: classify_color(color),
            contrast_text: color.rgb.contrast_text().to_hex(),
            similar,
        };

        if self.json {
            return print_json(&response);
        }

        print_human(&response, locale);
        Ok(())
    }
}

fn print_human(response: &ShowResponse<'_>, locale: Locale) {
    let color = response.color;
    println!("{}", color.title_for(locale));
    println!("{}", "=".repeat(24));
    println!();

    println!("  Id:        {}", color.id);
    println!("  Pinyin:    {}", color.pinyin);
    println!("  Hex:       {}", color.hex);
    println!("  RGB:       {}", color.rgb.to_css_rgb());
    println!(
        "  HSL:       {}°, {}%, {}%",
        color.hsl.h, color.hsl.s, color.hsl.l
    );
    println!(
        "  CMYK:      {}, {}, {}, {}",
        color.cmyk.c, color.cmyk.m, color.cmyk.y, color.cmyk.k
    );
    println!(
        "  Family:    {} ({})",
        response.family.label(locale),
        response.family.key()
    );
    println!("  Dynasties: {}", color.dynasties.join(", "));
    println!("  Moods:     {}", color.moods.join(", "));
    if !color.material.is_empty() {
        println!("  Material:  {}", color.material);
    }
    println!("  Text on:   {}", response.contrast_text);

    let description = color.description_for(locale);
    if !description.is_empty() {
        println!();
        println!("  {description}");
    }

    if !response.similar.is_empty() {
        println!();
        println!("Similar:");
        for item in &response.similar {
            println!("  {:<18} {:<6} {}", item.id, item.name, item.hex);
        }
    }
}
