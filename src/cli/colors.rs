//! Color listing command.

use crate::cli::common::{print_json, CliContext, CliError, CliResult};
use crate::models::{catalog, HueFamily, TraditionalColor};
use crate::services::classifier::classify_color;
use clap::Args;
use serde::Serialize;

/// List colors in the dataset
#[derive(Debug, Clone, Args)]
pub struct ColorsArgs {
    /// Only colors in this hue family (e.g., red, brown, 蓝)
    #[arg(long, value_name = "FAMILY")]
    pub family: Option<String>,

    /// Only colors tagged with this dynasty (Chinese or English name)
    #[arg(long, value_name = "DYNASTY")]
    pub dynasty: Option<String>,

    /// Only colors tagged with this mood (Chinese or English name)
    #[arg(long, value_name = "MOOD")]
    pub mood: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// JSON response types
#[derive(Debug, Serialize)]
struct ColorItem {
    id: String,
    name: String,
    pinyin: String,
    hex: String,
    family: HueFamily,
    dynasties: Vec<String>,
    moods: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ListColorsResponse {
    colors: Vec<ColorItem>,
    count: usize,
}

impl ColorsArgs {
    /// Execute the colors command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let dataset = ctx.dataset()?;

        let family = self
            .family
            .as_deref()
            .map(str::parse::<HueFamily>)
            .transpose()
            .map_err(|e| CliError::validation(e.to_string()))?;

        let dynasty = match &self.dynasty {
            Some(query) => Some(
                catalog::find_dynasty(query)
                    .ok_or_else(|| CliError::validation(format!("Unknown dynasty '{query}'")))?
                    .name,
            ),
            None => None,
        };

        let mood = match &self.mood {
            Some(query) => Some(
                catalog::find_mood(query)
                    .ok_or_else(|| CliError::validation(format!("Unknown mood '{query}'")))?
                    .name,
            ),
            None => None,
        };

        let colors: Vec<ColorItem> = dataset
            .colors()
            .iter()
            .map(|c| (c, classify_color(c)))
            .filter(|(_, f)| family.map_or(true, |wanted| *f == wanted))
            .filter(|(c, _)| dynasty.map_or(true, |d| has_tag(&c.dynasties, d)))
            .filter(|(c, _)| mood.map_or(true, |m| has_tag(&c.moods, m)))
            .map(|(c, f)| to_item(c, f))
            .collect();

        let response = ListColorsResponse {
            count: colors.len(),
            colors,
        };

        if self.json {
            print_json(&response)?;
        } else if response.count == 0 {
            println!("No colors match.");
        } else {
            println!("Colors ({}):", response.count);
            println!();
            for item in response.colors {
                println!(
                    "  {:<18} {:<6} {}  {:<7} {}",
                    item.id,
                    item.name,
                    item.hex,
                    item.family.key(),
                    item.pinyin
                );
            }
        }

        Ok(())
    }
}

fn has_tag(tags: &[String], wanted: &str) -> bool {
    tags.iter().any(|t| t == wanted)
}

fn to_item(color: &TraditionalColor, family: HueFamily) -> ColorItem {
    ColorItem {
        id: color.id.clone(),
        name: color.name.clone(),
        pinyin: color.pinyin.clone(),
        hex: color.hex.clone(),
        family,
        dynasties: color.dynasties.clone(),
        moods: color.moods.clone(),
    }
}
