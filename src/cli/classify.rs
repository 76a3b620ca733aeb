//! Classify an arbitrary color into a hue family.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::models::{Hsl, HueFamily, Locale, RgbColor};
use crate::services::classifier::classify;
use clap::{ArgGroup, Args};
use serde::Serialize;

/// Classify an HSL triple or hex color into a hue family
#[derive(Debug, Clone, Args)]
#[command(group(ArgGroup::new("input").required(true).args(["hsl", "hex"])))]
pub struct ClassifyArgs {
    /// HSL triple as H,S,L (e.g., 9,52,25)
    #[arg(long, value_name = "H,S,L", allow_hyphen_values = true)]
    pub hsl: Option<String>,

    /// Hex color (#RRGGBB)
    #[arg(long, value_name = "HEX")]
    pub hex: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ClassifyResponse {
    family: HueFamily,
    label: &'static str,
    hsl: Hsl,
    #[serde(skip_serializing_if = "Option::is_none")]
    hex: Option<String>,
}

impl ClassifyArgs {
    /// Execute the classify command
    pub fn execute(&self) -> CliResult<()> {
        let (hsl, hex) = match (&self.hsl, &self.hex) {
            (Some(text), _) => (parse_hsl(text)?, None),
            (None, Some(hex)) => {
                let rgb = RgbColor::from_hex(hex)
                    .map_err(|e| CliError::validation(format!("Invalid hex color: {e}")))?;
                (rgb.to_hsl(), Some(rgb.to_hex()))
            }
            (None, None) => {
                return Err(CliError::validation("Either --hsl or --hex must be given"));
            }
        };

        let family = classify(&hsl);
        let response = ClassifyResponse {
            family,
            label: family.label(Locale::Zh),
            hsl,
            hex,
        };

        if self.json {
            print_json(&response)?;
        } else {
            println!("{} ({})", response.family.key(), response.label);
        }

        Ok(())
    }
}

/// Parses `H,S,L` into an HSL triple. Values outside the usual ranges are accepted.
fn parse_hsl(text: &str) -> CliResult<Hsl> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(CliError::validation(format!(
            "Invalid HSL '{text}': expected three comma-separated numbers"
        )));
    }

    let mut values = [0.0_f64; 3];
    for (slot, part) in values.iter_mut().zip(&parts) {
        *slot = part
            .parse::<f64>()
            .map_err(|_| CliError::validation(format!("Invalid HSL component '{part}'")))?;
    }

    Ok(Hsl::from(values))
}
