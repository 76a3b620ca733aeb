//! Web-facing export formats: JSON, CSS custom properties and Tailwind.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::models::TraditionalColor;

#[derive(Debug, Serialize)]
struct JsonSwatch<'a> {
    name: &'a str,
    pinyin: &'a str,
    hex: &'a str,
    rgb: String,
}

/// Pretty JSON array of `{name, pinyin, hex, rgb}` objects.
pub fn generate_json(colors: &[&TraditionalColor]) -> Result<String> {
    let swatches: Vec<_> = colors
        .iter()
        .map(|c| JsonSwatch {
            name: &c.name,
            pinyin: &c.pinyin,
            hex: &c.hex,
            rgb: c.rgb.to_css_rgb(),
        })
        .collect();
    serde_json::to_string_pretty(&swatches).context("Failed to serialize palette to JSON")
}

/// `:root` block with one `--<id>: <hex>;` property per color.
#[must_use]
pub fn generate_css(colors: &[&TraditionalColor]) -> String {
    let properties = colors
        .iter()
        .map(|c| format!("  --{}: {};", c.id, c.hex))
        .collect::<Vec<_>>()
        .join("\n");
    format!(":root {{\n{properties}\n}}")
}

/// Tailwind `colors` object mapping id to hex, in palette order.
pub fn generate_tailwind(colors: &[&TraditionalColor]) -> Result<String> {
    let map: Map<String, Value> = colors
        .iter()
        .map(|c| (c.id.clone(), Value::String(c.hex.clone())))
        .collect();
    let json = serde_json::to_string_pretty(&map)
        .context("Failed to serialize palette to Tailwind colors")?;
    Ok(format!("// tailwind.config.js colors\n{json}"))
}
