//! Markdown table export for palettes.

use std::fmt::Write as _;

use crate::models::TraditionalColor;
use crate::services::classifier::classify_color;

/// Generates a Markdown document with one table row per color.
///
/// # Examples
///
/// ```
/// use colorvein::export::markdown::generate_markdown_table;
/// use colorvein::models::TraditionalColor;
///
/// let color = TraditionalColor::from_hex("da-hong", "大红", "#C3272B").unwrap();
/// let md = generate_markdown_table(&[&color]);
/// assert!(md.contains("| 1 | 大红 |"));
/// ```
#[must_use]
pub fn generate_markdown_table(colors: &[&TraditionalColor]) -> String {
    let mut output = String::new();

    output.push_str("# Color Vein Palette\n\n");

    if colors.is_empty() {
        output.push_str("_The palette is empty._\n");
        return output;
    }

    output.push_str("| # | Name | Pinyin | Hex | RGB | Family |\n");
    output.push_str("|---|------|--------|-----|-----|--------|\n");

    for (index, color) in colors.iter().enumerate() {
        let family = classify_color(color);
        let _ = writeln!(
            output,
            "| {} | {} | {} | {} | {} | {} |",
            index + 1,
            color.name,
            color.pinyin,
            color.hex,
            color.rgb.to_css_rgb(),
            family.key()
        );
    }

    output
}
