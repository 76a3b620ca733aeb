//! RGB color handling with hex parsing, HSL/CMYK conversion and luminance.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Allow float comparisons in HSL conversion (standard algorithms)
#![allow(clippy::float_cmp)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::color::{Cmyk, Hsl};

/// Text color used on light swatches.
pub const DARK_TEXT: RgbColor = RgbColor::new(0x1A, 0x1A, 0x1A);

/// Text color used on dark swatches.
pub const LIGHT_TEXT: RgbColor = RgbColor::new(0xF5, 0xF0, 0xE8);

/// Luminance above which a swatch counts as "light" for text contrast.
const CONTRAST_LUMINANCE_THRESHOLD: f64 = 0.35;

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Serializes as a `[r, g, b]` triple, the shape used by the color dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Examples
    ///
    /// ```
    /// use colorvein::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#C3272B").unwrap();
    /// assert_eq!(color, RgbColor::new(195, 39, 43));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected 6 hex digits (RRGGBB)");
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Formats the color as a CSS `rgb(r, g, b)` function.
    #[must_use]
    pub fn to_css_rgb(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Converts the color to a Ratatui Color for terminal rendering.
    #[cfg(feature = "ratatui")]
    #[must_use]
    pub const fn to_ratatui_color(&self) -> ratatui::style::Color {
        ratatui::style::Color::Rgb(self.r, self.g, self.b)
    }

    /// Converts to HSL with every component rounded to an integer.
    ///
    /// Hue is in `[0, 360)`, saturation and lightness in `[0, 100]`. This is
    /// the precision the color dataset stores.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorvein::models::RgbColor;
    ///
    /// // 栗色
    /// let hsl = RgbColor::new(0x60, 0x28, 0x1E).to_hsl();
    /// assert_eq!((hsl.h, hsl.s, hsl.l), (9.0, 52.0, 25.0));
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names
    pub fn to_hsl(&self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        let (h, s) = if max == min {
            (0.0, 0.0)
        } else {
            let d = max - min;
            let s = if l > 0.5 {
                d / (2.0 - max - min)
            } else {
                d / (max + min)
            };
            let sector = if max == r {
                (g - b) / d + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / d + 2.0
            } else {
                (r - g) / d + 4.0
            };
            (sector / 6.0, s)
        };

        Hsl::new(
            (h * 360.0).round() % 360.0,
            (s * 100.0).round(),
            (l * 100.0).round(),
        )
    }

    /// Converts to CMYK percentages (0-100 each).
    #[must_use]
    pub fn to_cmyk(&self) -> Cmyk {
        let max = self.r.max(self.g).max(self.b);
        if max == 0 {
            return Cmyk::new(0, 0, 0, 100);
        }

        let k = 1.0 - f64::from(max) / 255.0;
        let channel = |c: u8| {
            let v = (1.0 - f64::from(c) / 255.0 - k) / (1.0 - k);
            (v * 100.0).round().clamp(0.0, 100.0) as u8
        };

        Cmyk::new(
            channel(self.r),
            channel(self.g),
            channel(self.b),
            (k * 100.0).round() as u8,
        )
    }

    /// Relative luminance per WCAG 2.1, in `[0.0, 1.0]`.
    #[must_use]
    pub fn relative_luminance(&self) -> f64 {
        let to_linear = |c: u8| {
            let c = f64::from(c) / 255.0;
            if c <= 0.039_28 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        };
        0.2126 * to_linear(self.r) + 0.7152 * to_linear(self.g) + 0.0722 * to_linear(self.b)
    }

    /// Returns the text color readable on top of this color.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorvein::models::rgb::{RgbColor, DARK_TEXT, LIGHT_TEXT};
    ///
    /// assert_eq!(RgbColor::new(255, 255, 255).contrast_text(), DARK_TEXT);
    /// assert_eq!(RgbColor::new(0, 0, 0).contrast_text(), LIGHT_TEXT);
    /// ```
    #[must_use]
    pub fn contrast_text(&self) -> Self {
        if self.relative_luminance() > CONTRAST_LUMINANCE_THRESHOLD {
            DARK_TEXT
        } else {
            LIGHT_TEXT
        }
    }

    /// Euclidean distance to another color in RGB space.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        let dr = f64::from(self.r) - f64::from(other.r);
        let dg = f64::from(self.g) - f64::from(other.g);
        let db = f64::from(self.b) - f64::from(other.b);
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Rounded channel-wise average of a set of colors, `None` when empty.
    #[must_use]
    pub fn average<'a>(colors: impl IntoIterator<Item = &'a Self>) -> Option<Self> {
        let mut sum = [0u32; 3];
        let mut n = 0u32;
        for c in colors {
            sum[0] += u32::from(c.r);
            sum[1] += u32::from(c.g);
            sum[2] += u32::from(c.b);
            n += 1;
        }
        if n == 0 {
            return None;
        }
        let avg = |s: u32| (f64::from(s) / f64::from(n)).round() as u8;
        Some(Self::new(avg(sum[0]), avg(sum[1]), avg(sum[2])))
    }

    /// Returns a dimmed version of the color at the given percentage.
    ///
    /// # Arguments
    ///
    /// * `percent` - Brightness percentage (0-100). 0 = black, 100 = original color.
    #[must_use]
    pub const fn dim(&self, percent: u8) -> Self {
        let percent = if percent > 100 { 100 } else { percent };
        Self {
            r: (self.r as u16 * percent as u16 / 100) as u8,
            g: (self.g as u16 * percent as u16 / 100) as u8,
            b: (self.b as u16 * percent as u16 / 100) as u8,
        }
    }

    /// Desaturated (luma grey) version of the color, used by neutral mode.
    #[must_use]
    pub fn grayscale(&self) -> Self {
        let y = 0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b);
        let y = y.round().clamp(0.0, 255.0) as u8;
        Self::new(y, y, y)
    }
}

impl From<[u8; 3]> for RgbColor {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<RgbColor> for [u8; 3] {
    fn from(c: RgbColor) -> Self {
        [c.r, c.g, c.b]
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for RgbColor {
    /// Default color is white (#FFFFFF).
    fn default() -> Self {
        Self::new(255, 255, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_valid() {
        let color = RgbColor::from_hex("#C3272B").unwrap();
        assert_eq!(color, RgbColor::new(195, 39, 43));

        let color = RgbColor::from_hex("ff461f").unwrap();
        assert_eq!(color, RgbColor::new(255, 70, 31));

        let color = RgbColor::from_hex("  #FFFFFF  ").unwrap();
        assert_eq!(color, RgbColor::new(255, 255, 255));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(RgbColor::from_hex("#FFF").is_err());
        assert!(RgbColor::from_hex("#FFFFFFF").is_err());
        assert!(RgbColor::from_hex("GGGGGG").is_err());
        assert!(RgbColor::from_hex("").is_err());
        assert!(RgbColor::from_hex("#").is_err());
        assert!(RgbColor::from_hex("#红红").is_err());
    }

    #[test]
    fn test_from_hex_rejects_signs() {
        assert!(RgbColor::from_hex("#+1+2+3").is_err());
        assert!(RgbColor::from_hex("-1FFFF").is_err());
        assert!(RgbColor::from_hex("# C3272B").is_err());
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(RgbColor::new(0, 52, 114).to_hex(), "#003472");
        assert_eq!(RgbColor::new(0, 0, 0).to_hex(), "#000000");
    }

    #[test]
    fn test_serde_triple() {
        let json = serde_json::to_string(&RgbColor::new(1, 2, 3)).unwrap();
        assert_eq!(json, "[1,2,3]");
        let back: RgbColor = serde_json::from_str("[96,40,30]").unwrap();
        assert_eq!(back, RgbColor::new(96, 40, 30));
    }

    #[test]
    fn test_to_hsl_matches_dataset_precision() {
        // 赭石
        let hsl = RgbColor::new(0x84, 0x5A, 0x33).to_hsl();
        assert_eq!((hsl.h, hsl.s, hsl.l), (29.0, 44.0, 36.0));

        // 秋色
        let hsl = RgbColor::new(0x89, 0x6C, 0x39).to_hsl();
        assert_eq!((hsl.h, hsl.s, hsl.l), (38.0, 41.0, 38.0));

        let hsl = RgbColor::new(128, 128, 128).to_hsl();
        assert_eq!((hsl.h, hsl.s, hsl.l), (0.0, 0.0, 50.0));
    }

    #[test]
    fn test_to_hsl_hue_wraps_below_360() {
        // Hue just under 360 must never round up to 360.
        let hsl = RgbColor::new(255, 0, 1).to_hsl();
        assert!(hsl.h < 360.0);
    }

    #[test]
    fn test_to_cmyk() {
        assert_eq!(RgbColor::new(0, 0, 0).to_cmyk(), Cmyk::new(0, 0, 0, 100));
        assert_eq!(RgbColor::new(255, 255, 255).to_cmyk(), Cmyk::new(0, 0, 0, 0));
        assert_eq!(RgbColor::new(255, 0, 0).to_cmyk(), Cmyk::new(0, 100, 100, 0));
    }

    #[test]
    fn test_contrast_text() {
        // 明黄 is light, 靛蓝 is dark
        assert_eq!(RgbColor::new(0xFA, 0xD0, 0x00).contrast_text(), DARK_TEXT);
        assert_eq!(RgbColor::new(0x06, 0x52, 0x79).contrast_text(), LIGHT_TEXT);
    }

    #[test]
    fn test_distance() {
        let a = RgbColor::new(0, 0, 0);
        let b = RgbColor::new(3, 4, 0);
        assert!((a.distance(&b) - 5.0).abs() < f64::EPSILON);
        assert!(a.distance(&a).abs() < f64::EPSILON);
    }

    #[test]
    fn test_average() {
        let colors = [RgbColor::new(0, 0, 0), RgbColor::new(255, 101, 10)];
        assert_eq!(RgbColor::average(&colors), Some(RgbColor::new(128, 51, 5)));
        assert_eq!(RgbColor::average(&[] as &[RgbColor]), None);
    }

    #[test]
    fn test_dim_and_grayscale() {
        assert_eq!(RgbColor::new(200, 100, 50).dim(50), RgbColor::new(100, 50, 25));
        let g = RgbColor::new(255, 0, 0).grayscale();
        assert_eq!(g.r, g.g);
        assert_eq!(g.g, g.b);
    }
}
