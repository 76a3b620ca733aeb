//! Traditional color records and their HSL/CMYK representations.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::{Locale, RgbColor};

/// HSL triple: hue in degrees `[0, 360)`, saturation and lightness in `[0, 100]`.
///
/// Serializes as `[h, s, l]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Hsl {
    /// Hue angle in degrees
    pub h: f64,
    /// Saturation percentage
    pub s: f64,
    /// Lightness percentage
    pub l: f64,
}

impl Hsl {
    /// Creates a new HSL triple.
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Returns true when every component lies in its documented range.
    #[must_use]
    pub fn in_range(&self) -> bool {
        (0.0..360.0).contains(&self.h)
            && (0.0..=100.0).contains(&self.s)
            && (0.0..=100.0).contains(&self.l)
    }
}

impl From<[f64; 3]> for Hsl {
    fn from([h, s, l]: [f64; 3]) -> Self {
        Self::new(h, s, l)
    }
}

impl From<Hsl> for [f64; 3] {
    fn from(hsl: Hsl) -> Self {
        [hsl.h, hsl.s, hsl.l]
    }
}

/// CMYK quadruple in percentages. Serializes as `[c, m, y, k]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
pub struct Cmyk {
    /// Cyan
    pub c: u8,
    /// Magenta
    pub m: u8,
    /// Yellow
    pub y: u8,
    /// Key (black)
    pub k: u8,
}

impl Cmyk {
    /// Creates a new CMYK quadruple.
    #[must_use]
    pub const fn new(c: u8, m: u8, y: u8, k: u8) -> Self {
        Self { c, m, y, k }
    }
}

impl From<[u8; 4]> for Cmyk {
    fn from([c, m, y, k]: [u8; 4]) -> Self {
        Self::new(c, m, y, k)
    }
}

impl From<Cmyk> for [u8; 4] {
    fn from(v: Cmyk) -> Self {
        [v.c, v.m, v.y, v.k]
    }
}

/// A named traditional color from the dataset.
///
/// Loaded once and never mutated. The `category` label is advisory only; the
/// hue classifier derives the family from `hsl`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraditionalColor {
    /// Unique kebab-case identifier (e.g., "da-hong")
    pub id: String,
    /// Chinese display name
    pub name: String,
    /// Pinyin transliteration
    pub pinyin: String,
    /// Hex string "#RRGGBB"
    pub hex: String,
    /// RGB triple
    pub rgb: RgbColor,
    /// HSL triple
    pub hsl: Hsl,
    /// CMYK quadruple
    pub cmyk: Cmyk,
    /// Dynasties the color is associated with, most significant first
    #[serde(default)]
    pub dynasties: Vec<String>,
    /// Free-text category from the source catalog
    #[serde(default)]
    pub category: String,
    /// Mood tags, most significant first
    #[serde(default)]
    pub moods: Vec<String>,
    /// Material the color comes from (mineral, plant, silk, ...)
    #[serde(default)]
    pub material: String,
    /// Chinese description
    #[serde(default)]
    pub description: String,
    /// English description
    #[serde(default)]
    pub description_en: String,
}

impl TraditionalColor {
    /// Builds a color from a hex string, deriving RGB, HSL and CMYK from it.
    ///
    /// Tags and descriptions start empty.
    ///
    /// # Errors
    ///
    /// Returns an error if `hex` is not a valid hex color.
    pub fn from_hex(id: impl Into<String>, name: impl Into<String>, hex: &str) -> Result<Self> {
        let rgb = RgbColor::from_hex(hex)?;
        Ok(Self {
            id: id.into(),
            name: name.into(),
            pinyin: String::new(),
            hex: rgb.to_hex(),
            rgb,
            hsl: rgb.to_hsl(),
            cmyk: rgb.to_cmyk(),
            dynasties: Vec::new(),
            category: String::new(),
            moods: Vec::new(),
            material: String::new(),
            description: String::new(),
            description_en: String::new(),
        })
    }

    /// First dynasty tag, if any.
    #[must_use]
    pub fn primary_dynasty(&self) -> Option<&str> {
        self.dynasties.first().map(String::as_str)
    }

    /// First mood tag, if any.
    #[must_use]
    pub fn primary_mood(&self) -> Option<&str> {
        self.moods.first().map(String::as_str)
    }

    /// Description in the requested locale, falling back to the other one.
    #[must_use]
    pub fn description_for(&self, locale: Locale) -> &str {
        match locale {
            Locale::Zh if !self.description.is_empty() => &self.description,
            Locale::En if !self.description_en.is_empty() => &self.description_en,
            Locale::Zh => &self.description_en,
            Locale::En => &self.description,
        }
    }

    /// Display title: Chinese name alone, or with pinyin for English.
    #[must_use]
    pub fn title_for(&self, locale: Locale) -> String {
        match locale {
            Locale::En if !self.pinyin.is_empty() => format!("{} ({})", self.name, self.pinyin),
            _ => self.name.clone(),
        }
    }

    /// Validates internal consistency of the record.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty, the hex string does not parse or
    /// disagrees with `rgb`, or the HSL triple is out of range.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            anyhow::bail!("Color id cannot be empty (name: '{}')", self.name);
        }

        let parsed = RgbColor::from_hex(&self.hex)?;
        if parsed != self.rgb {
            anyhow::bail!(
                "Color '{}' hex {} does not match rgb {:?}",
                self.id,
                self.hex,
                <[u8; 3]>::from(self.rgb)
            );
        }

        if !self.hsl.in_range() {
            anyhow::bail!(
                "Color '{}' has out-of-range HSL ({}, {}, {})",
                self.id,
                self.hsl.h,
                self.hsl.s,
                self.hsl.l
            );
        }

        Ok(())
    }
}
