//! Lens, locale and view selectors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Strategy for laying the color set out in space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lens {
    /// Branching vein sorted by hue family
    #[default]
    Hue,
    /// Columns by first dynasty tag
    Dynasty,
    /// Columns by first mood tag
    Mood,
}

impl Lens {
    /// All lenses in toolbar order.
    pub const ALL: [Self; 3] = [Self::Hue, Self::Dynasty, Self::Mood];

    /// Lowercase key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Hue => "hue",
            Self::Dynasty => "dynasty",
            Self::Mood => "mood",
        }
    }

    /// Toolbar label in the given locale.
    #[must_use]
    pub const fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Hue, Locale::Zh) => "色相 · 脉",
            (Self::Hue, Locale::En) => "Hue Vein",
            (Self::Dynasty, Locale::Zh) => "朝代",
            (Self::Dynasty, Locale::En) => "Dynasty",
            (Self::Mood, Locale::Zh) => "意境",
            (Self::Mood, Locale::En) => "Mood",
        }
    }
}

impl fmt::Display for Lens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Lens {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hue" => Ok(Self::Hue),
            "dynasty" => Ok(Self::Dynasty),
            "mood" => Ok(Self::Mood),
            other => anyhow::bail!("Unknown lens '{other}'. Expected one of: hue, dynasty, mood"),
        }
    }
}

/// UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Chinese
    #[default]
    Zh,
    /// English
    En,
}

impl Locale {
    /// The other locale.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Zh => Self::En,
            Self::En => Self::Zh,
        }
    }

    /// Lowercase key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Zh => "zh",
            Self::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zh" => Ok(Self::Zh),
            "en" => Ok(Self::En),
            other => anyhow::bail!("Unknown locale '{other}'. Expected 'zh' or 'en'"),
        }
    }
}

/// Top-level screen of the explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Title screen
    #[default]
    Landing,
    /// Lens explorer with orbs
    Explore,
    /// Palette lab
    Palette,
    /// About page
    About,
}
