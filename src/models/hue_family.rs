//! Hue families: the ten coarse buckets colors are grouped into.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Locale, RgbColor};

/// One of ten hue buckets derived from HSL.
///
/// Variant order is the sort order used by the hue lens:
/// red < orange < yellow < green < cyan < blue < purple < brown < white < black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HueFamily {
    /// 红
    Red,
    /// 橙
    Orange,
    /// 黄
    Yellow,
    /// 绿
    Green,
    /// 青
    Cyan,
    /// 蓝
    Blue,
    /// 紫
    Purple,
    /// 棕
    Brown,
    /// 白
    White,
    /// 黑
    Black,
}

impl HueFamily {
    /// All families in sort order.
    pub const ALL: [Self; 10] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Cyan,
        Self::Blue,
        Self::Purple,
        Self::Brown,
        Self::White,
        Self::Black,
    ];

    /// Position in the sort order (red = 0 ... black = 9).
    #[must_use]
    pub const fn rank(self) -> usize {
        self as usize
    }

    /// Lowercase English key, as used on the command line and in JSON.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Cyan => "cyan",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Brown => "brown",
            Self::White => "white",
            Self::Black => "black",
        }
    }

    /// Single-character Chinese label.
    #[must_use]
    pub const fn zh(self) -> &'static str {
        match self {
            Self::Red => "红",
            Self::Orange => "橙",
            Self::Yellow => "黄",
            Self::Green => "绿",
            Self::Cyan => "青",
            Self::Blue => "蓝",
            Self::Purple => "紫",
            Self::Brown => "棕",
            Self::White => "白",
            Self::Black => "黑",
        }
    }

    /// Label in the given locale.
    #[must_use]
    pub fn label(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Zh => self.zh(),
            Locale::En => match self {
                Self::Red => "Red",
                Self::Orange => "Orange",
                Self::Yellow => "Yellow",
                Self::Green => "Green",
                Self::Cyan => "Cyan",
                Self::Blue => "Blue",
                Self::Purple => "Purple",
                Self::Brown => "Brown",
                Self::White => "White",
                Self::Black => "Black",
            },
        }
    }

    /// Representative color for the spectrum bar.
    #[must_use]
    pub const fn spectrum_color(self) -> RgbColor {
        match self {
            Self::Red => RgbColor::new(0xDC, 0x14, 0x3C),
            Self::Orange => RgbColor::new(0xE8, 0x7A, 0x00),
            Self::Yellow => RgbColor::new(0xFF, 0xD7, 0x00),
            Self::Green => RgbColor::new(0x22, 0x8B, 0x22),
            Self::Cyan => RgbColor::new(0x2E, 0x8B, 0x8B),
            Self::Blue => RgbColor::new(0x1E, 0x3A, 0x8A),
            Self::Purple => RgbColor::new(0x6E, 0x3E, 0x8E),
            Self::Brown => RgbColor::new(0x8B, 0x45, 0x13),
            Self::White => RgbColor::new(0xD4, 0xD0, 0xC8),
            Self::Black => RgbColor::new(0x2D, 0x2D, 0x2D),
        }
    }
}

impl fmt::Display for HueFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for HueFamily {
    type Err = anyhow::Error;

    /// Accepts the English key (any case) or the Chinese label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(s) || f.zh() == s)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown hue family '{s}'. Expected one of: {}",
                    Self::ALL.map(Self::key).join(", ")
                )
            })
    }
}
