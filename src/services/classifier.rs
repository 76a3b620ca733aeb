//! Hue family classification from HSL.
//!
//! The dataset's `category` label is not trusted; grouping is derived from the
//! color itself. Rules are evaluated top to bottom and the first match wins.
//! Several swatches sit right on the thresholds, so the comparison operators
//! here are exact and must not be loosened.

use crate::models::{Hsl, HueFamily, TraditionalColor};

/// Classifies an HSL triple into a hue family.
///
/// Total over every input: NaN or out-of-range components fall through to
/// [`HueFamily::Red`] rather than panicking.
///
/// # Examples
///
/// ```
/// use colorvein::models::{Hsl, HueFamily};
/// use colorvein::services::classifier::classify;
///
/// assert_eq!(classify(&Hsl::new(9.0, 52.0, 25.0)), HueFamily::Brown);
/// assert_eq!(classify(&Hsl::new(230.0, 60.0, 40.0)), HueFamily::Blue);
/// ```
#[must_use]
pub fn classify(hsl: &Hsl) -> HueFamily {
    let Hsl { h, s, l } = *hsl;

    // Achromatic
    if s < 10.0 {
        if l > 80.0 {
            return HueFamily::White;
        }
        if l < 20.0 {
            return HueFamily::Black;
        }
        return if l > 50.0 {
            HueFamily::White
        } else {
            HueFamily::Black
        };
    }

    if l > 85.0 {
        return HueFamily::White;
    }

    if l < 12.0 {
        return HueFamily::Black;
    }

    // Earth tones: warm hue, darker, not too saturated
    let warm = h < 50.0 || h >= 345.0;
    if warm {
        if l < 35.0 && s < 70.0 {
            return HueFamily::Brown;
        }
        if l < 55.0 && s < 35.0 {
            return HueFamily::Brown;
        }
    }

    // Greyish mid-tones that aren't warm
    if s < 20.0 && l < 50.0 {
        return HueFamily::Black;
    }

    if h < 20.0 || h >= 320.0 {
        HueFamily::Red
    } else if h < 40.0 {
        HueFamily::Orange
    } else if h < 70.0 {
        HueFamily::Yellow
    } else if h < 160.0 {
        HueFamily::Green
    } else if h < 200.0 {
        HueFamily::Cyan
    } else if h < 270.0 {
        HueFamily::Blue
    } else if h < 320.0 {
        HueFamily::Purple
    } else {
        HueFamily::Red
    }
}

/// Classifies a dataset color by its HSL triple.
#[must_use]
pub fn classify_color(color: &TraditionalColor) -> HueFamily {
    classify(&color.hsl)
}
