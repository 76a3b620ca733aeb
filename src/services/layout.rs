//! Lens layout engine.
//!
//! Places every color of a set on a 2D viewport according to the active lens.
//! Layout is a pure function of (colors, lens, viewport): jitter comes from
//! [`seeded_random`] keyed on each color's rank, so re-running a layout with
//! the same inputs yields identical coordinates and orbs never drift between
//! redraws.

// Ranks and counts are small; converting them to f64 is exact in practice.
#![allow(clippy::cast_precision_loss)]

use serde::Serialize;
use std::f64::consts::PI;
use tracing::{debug, warn};

use crate::models::{
    catalog, HueFamily, Lens, TraditionalColor, DEFAULT_DYNASTY, DEFAULT_MOOD, DYNASTIES, MOODS,
};
use crate::services::classifier::classify_color;

/// Horizontal padding from each edge.
pub const PAD_X: f64 = 140.0;
/// Padding above the layout area.
pub const PAD_TOP: f64 = 150.0;
/// Padding below the layout area.
pub const PAD_BOTTOM: f64 = 130.0;

/// Room under the dynasty timeline before the first orb.
pub const DYNASTY_HEADER: f64 = 60.0;
const DYNASTY_MAX_SPACING: f64 = 60.0;

/// Room reserved for the mood labels at the bottom of each column.
pub const MOOD_LABEL_RESERVE: f64 = 80.0;
const MOOD_MAX_SPACING: f64 = 55.0;
const MOOD_MIN_SLOTS: usize = 6;

/// Vertical jitter span of the vein; capped below the rank step so y stays ordered.
const VEIN_JITTER_Y: f64 = 10.0;
const VEIN_JITTER_X: f64 = 16.0;
const VEIN_STEM_LOBES: f64 = 3.0;
const VEIN_STEM_SWAY: f64 = 0.06;

/// Drawing surface size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

impl Viewport {
    /// Creates a viewport. Negative or NaN dimensions are treated as zero.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Width between the horizontal paddings, never negative.
    #[must_use]
    pub fn usable_width(&self) -> f64 {
        (self.width - PAD_X * 2.0).max(0.0)
    }

    /// Height between the top and bottom paddings, never negative.
    #[must_use]
    pub fn usable_height(&self) -> f64 {
        (self.height - PAD_TOP - PAD_BOTTOM).max(0.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1200.0, 800.0)
    }
}

/// Where one color lands on the viewport.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutPosition {
    /// Id of the positioned color
    pub color_id: String,
    /// Horizontal coordinate in pixels
    pub x: f64,
    /// Vertical coordinate in pixels
    pub y: f64,
}

/// One column of a column lens (dynasty or mood).
#[derive(Debug, Clone, PartialEq)]
pub struct LensColumn<'a> {
    /// Canonical tag of the column (dynasty or mood name)
    pub key: &'static str,
    /// Index of the tag in its canonical table
    pub slot: usize,
    /// Members in input order
    pub members: Vec<&'a TraditionalColor>,
}

/// Deterministic pseudo-random value in `[0, 1)` for an integer seed.
///
/// `frac(sin(seed * 9301 + 49297) * 49297)`
///
/// # Examples
///
/// ```
/// use colorvein::services::layout::seeded_random;
///
/// let r = seeded_random(42);
/// assert!((0.0..1.0).contains(&r));
/// assert_eq!(r, seeded_random(42));
/// ```
#[must_use]
pub fn seeded_random(seed: usize) -> f64 {
    let x = (seed as f64).mul_add(9301.0, 49297.0).sin() * 49297.0;
    let r = x - x.floor();
    if r < 1.0 {
        r
    } else {
        0.0
    }
}

/// Computes one position per color for the given lens.
///
/// Total over any color list and viewport: output length always equals input
/// length and every coordinate is finite.
#[must_use]
pub fn compute_layout(
    colors: &[TraditionalColor],
    lens: Lens,
    viewport: Viewport,
) -> Vec<LayoutPosition> {
    let positions = match lens {
        Lens::Hue => layout_by_hue(colors, viewport),
        Lens::Dynasty => layout_by_dynasty(colors, viewport),
        Lens::Mood => layout_by_mood(colors, viewport),
    };

    debug!(
        lens = %lens,
        colors = colors.len(),
        width = viewport.width,
        height = viewport.height,
        "computed layout"
    );

    positions
}

/// Colors sorted by hue family, then by raw hue, with their family.
///
/// This is the rank order the vein layout walks.
#[must_use]
pub fn hue_order(colors: &[TraditionalColor]) -> Vec<(&TraditionalColor, HueFamily)> {
    let mut sorted: Vec<_> = colors.iter().map(|c| (c, classify_color(c))).collect();
    sorted.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.hsl.h.total_cmp(&b.0.hsl.h)));
    sorted
}

/// X coordinate of the vein stem at normalized height `t`.
#[must_use]
pub fn stem_x(t: f64, viewport: Viewport) -> f64 {
    let center_x = viewport.width / 2.0;
    (t * PI * VEIN_STEM_LOBES).sin().mul_add(viewport.usable_width() * VEIN_STEM_SWAY, center_x)
}

/// Polyline of the vein stem from top to bottom, `steps + 1` points.
#[must_use]
pub fn stem_path(viewport: Viewport, steps: usize) -> Vec<(f64, f64)> {
    let steps = steps.max(1);
    let h = viewport.usable_height();
    (0..=steps)
        .map(|i| {
            let t = i as f64 / steps as f64;
            (stem_x(t, viewport), t.mul_add(h, PAD_TOP))
        })
        .collect()
}

/// Vein layout: a sine-curved stem with colors branching alternately left and right.
fn layout_by_hue(colors: &[TraditionalColor], viewport: Viewport) -> Vec<LayoutPosition> {
    let sorted = hue_order(colors);
    let n = sorted.len();
    let h = viewport.usable_height();

    let step = if n > 1 { h / (n - 1) as f64 } else { h };
    let jitter_y = VEIN_JITTER_Y.min(step * 0.9);

    let (x_min, x_max) = (PAD_X, viewport.width - PAD_X);
    let (y_min, y_max) = (PAD_TOP, PAD_TOP + h);

    sorted
        .into_iter()
        .enumerate()
        .map(|(i, (color, _))| {
            let seed = i * 7 + 42;
            let t = if n > 1 { i as f64 / (n - 1) as f64 } else { 0.0 };

            let side: f64 = if i % 2 == 0 { 1.0 } else { -1.0 };
            let branch = seeded_random(seed).mul_add(100.0, 40.0);
            let jx = (seeded_random(seed + 1) - 0.5) * VEIN_JITTER_X;
            let jy = (seeded_random(seed + 2) - 0.5) * jitter_y;

            let x = side.mul_add(branch, stem_x(t, viewport)) + jx;
            let y = t.mul_add(h, PAD_TOP) + jy;

            LayoutPosition {
                color_id: color.id.clone(),
                x: clamp_between(x, x_min, x_max),
                y: clamp_between(y, y_min, y_max),
            }
        })
        .collect()
}

/// Center x of column `index` when the usable width is split into `count` columns.
#[must_use]
pub fn column_center_x(index: usize, count: usize, viewport: Viewport) -> f64 {
    let count = count.max(1) as f64;
    ((index as f64 + 0.5) / count).mul_add(viewport.usable_width(), PAD_X)
}

/// Dynasty layout: one column per dynasty present, in timeline order.
fn layout_by_dynasty(colors: &[TraditionalColor], viewport: Viewport) -> Vec<LayoutPosition> {
    let columns = group_by_dynasty(colors);
    let inner_h = (viewport.usable_height() - DYNASTY_HEADER).max(0.0);

    let mut result = Vec::with_capacity(colors.len());
    for (col_index, column) in columns.iter().enumerate() {
        let cx = column_center_x(col_index, columns.len(), viewport);
        let count = column.members.len() as f64;
        let spacing = DYNASTY_MAX_SPACING.min(inner_h / (count + 1.0));
        let start_y = PAD_TOP + DYNASTY_HEADER + count.mul_add(-spacing, inner_h) / 2.0;

        for (i, color) in column.members.iter().enumerate() {
            let seed = col_index * 100 + i * 13;
            result.push(LayoutPosition {
                color_id: color.id.clone(),
                x: cx + (seeded_random(seed) - 0.5) * 30.0,
                y: (i as f64).mul_add(spacing, start_y) + (seeded_random(seed + 1) - 0.5) * 12.0,
            });
        }
    }
    result
}

/// Mood layout: eight fixed column slots, empty moods leave a gap.
fn layout_by_mood(colors: &[TraditionalColor], viewport: Viewport) -> Vec<LayoutPosition> {
    let columns = group_by_mood(colors);
    let column_h = (viewport.usable_height() - MOOD_LABEL_RESERVE).max(0.0);

    let mut result = Vec::with_capacity(colors.len());
    for column in &columns {
        let mood_index = column.slot;
        let cx = column_center_x(mood_index, MOODS.len(), viewport);
        let count = column.members.len();
        let spacing =
            MOOD_MAX_SPACING.min(column_h / (count + 1).max(MOOD_MIN_SLOTS) as f64);
        let total_h = (count - 1) as f64 * spacing;
        let start_y = PAD_TOP + (column_h - total_h) / 2.0;

        for (i, color) in column.members.iter().enumerate() {
            let seed = i * 11 + mood_index * 77;
            result.push(LayoutPosition {
                color_id: color.id.clone(),
                x: cx + (seeded_random(seed) - 0.5) * 40.0,
                y: (i as f64).mul_add(spacing, start_y) + (seeded_random(seed + 1) - 0.5) * 10.0,
            });
        }
    }
    result
}

/// Canonical dynasty a color is filed under.
///
/// Missing, empty or unknown first tags fall back to [`DEFAULT_DYNASTY`].
#[must_use]
pub fn resolve_dynasty(color: &TraditionalColor) -> &'static str {
    match color.primary_dynasty().and_then(catalog::dynasty_index) {
        Some(slot) => DYNASTIES[slot].name,
        None => {
            match color.primary_dynasty().filter(|tag| !tag.is_empty()) {
                Some(tag) => warn!(color = %color.id, tag, "unknown dynasty tag, using {}", DEFAULT_DYNASTY),
                None => debug!(color = %color.id, "no dynasty tag"),
            }
            DEFAULT_DYNASTY
        }
    }
}

/// Canonical mood a color is filed under.
///
/// Missing, empty or unknown first tags fall back to [`DEFAULT_MOOD`].
#[must_use]
pub fn resolve_mood(color: &TraditionalColor) -> &'static str {
    match color.primary_mood().and_then(catalog::mood_index) {
        Some(slot) => MOODS[slot].name,
        None => {
            match color.primary_mood().filter(|tag| !tag.is_empty()) {
                Some(tag) => warn!(color = %color.id, tag, "unknown mood tag, using {}", DEFAULT_MOOD),
                None => debug!(color = %color.id, "no mood tag"),
            }
            DEFAULT_MOOD
        }
    }
}

/// Partitions colors into dynasty columns.
///
/// Only dynasties with at least one member are returned, in timeline order.
/// Every input color appears in exactly one column.
#[must_use]
pub fn group_by_dynasty(colors: &[TraditionalColor]) -> Vec<LensColumn<'_>> {
    let mut buckets: Vec<Vec<&TraditionalColor>> = vec![Vec::new(); DYNASTIES.len()];
    for color in colors {
        let slot = catalog::dynasty_index(resolve_dynasty(color)).unwrap_or_default();
        buckets[slot].push(color);
    }
    into_columns(buckets, |slot| DYNASTIES[slot].name)
}

/// Partitions colors into mood columns.
///
/// Only moods with at least one member are returned, in column order. Every
/// input color appears in exactly one column.
#[must_use]
pub fn group_by_mood(colors: &[TraditionalColor]) -> Vec<LensColumn<'_>> {
    let mut buckets: Vec<Vec<&TraditionalColor>> = vec![Vec::new(); MOODS.len()];
    for color in colors {
        let slot = catalog::mood_index(resolve_mood(color)).unwrap_or_default();
        buckets[slot].push(color);
    }
    into_columns(buckets, |slot| MOODS[slot].name)
}

fn into_columns<'a>(
    buckets: Vec<Vec<&'a TraditionalColor>>,
    key: impl Fn(usize) -> &'static str,
) -> Vec<LensColumn<'a>> {
    buckets
        .into_iter()
        .enumerate()
        .filter(|(_, members)| !members.is_empty())
        .map(|(slot, members)| LensColumn {
            key: key(slot),
            slot,
            members,
        })
        .collect()
}

/// Orb diameter in pixels for the color at `index` in dataset order.
#[must_use]
pub fn orb_size(index: usize) -> f64 {
    seeded_random(index + 100).mul_add(22.0, 48.0)
}

/// Clamps without panicking when `min > max` (min wins, as on narrow viewports).
fn clamp_between(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColorDataset;

    fn color(id: &str, hex: &str, dynasty: &[&str], mood: &[&str]) -> TraditionalColor {
        let mut c = TraditionalColor::from_hex(id, id, hex).unwrap();
        c.dynasties = dynasty.iter().map(|s| (*s).to_string()).collect();
        c.moods = mood.iter().map(|s| (*s).to_string()).collect();
        c
    }

    #[test]
    fn test_seeded_random_range_and_determinism() {
        for seed in 0..2000 {
            let r = seeded_random(seed);
            assert!((0.0..1.0).contains(&r), "seed {seed} gave {r}");
            assert_eq!(r.to_bits(), seeded_random(seed).to_bits());
        }
    }

    #[test]
    fn test_seeded_random_spreads() {
        let distinct = (0..100)
            .map(|s| (seeded_random(s) * 10.0) as usize)
            .collect::<std::collections::HashSet<_>>();
        assert!(distinct.len() >= 8);
    }

    #[test]
    fn test_viewport_clamps_usable_space() {
        let vp = Viewport::new(100.0, 100.0);
        assert_eq!(vp.usable_width(), 0.0);
        assert_eq!(vp.usable_height(), 0.0);

        let vp = Viewport::new(-5.0, f64::NAN);
        assert_eq!(vp.width, 0.0);
        assert_eq!(vp.height, 0.0);

        let vp = Viewport::default();
        assert_eq!(vp.usable_width(), 920.0);
        assert_eq!(vp.usable_height(), 520.0);
    }

    #[test]
    fn test_hue_order_sorts_family_then_hue() {
        let colors = vec![
            color("blue", "#1E3A8A", &[], &[]),
            color("white", "#FFFFFF", &[], &[]),
            color("red-late", "#DB5A6B", &[], &[]),
            color("red-early", "#FF461F", &[], &[]),
        ];
        let order: Vec<_> = hue_order(&colors).into_iter().map(|(c, _)| c.id.as_str()).collect();
        assert_eq!(order, vec!["red-early", "red-late", "blue", "white"]);
    }

    #[test]
    fn test_single_color_hue_layout() {
        let colors = vec![color("only", "#C3272B", &[], &[])];
        let positions = compute_layout(&colors, Lens::Hue, Viewport::default());
        assert_eq!(positions.len(), 1);
        // t = 0: top of the usable area
        assert!(positions[0].y >= PAD_TOP && positions[0].y <= PAD_TOP + 5.0);
    }

    #[test]
    fn test_hue_alternates_sides_of_stem() {
        let dataset = ColorDataset::load().unwrap();
        // Wide viewport so the clamp never interferes
        let vp = Viewport::new(4000.0, 1200.0);
        let positions = compute_layout(dataset.colors(), Lens::Hue, vp);
        let n = positions.len();
        for (i, p) in positions.iter().enumerate() {
            let t = i as f64 / (n - 1) as f64;
            let offset = p.x - stem_x(t, vp);
            if i % 2 == 0 {
                assert!(offset > 30.0, "rank {i} should branch right, got {offset}");
            } else {
                assert!(offset < -30.0, "rank {i} should branch left, got {offset}");
            }
        }
    }

    #[test]
    fn test_dynasty_columns_follow_timeline() {
        let colors = vec![
            color("a", "#C3272B", &["清"], &["威严"]),
            color("b", "#FF461F", &["周"], &["庄重"]),
            color("c", "#9D2933", &["唐", "周"], &["温润"]),
        ];
        let columns = group_by_dynasty(&colors);
        let keys: Vec<_> = columns.iter().map(|c| c.key).collect();
        assert_eq!(keys, vec!["周", "唐", "清"]);

        let positions = compute_layout(&colors, Lens::Dynasty, Viewport::default());
        let x = |id: &str| positions.iter().find(|p| p.color_id == id).unwrap().x;
        assert!(x("b") < x("c"));
        assert!(x("c") < x("a"));
    }

    #[test]
    fn test_unknown_and_empty_tags_fall_back() {
        let colors = vec![
            color("none", "#C3272B", &[], &[]),
            color("blank", "#C3272B", &[""], &[""]),
            color("odd", "#C3272B", &["Atlantis"], &["Gloomy"]),
        ];
        let dynasty = group_by_dynasty(&colors);
        assert_eq!(dynasty.len(), 1);
        assert_eq!(dynasty[0].key, DEFAULT_DYNASTY);
        assert_eq!(dynasty[0].members.len(), 3);

        let mood = group_by_mood(&colors);
        assert_eq!(mood.len(), 1);
        assert_eq!(mood[0].key, DEFAULT_MOOD);
        assert_eq!(mood[0].slot, 7);
    }

    #[test]
    fn test_mood_columns_use_fixed_slots() {
        // Only the first and last moods present: columns sit at slot 0 and slot 7.
        let colors = vec![
            color("a", "#C3272B", &["唐"], &["威严"]),
            color("b", "#C3272B", &["唐"], &["天然"]),
        ];
        let vp = Viewport::default();
        let positions = compute_layout(&colors, Lens::Mood, vp);
        let slot_width = vp.usable_width() / 8.0;
        let a = &positions[0];
        let b = &positions[1];
        assert!((a.x - (PAD_X + 0.5 * slot_width)).abs() <= 20.0);
        assert!((b.x - (PAD_X + 7.5 * slot_width)).abs() <= 20.0);
    }

    #[test]
    fn test_mood_column_is_vertically_centered() {
        let colors: Vec<_> = (0..5)
            .map(|i| color(&format!("c{i}"), "#C3272B", &["唐"], &["空灵"]))
            .collect();
        let vp = Viewport::default();
        let positions = compute_layout(&colors, Lens::Mood, vp);
        let column_h = vp.usable_height() - MOOD_LABEL_RESERVE;
        let mid = PAD_TOP + column_h / 2.0;
        let mean = positions.iter().map(|p| p.y).sum::<f64>() / positions.len() as f64;
        assert!((mean - mid).abs() < 6.0, "mean {mean} vs mid {mid}");
    }

    #[test]
    fn test_dynasty_spacing_caps_at_sixty() {
        let colors: Vec<_> = (0..2)
            .map(|i| color(&format!("c{i}"), "#C3272B", &["宋"], &["雅致"]))
            .collect();
        let positions = compute_layout(&colors, Lens::Dynasty, Viewport::new(1200.0, 2000.0));
        let gap = positions[1].y - positions[0].y;
        assert!((gap - 60.0).abs() <= 12.0, "gap {gap}");
    }

    #[test]
    fn test_stem_path_endpoints() {
        let vp = Viewport::default();
        let path = stem_path(vp, 50);
        assert_eq!(path.len(), 51);
        assert!((path[0].0 - 600.0).abs() < 1e-9);
        assert!((path[0].1 - PAD_TOP).abs() < 1e-9);
        assert!((path[50].1 - (PAD_TOP + 520.0)).abs() < 1e-9);
    }

    #[test]
    fn test_orb_size_range() {
        for i in 0..100 {
            let size = orb_size(i);
            assert!((48.0..70.0).contains(&size));
        }
    }

    #[test]
    fn test_clamp_between_handles_inverted_bounds() {
        assert_eq!(clamp_between(500.0, 140.0, 60.0), 140.0);
        assert_eq!(clamp_between(50.0, 140.0, 1060.0), 140.0);
        assert_eq!(clamp_between(2000.0, 140.0, 1060.0), 1060.0);
    }
}
