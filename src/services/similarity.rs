//! Nearest-color lookup and palette suggestions.

use crate::models::{ColorDataset, Palette, TraditionalColor};

/// Number of similar colors shown in the detail view.
pub const DEFAULT_SIMILAR_COUNT: usize = 4;

/// Number of suggestions offered by the palette lab.
pub const SUGGESTION_COUNT: usize = 12;

/// The `count` colors nearest to `target` by RGB distance, nearest first.
///
/// The target itself is excluded. Ties keep dataset order.
#[must_use]
pub fn find_similar<'a>(
    target: &TraditionalColor,
    all: &'a [TraditionalColor],
    count: usize,
) -> Vec<&'a TraditionalColor> {
    let mut candidates: Vec<_> = all
        .iter()
        .filter(|c| c.id != target.id)
        .map(|c| (c, target.rgb.distance(&c.rgb)))
        .collect();
    candidates.sort_by(|a, b| a.1.total_cmp(&b.1));
    candidates.into_iter().take(count).map(|(c, _)| c).collect()
}

/// Circular distance between two hue angles, in `[0, 180]`.
#[must_use]
pub fn hue_distance(a: f64, b: f64) -> f64 {
    ((a - b + 540.0).rem_euclid(360.0) - 180.0).abs()
}

/// Colors that would complement the palette.
///
/// Candidates not already in the palette are ranked by how far their hue is
/// from the closest palette hue, farthest first. With an empty palette the
/// first `count` dataset colors are returned.
#[must_use]
pub fn suggest_complements<'a>(
    palette: &Palette,
    dataset: &'a ColorDataset,
    count: usize,
) -> Vec<&'a TraditionalColor> {
    let palette_hues: Vec<f64> = palette
        .ids()
        .filter_map(|id| dataset.get(id))
        .map(|c| c.hsl.h)
        .collect();

    if palette_hues.is_empty() {
        return dataset
            .colors()
            .iter()
            .filter(|c| !palette.contains(&c.id))
            .take(count)
            .collect();
    }

    let mut ranked: Vec<_> = dataset
        .colors()
        .iter()
        .filter(|c| !palette.contains(&c.id))
        .map(|c| {
            let nearest = palette_hues
                .iter()
                .map(|h| hue_distance(c.hsl.h, *h))
                .fold(f64::INFINITY, f64::min);
            (c, nearest)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.into_iter().take(count).map(|(c, _)| c).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(id: &str, hex: &str) -> TraditionalColor {
        TraditionalColor::from_hex(id, id, hex).unwrap()
    }

    #[test]
    fn test_hue_distance_wraps() {
        assert_eq!(hue_distance(10.0, 350.0), 20.0);
        assert_eq!(hue_distance(350.0, 10.0), 20.0);
        assert_eq!(hue_distance(0.0, 180.0), 180.0);
        assert_eq!(hue_distance(90.0, 90.0), 0.0);
    }

    #[test]
    fn test_find_similar_excludes_target_and_orders() {
        let all = vec![
            color("red", "#FF0000"),
            color("dark-red", "#DD0000"),
            color("blue", "#0000FF"),
            color("near-red", "#FE0101"),
        ];
        let similar = find_similar(&all[0], &all, 2);
        let ids: Vec<_> = similar.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["near-red", "dark-red"]);
    }

    #[test]
    fn test_find_similar_count_larger_than_pool() {
        let all = vec![color("a", "#000000"), color("b", "#FFFFFF")];
        assert_eq!(find_similar(&all[0], &all, 10).len(), 1);
    }

    #[test]
    fn test_find_similar_ties_keep_dataset_order() {
        let all = vec![
            color("target", "#808080"),
            color("up", "#818080"),
            color("down", "#7F8080"),
        ];
        let ids: Vec<_> = find_similar(&all[0], &all, 2).iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids, vec!["up", "down"]);
    }

    #[test]
    fn test_suggestions_for_empty_palette() {
        let dataset = ColorDataset::load().unwrap();
        let suggestions = suggest_complements(&Palette::new(), &dataset, SUGGESTION_COUNT);
        let expected: Vec<_> = dataset.colors().iter().take(12).map(|c| &c.id).collect();
        let actual: Vec<_> = suggestions.iter().map(|c| &c.id).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_suggestions_prefer_opposite_hues() {
        let dataset = ColorDataset::new(vec![
            color("red", "#FF0000"),
            color("orange", "#FF8000"),
            color("cyan", "#00FFFF"),
            color("green", "#00FF00"),
        ])
        .unwrap();
        let mut palette = Palette::new();
        palette.add("red");

        let suggestions = suggest_complements(&palette, &dataset, 3);
        let ids: Vec<_> = suggestions.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["cyan", "green", "orange"]);
    }

    #[test]
    fn test_suggestions_exclude_palette_members() {
        let dataset = ColorDataset::load().unwrap();
        let mut palette = Palette::new();
        for c in dataset.colors().iter().take(3) {
            palette.add(&c.id);
        }
        let suggestions = suggest_complements(&palette, &dataset, SUGGESTION_COUNT);
        assert_eq!(suggestions.len(), SUGGESTION_COUNT);
        assert!(suggestions.iter().all(|c| !palette.contains(&c.id)));
    }
}
