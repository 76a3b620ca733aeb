//! Labels drawn around the column lenses: dynasty counts and mood accents.

use crate::models::{DynastyInfo, MoodInfo, RgbColor, TraditionalColor, DYNASTIES, MOODS};
use crate::services::layout::{group_by_dynasty, group_by_mood};

/// Number of colors filed under each dynasty, in timeline order.
///
/// Every dynasty is listed, including empty ones, so the timeline can be drawn
/// in full.
#[must_use]
pub fn dynasty_counts(colors: &[TraditionalColor]) -> Vec<(&'static DynastyInfo, usize)> {
    let mut counts = vec![0usize; DYNASTIES.len()];
    for column in group_by_dynasty(colors) {
        counts[column.slot] = column.members.len();
    }
    DYNASTIES.iter().zip(counts).collect()
}

/// Average color of each mood column, `None` for moods with no members.
#[must_use]
pub fn mood_accents(colors: &[TraditionalColor]) -> Vec<(&'static MoodInfo, Option<RgbColor>)> {
    let mut accents = vec![None; MOODS.len()];
    for column in group_by_mood(colors) {
        accents[column.slot] = RgbColor::average(column.members.iter().map(|c| &c.rgb));
    }
    MOODS.iter().zip(accents).collect()
}
