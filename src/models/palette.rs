//! User palette: a bounded, ordered, duplicate-free selection of colors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of colors a palette can hold.
pub const PALETTE_CAPACITY: usize = 8;

/// One palette slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// Id of the color in the dataset
    pub color_id: String,
    /// When the color was added
    pub added_at: DateTime<Utc>,
}

/// Ordered palette of up to [`PALETTE_CAPACITY`] distinct colors.
///
/// Adding a duplicate or adding to a full palette is silently ignored, so
/// callers never need an add-failure path. Deserialized palettes go through
/// the same rule: entries are replayed in order with [`Palette::add_at`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PaletteRecord")]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

/// Wire shape of a palette before its invariants are applied.
#[derive(Deserialize)]
struct PaletteRecord {
    #[serde(default)]
    entries: Vec<PaletteEntry>,
}

impl From<PaletteRecord> for Palette {
    fn from(record: PaletteRecord) -> Self {
        let mut palette = Self::new();
        for entry in record.entries {
            palette.add_at(&entry.color_id, entry.added_at);
        }
        palette
    }
}

impl Palette {
    /// Creates an empty palette.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a color stamped with the current time.
    ///
    /// Returns `true` if the color was added.
    pub fn add(&mut self, color_id: &str) -> bool {
        self.add_at(color_id, Utc::now())
    }

    /// Appends a color with an explicit timestamp.
    ///
    /// Returns `true` if the color was added, `false` if it was already present
    /// or the palette is full.
    pub fn add_at(&mut self, color_id: &str, added_at: DateTime<Utc>) -> bool {
        if self.is_full() || self.contains(color_id) {
            return false;
        }
        self.entries.push(PaletteEntry {
            color_id: color_id.to_string(),
            added_at,
        });
        true
    }

    /// Removes a color if present. Returns `true` if something was removed.
    pub fn remove(&mut self, color_id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.color_id != color_id);
        self.entries.len() != before
    }

    /// Removes every color.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Whether the color is in the palette.
    #[must_use]
    pub fn contains(&self, color_id: &str) -> bool {
        self.entries.iter().any(|e| e.color_id == color_id)
    }

    /// Number of colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the palette is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the palette holds [`PALETTE_CAPACITY`] colors.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= PALETTE_CAPACITY
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Color ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.color_id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut palette = Palette::new();
        assert!(palette.add_at("da-hong", ts(1)));
        assert!(palette.add_at("dian-lan", ts(2)));
        assert_eq!(palette.ids().collect::<Vec<_>>(), vec!["da-hong", "dian-lan"]);
        assert_eq!(palette.entries()[1].added_at, ts(2));
    }

    #[test]
    fn test_duplicate_add_is_noop() {
        let mut palette = Palette::new();
        palette.add("da-hong");
        assert!(!palette.add("da-hong"));
        assert_eq!(palette.len(), 1);
    }

    #[test]
    fn test_ninth_add_is_noop() {
        let mut palette = Palette::new();
        for i in 0..PALETTE_CAPACITY {
            assert!(palette.add(&format!("c{i}")));
        }
        assert!(palette.is_full());
        assert!(!palette.add("c-extra"));
        assert_eq!(palette.len(), PALETTE_CAPACITY);
        assert!(!palette.contains("c-extra"));
    }

    #[test]
    fn test_remove() {
        let mut palette = Palette::new();
        palette.add("a");
        palette.add("b");
        assert!(!palette.remove("missing"));
        assert_eq!(palette.len(), 2);
        assert!(palette.remove("a"));
        assert_eq!(palette.ids().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn test_remove_frees_a_slot() {
        let mut palette = Palette::new();
        for i in 0..PALETTE_CAPACITY {
            palette.add(&format!("c{i}"));
        }
        palette.remove("c3");
        assert!(palette.add("c-new"));
        assert_eq!(palette.ids().last(), Some("c-new"));
    }

    #[test]
    fn test_clear() {
        let mut palette = Palette::new();
        palette.clear();
        assert!(palette.is_empty());
        palette.add("a");
        palette.add("b");
        palette.clear();
        assert_eq!(palette.len(), 0);
    }

    #[test]
    fn test_deserialize_drops_overflow_and_duplicates() {
        let mut entries: Vec<String> = (0..10)
            .map(|i| format!(r#"{{"color_id":"c{i}","added_at":"2024-01-01T00:00:0{i}Z"}}"#))
            .collect();
        entries.push(r#"{"color_id":"c0","added_at":"2024-01-02T00:00:00Z"}"#.to_string());
        let json = format!(r#"{{"entries":[{}]}}"#, entries.join(","));

        let palette: Palette = serde_json::from_str(&json).unwrap();
        assert_eq!(palette.len(), PALETTE_CAPACITY);
        assert_eq!(
            palette.ids().collect::<Vec<_>>(),
            (0..PALETTE_CAPACITY).map(|i| format!("c{i}")).collect::<Vec<_>>()
        );
        assert!(!palette.contains("c8"));
        assert_eq!(palette.entries()[0].added_at, Utc.timestamp_opt(1_704_067_200, 0).unwrap());
    }

    #[test]
    fn test_serialize_roundtrip_keeps_entries() {
        let mut palette = Palette::new();
        palette.add_at("da-hong", ts(10));
        palette.add_at("dian-lan", ts(20));

        let json = serde_json::to_string(&palette).unwrap();
        let back: Palette = serde_json::from_str(&json).unwrap();
        assert_eq!(back, palette);
    }
}
