//! The color dataset: embedded default plus optional external file.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::TraditionalColor;

/// Read-only collection of traditional colors.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorDataset {
    colors: Vec<TraditionalColor>,
}

impl ColorDataset {
    /// Load the bundled dataset from embedded JSON data.
    ///
    /// # Errors
    /// Returns an error if the JSON data cannot be parsed or fails validation.
    pub fn load() -> Result<Self> {
        let json_data = include_str!("../data/colors.json");
        Self::from_json(json_data).context("Failed to load embedded color dataset")
    }

    /// Loads a dataset from a JSON file on disk.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read dataset file: {}", path.display()))?;
        Self::from_json(&content)
            .context(format!("Failed to load dataset file: {}", path.display()))
    }

    /// Loads the file at `path` if given, otherwise the embedded dataset.
    ///
    /// # Errors
    /// See [`ColorDataset::load`] and [`ColorDataset::load_from`].
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load(),
        }
    }

    /// Parses and validates a JSON array of color records.
    ///
    /// # Errors
    /// Returns an error on malformed JSON, an invalid record, or a duplicate id.
    pub fn from_json(json: &str) -> Result<Self> {
        let colors: Vec<TraditionalColor> =
            serde_json::from_str(json).context("Failed to parse color dataset JSON")?;
        Self::new(colors)
    }

    /// Wraps already-built colors after validating them.
    ///
    /// # Errors
    /// Returns an error if any record is invalid or an id repeats.
    pub fn new(colors: Vec<TraditionalColor>) -> Result<Self> {
        let mut seen = HashSet::new();
        for (index, color) in colors.iter().enumerate() {
            color
                .validate()
                .context(format!("Invalid color record at index {index}"))?;
            if !seen.insert(color.id.as_str()) {
                anyhow::bail!("Duplicate color id '{}' at index {index}", color.id);
            }
        }
        Ok(Self { colors })
    }

    /// All colors in dataset order.
    #[must_use]
    pub fn colors(&self) -> &[TraditionalColor] {
        &self.colors
    }

    /// Looks up a color by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&TraditionalColor> {
        self.colors.iter().find(|c| c.id == id)
    }

    /// Position of a color in dataset order.
    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.colors.iter().position(|c| c.id == id)
    }

    /// Number of colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the dataset is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HueFamily, RgbColor};
    use crate::services::classifier::classify;

    #[test]
    fn test_load_embedded() {
        let dataset = ColorDataset::load().expect("Failed to load dataset");
        assert_eq!(dataset.len(), 65);

        let dahong = dataset.get("da-hong").expect("da-hong should exist");
        assert_eq!(dahong.name, "大红");
        assert_eq!(dahong.rgb, RgbColor::new(0xC3, 0x27, 0x2B));
    }

    #[test]
    fn test_embedded_hsl_consistent_with_rgb() {
        let dataset = ColorDataset::load().unwrap();
        for color in dataset.colors() {
            assert_eq!(color.rgb.to_hsl(), color.hsl, "HSL mismatch for {}", color.id);
            assert_eq!(color.rgb.to_cmyk(), color.cmyk, "CMYK mismatch for {}", color.id);
        }
    }

    #[test]
    fn test_embedded_tags_non_empty() {
        let dataset = ColorDataset::load().unwrap();
        for color in dataset.colors() {
            assert!(!color.dynasties.is_empty(), "{} has no dynasty", color.id);
            assert!(!color.moods.is_empty(), "{} has no mood", color.id);
        }
    }

    #[test]
    fn test_embedded_known_classifications() {
        let dataset = ColorDataset::load().unwrap();
        let family = |id: &str| classify(&dataset.get(id).unwrap().hsl);
        assert_eq!(family("li-se"), HueFamily::Brown);
        assert_eq!(family("tuo-se"), HueFamily::Brown);
        assert_eq!(family("hu-po"), HueFamily::Orange);
        assert_eq!(family("jing-bai"), HueFamily::White);
        assert_eq!(family("qi-hei"), HueFamily::Black);
        assert_eq!(family("dian-lan"), HueFamily::Blue);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let a = TraditionalColor::from_hex("a", "A", "#000000").unwrap();
        let err = ColorDataset::new(vec![a.clone(), a]).unwrap_err();
        assert!(err.to_string().contains("Duplicate"));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(ColorDataset::from_json("{").is_err());
        assert!(ColorDataset::from_json(r#"[{"id": "x"}]"#).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colors.json");
        let color = TraditionalColor::from_hex("only", "唯一", "#123456").unwrap();
        fs::write(&path, serde_json::to_string(&vec![color]).unwrap()).unwrap();

        let dataset = ColorDataset::load_from(&path).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.index_of("only"), Some(0));

        assert!(ColorDataset::load_from(&dir.path().join("missing.json")).is_err());
    }
}
