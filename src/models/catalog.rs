//! Fixed dynasty timeline and mood tables used by the column lenses.

use super::Locale;

/// Dynasty used when a color has no usable dynasty tag.
pub const DEFAULT_DYNASTY: &str = "明";

/// Mood used when a color has no usable mood tag.
pub const DEFAULT_MOOD: &str = "天然";

/// Display information for one dynasty on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DynastyInfo {
    /// Chinese name, also the tag used in the dataset
    pub name: &'static str,
    /// English name
    pub en: &'static str,
    /// Approximate reign years
    pub years: &'static str,
    /// Major dynasties get a wider slot on the timeline
    pub major: bool,
}

impl DynastyInfo {
    /// Label in the given locale.
    #[must_use]
    pub const fn label(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Zh => self.name,
            Locale::En => self.en,
        }
    }
}

/// The eighteen dynasties in chronological order.
pub const DYNASTIES: [DynastyInfo; 18] = [
    DynastyInfo { name: "夏", en: "Xia", years: "c.2070-1600 BC", major: false },
    DynastyInfo { name: "商", en: "Shang", years: "c.1600-1046 BC", major: false },
    DynastyInfo { name: "周", en: "Zhou", years: "1046-256 BC", major: true },
    DynastyInfo { name: "秦", en: "Qin", years: "221-206 BC", major: false },
    DynastyInfo { name: "汉", en: "Han", years: "206 BC-220 AD", major: true },
    DynastyInfo { name: "三国", en: "Three Kingdoms", years: "220-280", major: false },
    DynastyInfo { name: "两晋", en: "Jin", years: "266-420", major: false },
    DynastyInfo { name: "南北朝", en: "N&S Dynasties", years: "420-589", major: false },
    DynastyInfo { name: "隋", en: "Sui", years: "581-618", major: false },
    DynastyInfo { name: "唐", en: "Tang", years: "618-907", major: true },
    DynastyInfo { name: "五代十国", en: "Five Dynasties", years: "907-979", major: false },
    DynastyInfo { name: "辽", en: "Liao", years: "916-1125", major: false },
    DynastyInfo { name: "宋", en: "Song", years: "960-1279", major: true },
    DynastyInfo { name: "西夏", en: "Western Xia", years: "1038-1227", major: false },
    DynastyInfo { name: "金", en: "Jin", years: "1115-1234", major: false },
    DynastyInfo { name: "元", en: "Yuan", years: "1271-1368", major: true },
    DynastyInfo { name: "明", en: "Ming", years: "1368-1644", major: true },
    DynastyInfo { name: "清", en: "Qing", years: "1644-1912", major: true },
];

/// Display information for one mood column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodInfo {
    /// Chinese name, also the tag used in the dataset
    pub name: &'static str,
    /// English name
    pub en: &'static str,
    /// Short English gloss
    pub description: &'static str,
}

impl MoodInfo {
    /// Label in the given locale.
    #[must_use]
    pub const fn label(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Zh => self.name,
            Locale::En => self.en,
        }
    }
}

/// The eight moods in column order.
pub const MOODS: [MoodInfo; 8] = [
    MoodInfo { name: "威严", en: "Majestic", description: "Imperial authority and power" },
    MoodInfo { name: "温润", en: "Gentle", description: "Jade-like warmth" },
    MoodInfo { name: "庄重", en: "Solemn", description: "Ritual and ceremony" },
    MoodInfo { name: "空灵", en: "Ethereal", description: "Misty and transcendent" },
    MoodInfo { name: "深沉", en: "Deep", description: "Night and depth" },
    MoodInfo { name: "喜庆", en: "Joyous", description: "Festival and celebration" },
    MoodInfo { name: "雅致", en: "Elegant", description: "Refined literati taste" },
    MoodInfo { name: "天然", en: "Natural", description: "Earth and mineral" },
];

/// Index of a dynasty on the timeline.
#[must_use]
pub fn dynasty_index(name: &str) -> Option<usize> {
    DYNASTIES.iter().position(|d| d.name == name)
}

/// Index of a mood column.
#[must_use]
pub fn mood_index(name: &str) -> Option<usize> {
    MOODS.iter().position(|m| m.name == name)
}

/// Looks up a dynasty by Chinese name or English name (case-insensitive).
#[must_use]
pub fn find_dynasty(query: &str) -> Option<&'static DynastyInfo> {
    let query = query.trim();
    DYNASTIES
        .iter()
        .find(|d| d.name == query || d.en.eq_ignore_ascii_case(query))
}

/// Looks up a mood by Chinese name or English name (case-insensitive).
#[must_use]
pub fn find_mood(query: &str) -> Option<&'static MoodInfo> {
    let query = query.trim();
    MOODS
        .iter()
        .find(|m| m.name == query || m.en.eq_ignore_ascii_case(query))
}
