//! Data models for traditional colors, lenses, palettes and session state.
//!
//! This module contains all the core data structures used throughout the application.
//! Models are designed to be independent of UI and business logic.

pub mod catalog;
pub mod color;
pub mod dataset;
pub mod hue_family;
pub mod lens;
pub mod palette;
pub mod rgb;
pub mod session;

// Re-export all model types
pub use catalog::{DynastyInfo, MoodInfo, DEFAULT_DYNASTY, DEFAULT_MOOD, DYNASTIES, MOODS};
pub use color::{Cmyk, Hsl, TraditionalColor};
pub use dataset::ColorDataset;
pub use hue_family::HueFamily;
pub use lens::{Lens, Locale, View};
pub use palette::{Palette, PaletteEntry, PALETTE_CAPACITY};
pub use rgb::RgbColor;
pub use session::{Action, Point, SessionState};
