//! Service layer for business logic.
//!
//! Pure functions over the models: hue classification, lens layout, pointer
//! interaction, similarity and palette suggestions. Nothing here touches the
//! terminal or the filesystem.

pub mod annotations;
pub mod classifier;
pub mod layout;
pub mod magnet;
pub mod similarity;

// Re-export commonly used types and functions
pub use classifier::{classify, classify_color};
pub use layout::{compute_layout, seeded_random, LayoutPosition, Viewport};
