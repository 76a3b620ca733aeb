//! CLI command handlers for Color Vein.
//!
//! This module provides headless, scriptable access to the color dataset,
//! the hue classifier, the lens layouts and palette export.

pub mod classify;
pub mod colors;
pub mod common;
pub mod config;
pub mod layout;
pub mod palette;
pub mod show;

// Re-export types used by main.rs and tests
pub use classify::ClassifyArgs;
pub use colors::ColorsArgs;
pub use common::{CliContext, CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use layout::LayoutArgs;
pub use palette::PaletteArgs;
pub use show::ShowArgs;
