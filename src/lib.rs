//! Color Vein Library
//!
//! Core functionality for exploring traditional Chinese colors: the color
//! dataset, hue classification, lens layouts, palettes and their export, plus
//! the terminal explorer and the headless CLI built on top of them.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod shortcuts;
#[cfg(feature = "ratatui")]
pub mod tui;
