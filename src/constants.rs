//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and on-disk locations.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Color Vein";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "colorvein";

/// Directory name under the platform config directory.
pub const APP_DATA_DIR: &str = "ColorVein";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "COLORVEIN_CONFIG_DIR";

/// File name of the explorer's log inside the log directory.
pub const LOG_FILE_NAME: &str = "colorvein.log";
