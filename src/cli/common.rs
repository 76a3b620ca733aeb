//! Shared CLI plumbing: error kinds, exit codes and dataset loading.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::models::ColorDataset;

/// Process exit codes used by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad arguments or invalid data
    ValidationError = 1,
    /// Filesystem or serialization failure
    IoError = 2,
    /// A requested color does not exist
    NotFound = 3,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI command handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Error category, mapped to the exit code
    pub kind: ExitCode,
    /// Human-readable message printed to stderr
    pub message: String,
}

impl CliError {
    /// I/O failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Validation failure (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// Missing color or other entity (exit code 3).
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::NotFound,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.kind.code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Options shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct CliContext {
    /// Dataset file replacing the embedded one
    pub dataset_path: Option<PathBuf>,
}

impl CliContext {
    /// Loads the dataset for this invocation.
    ///
    /// A missing file is an I/O error; a file that parses badly or fails
    /// validation is a validation error.
    pub fn dataset(&self) -> CliResult<ColorDataset> {
        load_dataset(self.dataset_path.as_deref())
    }
}

fn load_dataset(path: Option<&Path>) -> CliResult<ColorDataset> {
    if let Some(path) = path {
        if !path.exists() {
            return Err(CliError::io(format!(
                "Dataset file not found: {}",
                path.display()
            )));
        }
    }

    ColorDataset::load_or_default(path)
        .map_err(|e| CliError::validation(format!("Failed to load dataset: {e:#}")))
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}
