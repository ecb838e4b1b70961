//! CLI error type.

use crate::storage::StorageError;
use palettebridge_core::{PaletteError, StateError};
use palettebridge_export::ExportError;
use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("Rejected state: {0}")]
    State(#[from] StateError),
    #[error(transparent)]
    Palette(#[from] PaletteError),
    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;
