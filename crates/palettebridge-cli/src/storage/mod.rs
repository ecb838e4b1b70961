//! Storage abstraction for state persistence.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use palettebridge_core::AppState;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("State not found: {0}")]
    NotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for state storage backends.
///
/// A backend holds a single state snapshot.
pub trait StateStorage: Send + Sync {
    /// Save the state, replacing any previous snapshot.
    fn save(&self, state: &AppState) -> StorageResult<()>;

    /// Load the state.
    fn load(&self) -> StorageResult<AppState>;

    /// Check if a state has been saved.
    fn exists(&self) -> StorageResult<bool>;
}
