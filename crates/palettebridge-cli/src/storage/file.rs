//! File-based state storage.

use super::{StateStorage, StorageError, StorageResult};
use palettebridge_core::AppState;
use std::fs;
use std::path::{Path, PathBuf};

/// Stores the state as a pretty-printed JSON file.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Create a file storage at the given path.
    ///
    /// Parent directories are created on the first save.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default state file location.
    ///
    /// On Linux: `~/.local/share/palettebridge/state.json`
    /// On macOS: `~/Library/Application Support/palettebridge/state.json`
    /// On Windows: `%LOCALAPPDATA%\palettebridge\state.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .map(|base| base.join("palettebridge").join("state.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStorage for FileStorage {
    fn save(&self, state: &AppState) -> StorageResult<()> {
        let json = state
            .to_json()
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                StorageError::Io(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        fs::write(&self.path, json).map_err(|e| {
            StorageError::Io(format!("Failed to write {}: {}", self.path.display(), e))
        })?;
        log::debug!("Saved state to {}", self.path.display());
        Ok(())
    }

    fn load(&self) -> StorageResult<AppState> {
        if !self.path.exists() {
            return Err(StorageError::NotFound(self.path.display().to_string()));
        }

        let json = fs::read_to_string(&self.path).map_err(|e| {
            StorageError::Io(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        AppState::from_json(&json).map_err(|e| {
            StorageError::Serialization(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }

    fn exists(&self) -> StorageResult<bool> {
        Ok(self.path.exists())
    }
}
