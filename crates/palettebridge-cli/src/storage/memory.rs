//! In-memory state storage.

use super::{StateStorage, StorageError, StorageResult};
use palettebridge_core::AppState;
use std::sync::RwLock;

/// In-memory storage for testing and ephemeral use.
#[derive(Default)]
pub struct MemoryStorage {
    state: RwLock<Option<AppState>>,
}

impl MemoryStorage {
    /// Create a new empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a memory storage holding a state.
    pub fn with_state(state: AppState) -> Self {
        Self {
            state: RwLock::new(Some(state)),
        }
    }
}

impl StateStorage for MemoryStorage {
    fn save(&self, state: &AppState) -> StorageResult<()> {
        let mut slot = self
            .state
            .write()
            .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
        *slot = Some(state.clone());
        Ok(())
    }

    fn load(&self) -> StorageResult<AppState> {
        let slot = self
            .state
            .read()
            .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
        slot.clone()
            .ok_or_else(|| StorageError::NotFound("memory".to_string()))
    }

    fn exists(&self) -> StorageResult<bool> {
        let slot = self
            .state
            .read()
            .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
        Ok(slot.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palettebridge_core::ThemeMode;

    #[test]
    fn test_save_and_load() {
        let storage = MemoryStorage::new();
        let state = AppState::sample().with_theme_mode(ThemeMode::Dark);

        storage.save(&state).unwrap();
        let loaded = storage.load().unwrap();

        assert_eq!(loaded, state);
    }

    #[test]
    fn test_not_found() {
        let storage = MemoryStorage::new();
        let result = storage.load();

        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_exists() {
        let storage = MemoryStorage::new();

        assert!(!storage.exists().unwrap());
        storage.save(&AppState::sample()).unwrap();
        assert!(storage.exists().unwrap());
    }
}
