//! In-memory storage implementation.

use super::{PreferenceStorage, StorageResult};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory storage for tests and for pages where `localStorage` is blocked.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create a new empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let storage = MemoryStorage::new();
        storage.set_item("k", "v").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v"));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_missing_key() {
        let storage = MemoryStorage::new();
        assert!(storage.get_item("nonexistent").unwrap().is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_overwrite() {
        let storage = MemoryStorage::new();
        storage.set_item("k", "1").unwrap();
        storage.set_item("k", "0").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("0"));
        assert_eq!(storage.len(), 1);
    }
}
