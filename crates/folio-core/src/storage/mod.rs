//! Storage abstraction for the persisted preference flag.

mod memory;

#[cfg(target_arch = "wasm32")]
mod local;

pub use memory::MemoryStorage;

#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;

use thiserror::Error;

/// Default key under which the dark-mode flag is stored.
pub const DARK_MODE_KEY: &str = "dark-mode";

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("Read error: {0}")]
    Read(String),
    #[error("Write error: {0}")]
    Write(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// A string key-value store, modelled on the browser's `localStorage`.
pub trait PreferenceStorage {
    /// Read a value. `Ok(None)` means the key is absent.
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write a value.
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;
}

impl<S: PreferenceStorage + ?Sized> PreferenceStorage for Box<S> {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set_item(key, value)
    }
}

/// Read the dark-mode flag. Only an exact `"1"` means dark; anything else,
/// including a read failure, means light.
pub fn load_dark(storage: &dyn PreferenceStorage, key: &str) -> bool {
    match storage.get_item(key) {
        Ok(value) => value.as_deref() == Some("1"),
        Err(e) => {
            log::warn!("Failed to read {}: {}", key, e);
            false
        }
    }
}

/// Persist the dark-mode flag as `"1"` or `"0"`.
pub fn save_dark(storage: &dyn PreferenceStorage, key: &str, on: bool) -> StorageResult<()> {
    storage.set_item(key, if on { "1" } else { "0" })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStorage;

    impl PreferenceStorage for BrokenStorage {
        fn get_item(&self, _key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::Read("denied".to_string()))
        }

        fn set_item(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Write("quota".to_string()))
        }
    }

    #[test]
    fn test_load_dark_only_for_one() {
        let storage = MemoryStorage::new();
        assert!(!load_dark(&storage, DARK_MODE_KEY));

        for (value, expected) in [("1", true), ("0", false), ("true", false), ("", false)] {
            storage.set_item(DARK_MODE_KEY, value).unwrap();
            assert_eq!(load_dark(&storage, DARK_MODE_KEY), expected, "value {value:?}");
        }
    }

    #[test]
    fn test_save_dark_encoding() {
        let storage = MemoryStorage::new();
        save_dark(&storage, DARK_MODE_KEY, true).unwrap();
        assert_eq!(storage.get_item(DARK_MODE_KEY).unwrap().as_deref(), Some("1"));
        save_dark(&storage, DARK_MODE_KEY, false).unwrap();
        assert_eq!(storage.get_item(DARK_MODE_KEY).unwrap().as_deref(), Some("0"));
    }

    #[test]
    fn test_read_failure_means_light() {
        assert!(!load_dark(&BrokenStorage, DARK_MODE_KEY));
        assert!(matches!(
            save_dark(&BrokenStorage, DARK_MODE_KEY, true),
            Err(StorageError::Write(_))
        ));
    }
}
