use shared_types::AppError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

mod file;

pub use file::FileStorage;

// ── Trait ────────────────────────────────────────────────────────────

/// String key-value storage with the shape of the browser's `localStorage`.
pub trait KeyValueStorage: Send + Sync {
    /// Read a value. A missing key is `Ok(None)`, not an error.
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Write a value, replacing whatever was there.
    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Delete a value. Removing a missing key succeeds.
    fn remove_item(&self, key: &str) -> Result<(), AppError>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Arc<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), AppError> {
        (**self).remove_item(key)
    }
}

// ── In-memory implementation ────────────────────────────────────────

/// Process-local storage. Lost on exit.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, AppError> {
        self.items
            .lock()
            .map_err(|_| AppError::storage("memory storage lock poisoned"))
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), AppError> {
        self.lock()?.remove(key);
        Ok(())
    }
}
