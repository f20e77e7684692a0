use gate::{KeyValueStorage, KeyedSessionStore, SessionStore};
use std::sync::Arc;

/// The session store for this platform: `localStorage` on the web, a data
/// directory on desktop, memory otherwise.
pub fn session_store(key: &str) -> Arc<dyn SessionStore> {
    Arc::new(KeyedSessionStore::new(backend(), key))
}

#[cfg(feature = "web")]
fn backend() -> Arc<dyn KeyValueStorage> {
    Arc::new(LocalStorage)
}

#[cfg(all(feature = "desktop", not(feature = "web")))]
fn backend() -> Arc<dyn KeyValueStorage> {
    match directories::ProjectDirs::from("com", "Aura", "Aura Dashboard") {
        Some(dirs) => Arc::new(gate::FileStorage::new(dirs.data_dir())),
        None => {
            tracing::warn!("No data directory available, session will not survive restarts");
            Arc::new(gate::MemoryStorage::new())
        }
    }
}

#[cfg(not(any(feature = "web", feature = "desktop")))]
fn backend() -> Arc<dyn KeyValueStorage> {
    Arc::new(gate::MemoryStorage::new())
}

/// The browser's `window.localStorage`.
#[cfg(feature = "web")]
pub struct LocalStorage;

#[cfg(feature = "web")]
impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, shared_types::AppError> {
        use shared_types::AppError;

        web_sys::window()
            .ok_or_else(|| AppError::storage("no window"))?
            .local_storage()
            .map_err(|_| AppError::storage("localStorage access denied"))?
            .ok_or_else(|| AppError::storage("localStorage unavailable"))
    }
}

#[cfg(feature = "web")]
impl KeyValueStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, shared_types::AppError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| shared_types::AppError::storage("failed to read localStorage"))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), shared_types::AppError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| shared_types::AppError::storage("failed to write localStorage"))
    }

    fn remove_item(&self, key: &str) -> Result<(), shared_types::AppError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|_| shared_types::AppError::storage("failed to remove from localStorage"))
    }
}
