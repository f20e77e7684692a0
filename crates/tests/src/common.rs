use gate::{
    CredentialVerifier, FileStorage, KeyValueStorage, KeyedSessionStore, LoginFlow, LoginRequest,
    MemoryStorage, SessionStore,
};
use shared_types::{AppError, Session, DEFAULT_STORAGE_KEY};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Generate a unique suffix for test isolation.
pub fn unique_suffix(prefix: &str) -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let ts = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{prefix}_{}_{ts}_{id}", std::process::id())
}

/// Fresh, not yet created directory under the system temp dir.
pub fn scratch_dir(prefix: &str) -> PathBuf {
    std::env::temp_dir().join(unique_suffix(prefix))
}

/// A gate over in-memory storage with the demo credentials. The storage is
/// returned too so tests can inspect or corrupt the raw value.
pub fn memory_gate() -> (Arc<LoginFlow>, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    let flow = flow_over(Arc::clone(&storage));
    (flow, storage)
}

/// A gate over file storage in `dir`.
pub fn file_gate(dir: &Path) -> Arc<LoginFlow> {
    flow_over(FileStorage::new(dir))
}

fn flow_over<S: KeyValueStorage + 'static>(storage: S) -> Arc<LoginFlow> {
    let store: Arc<dyn SessionStore> = Arc::new(KeyedSessionStore::new(storage, DEFAULT_STORAGE_KEY));
    Arc::new(LoginFlow::new(CredentialVerifier::demo(), store))
}

/// Submit a login with no verification delay.
pub async fn login(flow: &LoginFlow, email: &str, password: &str) -> Result<Session, AppError> {
    flow.submit(LoginRequest::new(email, password), std::future::ready(()))
        .await
}
