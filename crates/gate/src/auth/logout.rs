use crate::session_store::SessionStore;
use shared_types::Page;

/// Clear the session and return the login entry point.
///
/// Navigation happens regardless of whether clearing succeeded; a failure is
/// only logged.
pub fn logout(store: &dyn SessionStore) -> Page {
    match store.clear() {
        Ok(()) => tracing::info!("Signed out"),
        Err(e) => tracing::warn!(error = %e, "Failed to clear session on sign-out"),
    }
    Page::Login
}
