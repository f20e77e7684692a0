use crate::auth::credentials::CredentialVerifier;
use crate::session_store::SessionStore;
use serde::Deserialize;
use shared_types::{AppError, Session};
use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;
use validator::Validate;

/// Sign-in form payload.
#[derive(Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Enter your password"))]
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Holds the pending flag for the lifetime of one submission.
struct PendingGuard<'a>(&'a AtomicBool);

impl<'a> PendingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| PendingGuard(flag))
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Sign-in: validate, wait out the verification delay, verify, persist.
///
/// At most one submission runs at a time. A second `submit` while one is
/// pending fails immediately with `LoginInProgress` and touches nothing.
pub struct LoginFlow {
    verifier: CredentialVerifier,
    store: Arc<dyn SessionStore>,
    pending: AtomicBool,
    cancel: Notify,
}

impl LoginFlow {
    pub fn new(verifier: CredentialVerifier, store: Arc<dyn SessionStore>) -> Self {
        Self {
            verifier,
            store,
            pending: AtomicBool::new(false),
            cancel: Notify::new(),
        }
    }

    pub fn verifier(&self) -> &CredentialVerifier {
        &self.verifier
    }

    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Abort the pending submission, if any. It resolves to `Cancelled` and
    /// writes no session.
    pub fn cancel(&self) {
        if self.is_pending() {
            self.cancel.notify_waiters();
        }
    }

    /// Run one sign-in attempt.
    ///
    /// `delay` stands in for the verification round trip; pass
    /// `std::future::ready(())` for none. The caller navigates to
    /// `session.role.home()` on success.
    pub async fn submit<F>(&self, request: LoginRequest, delay: F) -> Result<Session, AppError>
    where
        F: Future<Output = ()>,
    {
        let _pending = PendingGuard::acquire(&self.pending).ok_or_else(AppError::login_in_progress)?;

        request.validate()?;

        let cancelled = self.cancel.notified();
        tokio::pin!(cancelled);
        cancelled.as_mut().enable();

        tokio::select! {
            biased;
            _ = &mut cancelled => {
                tracing::info!(email = %request.email, "Sign-in cancelled");
                return Err(AppError::cancelled());
            }
            _ = delay => {}
        }

        let Some(role) = self.verifier.verify(&request.email, &request.password) else {
            tracing::info!(email = %request.email, "Sign-in rejected");
            return Err(AppError::invalid_credentials());
        };

        let session = self.store.save_role(role, &request.email)?;
        tracing::info!(email = %request.email, role = %role, session_id = %session.id, "Signed in");
        Ok(session)
    }
}
