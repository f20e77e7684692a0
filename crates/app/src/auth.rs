use dioxus::prelude::*;
use gate::{check_page, logout, Admission, CredentialVerifier, LoginFlow, PageAccess, SessionStore};
use shared_types::{AppConfig, FeatureFlags, Notice, Page, Session};
use std::sync::Arc;
use std::time::Duration;

/// Global authentication state.
#[derive(Clone)]
pub struct AuthState {
    pub flow: Arc<LoginFlow>,
    /// The admission granted by the last guard check, if any.
    pub admission: Signal<Option<Admission>>,
    /// Message left for the next screen after signing in or out.
    pub notice: Signal<Option<Notice>>,
    pub features: FeatureFlags,
    pub login_delay: Duration,
}

impl AuthState {
    pub fn from_config(config: &AppConfig) -> Self {
        let store = crate::storage::session_store(&config.session.storage_key);
        let verifier = CredentialVerifier::from_config(config);
        Self {
            flow: Arc::new(LoginFlow::new(verifier, store)),
            admission: Signal::new(None),
            notice: Signal::new(None),
            features: config.features.clone(),
            login_delay: config.session.login_delay(),
        }
    }

    pub fn store(&self) -> &dyn SessionStore {
        self.flow.store().as_ref()
    }

    pub fn current_session(&self) -> Option<Session> {
        self.store().load()
    }

    /// Run the guard against the stored session.
    pub fn check(&self, page: Page) -> PageAccess {
        check_page(self.store(), page)
    }

    pub fn admit(&mut self, admission: Admission) {
        let current = self.admission.peek().clone();
        if current.as_ref() != Some(&admission) {
            self.admission.set(Some(admission));
        }
    }

    pub fn forget(&mut self) {
        if self.admission.peek().is_some() {
            self.admission.set(None);
        }
    }

    pub fn announce(&mut self, notice: Notice) {
        self.notice.set(Some(notice));
    }

    pub fn dismiss_notice(&mut self) {
        self.notice.set(None);
    }

    /// Clear the session and return where to go next.
    pub fn sign_out(&mut self) -> Page {
        let next = logout(self.store());
        self.forget();
        self.announce(Notice::signed_out());
        next
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}
