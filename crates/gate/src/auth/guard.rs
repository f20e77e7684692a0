use crate::session_store::SessionStore;
use shared_types::{Page, Role, Session};

/// Proof that the guard admitted a session for a page.
///
/// Only [`authorize`] builds one, so a dashboard handed an `Admission` can
/// trust its role without checking again.
#[derive(Debug, Clone, PartialEq)]
pub struct Admission {
    session: Session,
}

impl Admission {
    pub fn role(&self) -> Role {
        self.session.role
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_session(self) -> Session {
        self.session
    }
}

/// Why the guard sent the visitor back to the login page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// No session, or the stored value could not be read as one.
    MissingOrMalformedSession,
    /// A valid session for a different dashboard.
    RoleMismatch { held: Role, required: Role },
}

/// Outcome of a guard check.
///
/// Both denial reasons lead to the same place: the login entry point.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    Allow(Admission),
    RedirectToLogin(DenyReason),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow(_))
    }

    /// Where the visitor must be sent instead, if anywhere.
    pub fn redirect_target(&self) -> Option<Page> {
        match self {
            Decision::Allow(_) => None,
            Decision::RedirectToLogin(_) => Some(Page::Login),
        }
    }

    pub fn admission(&self) -> Option<&Admission> {
        match self {
            Decision::Allow(admission) => Some(admission),
            Decision::RedirectToLogin(_) => None,
        }
    }
}

/// Compare the session's role with the role a page requires.
pub fn authorize(session: Option<&Session>, required: Role) -> Decision {
    match session {
        None => Decision::RedirectToLogin(DenyReason::MissingOrMalformedSession),
        Some(session) if session.role == required => Decision::Allow(Admission {
            session: session.clone(),
        }),
        Some(session) => Decision::RedirectToLogin(DenyReason::RoleMismatch {
            held: session.role,
            required,
        }),
    }
}

/// Per-mount guard state. `Unchecked` moves to a terminal state on the first
/// evaluation and stays there.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GuardState {
    #[default]
    Unchecked,
    Allowed(Admission),
    Redirected(DenyReason),
}

impl GuardState {
    pub fn evaluate(self, store: &dyn SessionStore, required: Role) -> GuardState {
        match self {
            GuardState::Unchecked => {
                let session = store.load();
                match authorize(session.as_ref(), required) {
                    Decision::Allow(admission) => GuardState::Allowed(admission),
                    Decision::RedirectToLogin(reason) => GuardState::Redirected(reason),
                }
            }
            terminal => terminal,
        }
    }

    pub fn decision(&self) -> Option<Decision> {
        match self {
            GuardState::Unchecked => None,
            GuardState::Allowed(admission) => Some(Decision::Allow(admission.clone())),
            GuardState::Redirected(reason) => Some(Decision::RedirectToLogin(*reason)),
        }
    }
}

/// Result of asking whether a page may render.
#[derive(Debug, Clone, PartialEq)]
pub enum PageAccess {
    /// The page needs no session.
    Public,
    Guarded(Decision),
}

/// Run the guard for a navigation to `page`.
pub fn check_page(store: &dyn SessionStore, page: Page) -> PageAccess {
    let Some(required) = page.required_role() else {
        return PageAccess::Public;
    };
    let decision = GuardState::Unchecked
        .evaluate(store, required)
        .decision()
        .unwrap_or(Decision::RedirectToLogin(DenyReason::MissingOrMalformedSession));
    match &decision {
        Decision::Allow(admission) => {
            tracing::debug!(page = page.path(), role = %admission.role(), "Guard allowed");
        }
        Decision::RedirectToLogin(reason) => {
            tracing::debug!(page = page.path(), ?reason, "Guard redirected to login");
        }
    }
    PageAccess::Guarded(decision)
}
