use crate::storage::KeyValueStorage;
use shared_types::{AppError, Role, Session};

/// The single session slot.
///
/// `load` never fails: a missing, unreadable or malformed value is the same
/// as no session at all.
pub trait SessionStore: Send + Sync {
    /// Persist `session`, replacing any previous one.
    fn save(&self, session: &Session) -> Result<(), AppError>;

    /// Read the current session, if a valid one is stored.
    fn load(&self) -> Option<Session>;

    /// Forget the current session. Clearing an empty store succeeds.
    fn clear(&self) -> Result<(), AppError>;

    /// Mint a session for `role` and save it.
    fn save_role(&self, role: Role, email: &str) -> Result<Session, AppError> {
        let session = Session::new(role, email);
        self.save(&session)?;
        Ok(session)
    }
}

/// A [`SessionStore`] keeping the session under one well-known key of a
/// [`KeyValueStorage`].
#[derive(Debug)]
pub struct KeyedSessionStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> KeyedSessionStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }
}

impl<S: KeyValueStorage> SessionStore for KeyedSessionStore<S> {
    fn save(&self, session: &Session) -> Result<(), AppError> {
        self.storage.set_item(&self.key, &session.to_stored())
    }

    fn load(&self) -> Option<Session> {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Session storage unreadable, treating as signed out");
                return None;
            }
        };
        let session = Session::from_stored(&raw);
        if session.is_none() {
            tracing::warn!(key = %self.key, "Ignoring malformed stored session");
        }
        session
    }

    fn clear(&self) -> Result<(), AppError> {
        self.storage.remove_item(&self.key)
    }
}
