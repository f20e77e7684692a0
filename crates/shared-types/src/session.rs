use crate::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// One configured login. Plaintext on purpose: this is a demo gate, not a
/// trust boundary.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credential {
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl Credential {
    pub fn new(email: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            role,
        }
    }

    /// The three logins the dashboard ships with.
    pub fn demo_set() -> Vec<Credential> {
        vec![
            Credential::new("funcionario@aura.com", "123456", Role::Employee),
            Credential::new("gerente@aura.com", "123456", Role::Manager),
            Credential::new("estoque@aura.com", "123456", Role::Inventory),
        ]
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

/// Client-held proof of a successful login.
///
/// Only the role claim is authoritative. `id` is an opaque per-login
/// identifier and `email` is kept for display; the password is never part
/// of a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub id: Uuid,
    pub role: Role,
    pub email: String,
    pub issued_at: DateTime<Utc>,
}

/// Shape accepted when reading a stored session back.
///
/// Older builds stored the whole matched credential (`email`, `password`,
/// `role`) with no id or timestamp. Those still load; unknown fields such as
/// `password` are dropped by serde.
#[derive(Deserialize)]
struct StoredSession {
    #[serde(default)]
    id: Option<Uuid>,
    role: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    issued_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(role: Role, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            email: email.into(),
            issued_at: Utc::now(),
        }
    }

    /// Parse a value read from storage. Never fails loudly: anything that is
    /// not a session with a known role yields `None`.
    ///
    /// Legacy values without an id get the nil id and the Unix epoch as
    /// their issue time.
    pub fn from_stored(raw: &str) -> Option<Self> {
        let stored: StoredSession = serde_json::from_str(raw).ok()?;
        let role = Role::parse(&stored.role)?;
        Some(Self {
            id: stored.id.unwrap_or(Uuid::nil()),
            role,
            email: stored.email,
            issued_at: stored.issued_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
        })
    }

    pub fn to_stored(&self) -> String {
        // A struct of plain strings, a uuid and a timestamp always serializes.
        serde_json::to_string(self).unwrap_or_default()
    }
}
