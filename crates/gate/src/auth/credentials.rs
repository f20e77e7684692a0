use shared_types::{AppConfig, Credential, Role};

/// Matches an email/password pair against the fixed credential set.
#[derive(Debug, Clone)]
pub struct CredentialVerifier {
    credentials: Vec<Credential>,
}

impl CredentialVerifier {
    pub fn new(credentials: Vec<Credential>) -> Self {
        Self { credentials }
    }

    /// Verifier over the three built-in demo logins.
    pub fn demo() -> Self {
        Self::new(Credential::demo_set())
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.credentials.clone())
    }

    /// Return the role of the first credential whose email and password both
    /// match exactly. Case-sensitive, no trimming.
    pub fn verify(&self, email: &str, password: &str) -> Option<Role> {
        self.credentials
            .iter()
            .find(|c| c.email == email && c.password == password)
            .map(|c| c.role)
    }

    pub fn credentials(&self) -> &[Credential] {
        &self.credentials
    }

    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }
}
