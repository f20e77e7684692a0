use crate::{AppError, Credential};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

/// Storage key used when `config.toml` does not name one.
pub const DEFAULT_STORAGE_KEY: &str = "aura.session";

/// Simulated verification latency when `config.toml` does not set one.
pub const DEFAULT_LOGIN_DELAY_MS: u64 = 1000;

/// Optional UI behaviour toggles.
///
/// Every field has a default so that a missing or incomplete config file
/// still produces a usable set of flags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureFlags {
    /// Show the demo logins under the sign-in form.
    #[serde(default = "default_true")]
    pub credential_hint: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            credential_hint: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// `[session]` section of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionSettings {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            login_delay_ms: DEFAULT_LOGIN_DELAY_MS,
        }
    }
}

impl SessionSettings {
    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_login_delay_ms() -> u64 {
    DEFAULT_LOGIN_DELAY_MS
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub session: SessionSettings,
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default = "Credential::demo_set")]
    pub credentials: Vec<Credential>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            session: SessionSettings::default(),
            features: FeatureFlags::default(),
            credentials: Credential::demo_set(),
        }
    }
}

impl AppConfig {
    /// Reject configs the verifier and session store cannot work with.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.session.storage_key.trim().is_empty() {
            return Err(AppError::config("session.storage_key must not be empty"));
        }
        let mut seen = HashSet::new();
        for cred in &self.credentials {
            #[cfg(feature = "validation")]
            if !validator::ValidateEmail::validate_email(&cred.email) {
                return Err(AppError::config(format!(
                    "credential email is not a valid address: {}",
                    cred.email
                )));
            }
            if !seen.insert(cred.email.as_str()) {
                return Err(AppError::config(format!(
                    "duplicate credential email: {}",
                    cred.email
                )));
            }
        }
        Ok(())
    }
}
