use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    InvalidCredentials,
    ValidationError,
    LoginInProgress,
    Cancelled,
    StorageError,
    ConfigError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::InvalidCredentials => write!(f, "InvalidCredentials"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::LoginInProgress => write!(f, "LoginInProgress"),
            AppErrorKind::Cancelled => write!(f, "Cancelled"),
            AppErrorKind::StorageError => write!(f, "StorageError"),
            AppErrorKind::ConfigError => write!(f, "ConfigError"),
        }
    }
}

/// Structured application error shared by the gate and the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    fn of(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn invalid_credentials() -> Self {
        Self::of(AppErrorKind::InvalidCredentials, "Incorrect email or password")
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn login_in_progress() -> Self {
        Self::of(AppErrorKind::LoginInProgress, "A sign-in attempt is already in progress")
    }

    pub fn cancelled() -> Self {
        Self::of(AppErrorKind::Cancelled, "Sign-in was cancelled")
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::of(AppErrorKind::StorageError, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::of(AppErrorKind::ConfigError, message)
    }

    /// Errors the login form swallows instead of displaying.
    pub fn is_silent(&self) -> bool {
        matches!(self.kind, AppErrorKind::LoginInProgress | AppErrorKind::Cancelled)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Validation failed", field_errors)
    }
}
