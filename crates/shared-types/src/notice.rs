use crate::Role;
use serde::{Deserialize, Serialize};

/// One-shot message shown after a sign-in or sign-out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn signed_in(role: Role) -> Self {
        Self {
            title: "Signed in successfully!".to_string(),
            description: format!("Welcome to the {} dashboard", role.display_name()),
        }
    }

    pub fn signed_out() -> Self {
        Self {
            title: "Signed out".to_string(),
            description: "You have been signed out successfully".to_string(),
        }
    }
}
