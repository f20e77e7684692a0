//! Client-side session gate for the Aura dashboard.
//!
//! Decides which role-scoped dashboard a stored session may reach. Sign-in
//! goes through [`auth::login::LoginFlow`], the session lives behind the
//! [`session_store::SessionStore`] trait, and every protected page asks
//! [`auth::guard`] before rendering.

pub mod auth;
pub mod config;
pub mod session_store;
pub mod storage;

pub use auth::credentials::CredentialVerifier;
pub use auth::guard::{authorize, check_page, Admission, Decision, DenyReason, GuardState, PageAccess};
pub use auth::login::{LoginFlow, LoginRequest};
pub use auth::logout::logout;
pub use session_store::{KeyedSessionStore, SessionStore};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
