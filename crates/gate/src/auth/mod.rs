pub mod credentials;
pub mod guard;
pub mod login;
pub mod logout;
