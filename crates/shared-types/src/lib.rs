pub mod config;
pub mod dashboard;
pub mod error;
pub mod notice;
pub mod role;
pub mod session;

pub use config::*;
pub use error::*;
pub use notice::*;
pub use role::*;
pub use session::*;
