//! Data models for the team-selection API

mod credentials;
mod session;

pub use credentials::{Credentials, LoginForm};
pub use session::{LoginResponse, PlayerSession};
