//! API trait definitions
//!
//! - [`LoginApi`] - Credential login

mod login;

pub use login::LoginApi;
