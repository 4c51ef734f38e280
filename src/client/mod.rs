//! Team-selection API client

pub mod api;
pub mod login;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod transport;

pub use api::LoginApi;
pub use login::LoginClient;
#[cfg(test)]
pub use mock::MockLoginClient;
pub use transport::{ApiClient, TransportSettings};
