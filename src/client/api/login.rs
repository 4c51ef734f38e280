//! Login API trait

use async_trait::async_trait;
use serde_json::Value;

use crate::client::models::Credentials;
use crate::error::Result;

/// Login operation against the team-selection API
#[async_trait]
pub trait LoginApi: Send + Sync {
    /// Post credentials to `/login` and return the response body as-is
    async fn login(&self, credentials: &Credentials) -> Result<Value>;
}
