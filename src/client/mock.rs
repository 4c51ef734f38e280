//! Mock login client for testing
//!
//! Provides a mock implementation of [`LoginApi`] for unit testing code that
//! sits above the HTTP layer.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::LoginApi;
use super::models::Credentials;
use crate::error::{Error, Result};

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockLoginClient::new().with_response(json!({"token": "abc"}));
///
/// let body = mock.login(&Credentials::from(json!("x"))).await?;
/// assert_eq!(mock.captured().await.len(), 1);
/// ```
#[derive(Default)]
pub struct MockLoginClient {
    /// Body to return from login
    response: Arc<Mutex<Value>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<Error>>>,
    /// Credentials seen by login, in call order
    captured: Arc<Mutex<Vec<Credentials>>>,
}

impl MockLoginClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the body returned by login
    pub fn with_response(self, response: Value) -> Self {
        *self.response.try_lock().expect("fresh mock") = response;
        self
    }

    /// Make the next login fail with this error
    pub fn with_error(self, error: Error) -> Self {
        *self.error.try_lock().expect("fresh mock") = Some(error);
        self
    }

    /// Credentials passed to login so far
    pub async fn captured(&self) -> Vec<Credentials> {
        self.captured.lock().await.clone()
    }
}

#[async_trait]
impl LoginApi for MockLoginClient {
    async fn login(&self, credentials: &Credentials) -> Result<Value> {
        self.captured.lock().await.push(credentials.clone());

        if let Some(err) = self.error.lock().await.take() {
            return Err(err);
        }

        Ok(self.response.lock().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_returns_response_and_captures() {
        let mock = MockLoginClient::new().with_response(json!({"token": "abc"}));

        let body = mock.login(&Credentials::from(json!("first"))).await.unwrap();
        assert_eq!(body, json!({"token": "abc"}));

        let captured = mock.captured().await;
        assert_eq!(captured, vec![Credentials::from(json!("first"))]);
    }

    #[tokio::test]
    async fn test_mock_error_consumed_once() {
        let mock = MockLoginClient::new().with_error(Error::Other("down".to_string()));

        assert!(mock.login(&Credentials::from(json!(1))).await.is_err());
        assert!(mock.login(&Credentials::from(json!(2))).await.is_ok());
        assert_eq!(mock.captured().await.len(), 2);
    }
}
