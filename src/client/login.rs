//! Login client implementation

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;

use super::api::LoginApi;
use super::models::Credentials;
use super::transport::ApiClient;
use crate::error::Result;

/// Login endpoint, relative to the API base URL
pub const LOGIN_PATH: &str = "/login";

/// Posts credentials to the login endpoint.
///
/// # Authorization header
///
/// The header is `Bearer ` followed by the credentials' display form, i.e. the
/// raw caller input rather than a token obtained from an earlier step. Servers
/// and proxies that log `Authorization` will therefore see the credentials in
/// clear text. The behavior matches what the existing web client sends.
pub struct LoginClient {
    transport: Arc<ApiClient>,
}

impl LoginClient {
    /// Create a login client on top of a shared transport
    pub fn new(transport: Arc<ApiClient>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl LoginApi for LoginClient {
    async fn login(&self, credentials: &Credentials) -> Result<Value> {
        let body = serde_json::to_vec(credentials)?;

        let response = self
            .transport
            .post(LOGIN_PATH)
            .header(AUTHORIZATION, format!("Bearer {}", credentials))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?
            .error_for_status()?;

        let bytes = response.bytes().await?;
        Ok(decode_body(&bytes))
    }
}

/// JSON bodies are parsed; anything else comes back as a JSON string
fn decode_body(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}
