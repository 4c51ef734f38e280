//! Credential payloads

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Opaque credential payload sent to `/login`.
///
/// Serializes exactly as the wrapped JSON value. The [`Display`](fmt::Display)
/// form is what ends up in the `Authorization` header: JSON strings render as
/// their raw text, every other value as its compact JSON encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credentials(Value);

impl Credentials {
    /// Parse credentials from JSON text. Any JSON value is accepted.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(Self(serde_json::from_str(text)?))
    }

    /// The wrapped JSON value
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for Credentials {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<LoginForm> for Credentials {
    fn from(form: LoginForm) -> Self {
        Self(serde_json::json!({
            "gmail": form.gmail,
            "password": form.password,
        }))
    }
}

impl fmt::Display for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

/// Email and password, the shape the backend reads from the login body
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginForm {
    pub gmail: String,
    pub password: String,
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("gmail", &self.gmail)
            .field("password", &"***")
            .finish()
    }
}
