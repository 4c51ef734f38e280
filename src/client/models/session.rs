//! Login response models

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Typed view over a `/login` response body.
///
/// Built for display only; every field is optional so an unexpected body
/// never fails the view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Player on success
    #[serde(default)]
    pub data: Option<PlayerSession>,

    /// Status code echoed in the body
    #[serde(default)]
    pub status_code: Option<u16>,

    /// Server message
    #[serde(default)]
    pub message: Option<String>,
}

/// Player returned by a successful login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSession {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default)]
    pub gmail: Option<String>,

    #[serde(default)]
    pub roles: Vec<String>,

    #[serde(default)]
    pub player_name: Option<String>,
}

impl LoginResponse {
    /// Interpret a raw payload; anything unrecognised yields an empty view
    pub fn from_payload(payload: &Value) -> Self {
        serde_json::from_value(payload.clone()).unwrap_or_default()
    }
}
