//! Shared HTTP transport for the team-selection API

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client as HttpClient, RequestBuilder};

use crate::config::{DEFAULT_API_HOST, DEFAULT_TIMEOUT_SECS};
use crate::error::{ConfigError, Result};

/// Settings needed to build an [`ApiClient`]
#[derive(Debug, Clone)]
pub struct TransportSettings {
    /// Base URL, e.g. `https://api.example.org`
    pub api_host: String,

    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            api_host: DEFAULT_API_HOST.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Preconfigured HTTP client: base URL, default headers and timeout.
///
/// Meant to be built once and shared behind an `Arc`; reqwest pools
/// connections internally.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: HttpClient,
    base_url: String,
}

impl ApiClient {
    /// Build a transport from settings
    pub fn new(settings: &TransportSettings) -> Result<Self> {
        let base_url = normalize_host(&settings.api_host)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("pitchside/", env!("CARGO_PKG_VERSION"))),
        );

        let http = HttpClient::builder()
            .timeout(settings.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path starting with `/`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Start a POST request to an API path
    pub fn post(&self, path: &str) -> RequestBuilder {
        self.http.post(self.url(path))
    }
}

/// Trim trailing slashes and reject anything that is not http(s)
fn normalize_host(host: &str) -> Result<String> {
    let trimmed = host.trim().trim_end_matches('/');

    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::Invalid(format!(
            "API host must start with http:// or https://, got '{}'",
            host
        ))
        .into());
    }

    Ok(trimmed.to_string())
}
