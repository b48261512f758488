use std::collections::BTreeMap;
use std::time::Duration;

use log::debug;
use serde::Serialize;

use crate::error::{ConfigError, Result};

/// Backend used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Request timeout handed to HTTP transports, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const ACCEPT_HEADER: &str = "Accept";
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// The headers every API request starts from.
pub fn default_headers() -> BTreeMap<String, String> {
    let mut headers = BTreeMap::new();
    headers.insert(CONTENT_TYPE_HEADER.to_string(), JSON_MEDIA_TYPE.to_string());
    headers.insert(ACCEPT_HEADER.to_string(), JSON_MEDIA_TYPE.to_string());
    headers
}

/// Joins a base URL and an endpoint path with exactly one `/` at the seam.
///
/// Only a single trailing slash is removed from `base`, so `"http://host//"`
/// keeps one of its two. An endpoint without a leading slash gets one, and an
/// empty endpoint yields the base followed by `/`.
pub fn join_url(base: &str, endpoint: &str) -> String {
    let base = base.strip_suffix('/').unwrap_or(base);
    if endpoint.starts_with('/') {
        format!("{}{}", base, endpoint)
    } else {
        format!("{}/{}", base, endpoint)
    }
}

/// Settings an HTTP layer needs to reach the backend.
///
/// The base URL is stored as resolved; trailing-slash normalization happens in
/// [`ApiConfig::build_url`], not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    base_url: String,
    timeout_ms: u64,
    default_headers: BTreeMap<String, String>,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            default_headers: default_headers(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn default_headers(&self) -> &BTreeMap<String, String> {
        &self.default_headers
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.default_headers.get(name).map(String::as_str)
    }

    pub fn build_url(&self, endpoint: &str) -> String {
        join_url(&self.base_url, endpoint)
    }

    /// Checks that the base URL is an absolute http(s) URL with a host.
    ///
    /// Resolution never calls this; a bad override is only reported to callers
    /// that ask.
    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => return Err(ConfigError::UnsupportedScheme(other.to_string())),
        }

        if parsed.host_str().map_or(true, str::is_empty) {
            return Err(ConfigError::MissingHost(self.base_url.clone()));
        }

        debug!("API base URL validated: {}", self.base_url);
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
