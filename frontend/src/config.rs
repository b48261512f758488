use log::{info, warn};
use serde::Serialize;
use shared::{join_url, ApiConfig, BuildMode, DEFAULT_BASE_URL};

use crate::env::{EnvProvider, API_BASE_URL_KEY, MODE_KEY};

/// What `log_config` reports in development builds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSummary {
    pub base_url: String,
    pub mode: Option<String>,
    pub is_dev: bool,
}

/// Works out which backend the client talks to.
///
/// Every lookup goes back to the provider, so a resolver over a live
/// environment reflects changes made after it was built.
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver<P> {
    provider: P,
}

impl<P: EnvProvider> ConfigResolver<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The configured override when it is non-empty, otherwise
    /// [`DEFAULT_BASE_URL`].
    pub fn resolve_base_url(&self) -> String {
        match self.provider.get(API_BASE_URL_KEY) {
            Some(url) if !url.is_empty() => url,
            _ => DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn build_url(&self, endpoint: &str) -> String {
        join_url(&self.resolve_base_url(), endpoint)
    }

    /// The raw mode flag, exactly as configured.
    pub fn mode_flag(&self) -> Option<String> {
        self.provider.get(MODE_KEY)
    }

    pub fn build_mode(&self) -> Option<BuildMode> {
        self.mode_flag()?.parse().ok()
    }

    pub fn is_development_mode(&self) -> bool {
        self.build_mode().map_or(false, |mode| mode.is_development())
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(self.resolve_base_url())
    }

    pub fn config_summary(&self) -> Option<ConfigSummary> {
        if !self.is_development_mode() {
            return None;
        }
        Some(ConfigSummary {
            base_url: self.resolve_base_url(),
            mode: self.mode_flag(),
            is_dev: true,
        })
    }

    /// Logs the resolved configuration. Silent outside development mode.
    pub fn log_config(&self) {
        let Some(summary) = self.config_summary() else {
            return;
        };

        match serde_json::to_string(&summary) {
            Ok(json) => info!("🚀 API Configuration: {}", json),
            Err(e) => {
                warn!("Failed to serialize API configuration: {}", e);
                info!("🚀 API Configuration: {:?}", summary);
            }
        }
    }
}
