//! Process-wide API configuration for callers that don't inject a resolver.

use once_cell::sync::Lazy;
use shared::ApiConfig;

use crate::config::ConfigResolver;
use crate::env::DefaultEnv;

/// Resolved on first access and read-only afterwards.
pub static API_CONFIG: Lazy<ApiConfig> = Lazy::new(|| default_resolver().api_config());

/// A resolver over the environment this build reads by default: compile-time
/// values in the browser, the process environment elsewhere.
pub fn default_resolver() -> ConfigResolver<DefaultEnv> {
    ConfigResolver::new(DefaultEnv::default())
}

pub fn api_base_url() -> String {
    default_resolver().resolve_base_url()
}

pub fn api_url(path: &str) -> String {
    default_resolver().build_url(path)
}

pub fn is_development() -> bool {
    default_resolver().is_development_mode()
}

pub fn log_api_config() {
    default_resolver().log_config();
}
