pub mod api_config;
pub mod endpoints;
pub mod error;
pub mod mode;

// Re-export commonly used items
pub use api_config::{
    default_headers, join_url, ApiConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS,
};
pub use error::{ConfigError, Result};
pub use mode::BuildMode;
