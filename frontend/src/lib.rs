//! Backend URL resolution for the Namhatta web client.
//!
//! [`ConfigResolver`] answers which server to talk to and turns endpoint
//! paths into full URLs. The [`api`] module wraps a resolver over the default
//! environment for code that doesn't carry one around, and [`bindings`]
//! exposes the same helpers to JavaScript.

pub mod api;
pub mod bindings;
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod dotenv_file;
pub mod env;
pub mod logging;

pub use api::{api_url, API_CONFIG};
pub use config::{ConfigResolver, ConfigSummary};
pub use env::{BuildEnv, DefaultEnv, EnvProvider, MapEnv, API_BASE_URL_KEY, MODE_KEY};
#[cfg(not(target_arch = "wasm32"))]
pub use env::ProcessEnv;
pub use shared::{endpoints, ApiConfig, BuildMode, ConfigError};
