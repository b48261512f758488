use thiserror::Error;
use serde_json::Error as JsonError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl {
        url: String,
        reason: String,
    },

    #[error("Unsupported URL scheme '{0}', expected http or https")]
    UnsupportedScheme(String),

    #[error("Base URL has no host: {0}")]
    MissingHost(String),

    #[error("Unknown build mode: {0}")]
    UnknownMode(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<JsonError> for ConfigError {
    fn from(error: JsonError) -> Self {
        Self::Serialization(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
