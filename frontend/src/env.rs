use std::collections::HashMap;
#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

/// Variable holding the backend base URL override.
pub const API_BASE_URL_KEY: &str = "API_BASE_URL";

/// Variable holding the build mode (`development`, `test`, `production`).
pub const MODE_KEY: &str = "RUST_ENV";

/// Source of configuration values, looked up by key.
pub trait EnvProvider {
    fn get(&self, key: &str) -> Option<String>;
}

impl<P: EnvProvider + ?Sized> EnvProvider for &P {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

impl<P: EnvProvider + ?Sized> EnvProvider for Box<P> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// Reads the process environment at call time.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

#[cfg(not(target_arch = "wasm32"))]
impl ProcessEnv {
    pub fn new() -> Self {
        ProcessEnv
    }

    /// Loads `.env` from the working directory (or a parent) before reading.
    /// Variables already set in the process win over the file.
    pub fn with_dotenv() -> Self {
        match dotenv::dotenv() {
            Ok(path) => log::debug!("Loaded environment from {}", path.display()),
            Err(e) => log::debug!("No .env file loaded: {}", e),
        }
        ProcessEnv
    }

    /// Like [`ProcessEnv::with_dotenv`], reading the given file instead of
    /// searching for `.env`.
    pub fn with_dotenv_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match dotenv::from_path(path) {
            Ok(()) => log::debug!("Loaded environment from {}", path.display()),
            Err(e) => log::debug!("No environment loaded from {}: {}", path.display(), e),
        }
        ProcessEnv
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl EnvProvider for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        match std::env::var(key) {
            Ok(value) => Some(value),
            Err(std::env::VarError::NotPresent) => None,
            Err(std::env::VarError::NotUnicode(raw)) => {
                let value = raw.to_string_lossy().into_owned();
                log::warn!("{} is not valid UTF-8, using {:?}", key, value);
                Some(value)
            }
        }
    }
}

/// Values baked in when the crate was compiled.
///
/// This is what a browser bundle sees: there is no process environment at
/// runtime, so `build.rs` forwards the variables into `option_env!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildEnv;

impl EnvProvider for BuildEnv {
    fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            API_BASE_URL_KEY => option_env!("API_BASE_URL"),
            MODE_KEY => option_env!("RUST_ENV"),
            _ => None,
        };
        value.map(str::to_string)
    }
}

/// Provider the process-wide configuration reads from.
#[cfg(not(target_arch = "wasm32"))]
pub type DefaultEnv = ProcessEnv;

#[cfg(target_arch = "wasm32")]
pub type DefaultEnv = BuildEnv;

/// In-memory variables, for tests and embedders that assemble config themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.vars.remove(key)
    }
}

impl EnvProvider for MapEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
