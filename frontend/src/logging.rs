use log::{info, Level};

use crate::api::default_resolver;

/// Level to log at: everything in development builds, info and up otherwise.
pub fn default_level(is_development: bool) -> Level {
    if is_development {
        Level::Debug
    } else {
        Level::Info
    }
}

/// Installs the console logger and the panic hook. Call once at startup.
#[cfg(target_arch = "wasm32")]
pub fn init() -> anyhow::Result<()> {
    let level = default_level(default_resolver().is_development_mode());
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(level));
    info!("Logger initialized at {}", level);
    Ok(())
}

/// Installs the logger for this target. `RUST_LOG` overrides the level.
///
/// Fails if another logger is already installed.
#[cfg(not(target_arch = "wasm32"))]
pub fn init() -> anyhow::Result<()> {
    let level = default_level(default_resolver().is_development_mode());
    env_logger::Builder::new()
        .filter_level(level.to_level_filter())
        .parse_default_env()
        .try_init()?;
    info!("Logger initialized at {}", level);
    Ok(())
}
