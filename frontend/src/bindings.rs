use wasm_bindgen::prelude::*;

use crate::api::{self, API_CONFIG};

#[wasm_bindgen]
pub fn get_api_base_url() -> String {
    api::api_base_url()
}

#[wasm_bindgen]
pub fn build_api_url(endpoint: &str) -> String {
    api::api_url(endpoint)
}

#[wasm_bindgen]
pub fn is_development() -> bool {
    api::is_development()
}

#[wasm_bindgen]
pub fn log_api_config() {
    api::log_api_config();
}

/// Returns the process-wide API configuration as a JSON string
#[wasm_bindgen]
pub fn get_api_config() -> Result<String, JsValue> {
    API_CONFIG
        .to_json()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Starts logging when the module is loaded
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    crate::logging::init().map_err(|e| JsValue::from_str(&e.to_string()))?;
    api::log_api_config();
    Ok(())
}
