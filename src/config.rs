//! Gateway Selection
//!
//! Picks the remote store from `window.TASKFLOW_CONFIG` or from build-time
//! environment variables, falling back to an in-memory demo store.

use std::rc::Rc;

use log::{info, warn};
use taskflow_core::{Gateway, GatewayConfig, MemoryGateway, RestGateway};
use wasm_bindgen::JsValue;

/// Global set by the hosting page before the app starts
const WINDOW_CONFIG_KEY: &str = "TASKFLOW_CONFIG";

/// Gateway to use plus whether it is the demo store
pub fn connect() -> (Rc<dyn Gateway>, bool) {
    let config = window_config().or_else(GatewayConfig::from_build_env);
    match config.map(|c| c.validate().map(|_| c)) {
        Some(Ok(config)) => {
            info!("Using remote store at {}", config.table_url());
            (Rc::new(RestGateway::new(config)), false)
        }
        Some(Err(err)) => {
            warn!("Ignoring gateway config: {}; running in demo mode", err);
            (Rc::new(MemoryGateway::new()), true)
        }
        None => {
            warn!("No remote store configured; running in demo mode");
            (Rc::new(MemoryGateway::new()), true)
        }
    }
}

fn window_config() -> Option<GatewayConfig> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(WINDOW_CONFIG_KEY)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    match serde_wasm_bindgen::from_value(value) {
        Ok(config) => Some(config),
        Err(e) => {
            warn!("window.{} is malformed: {}", WINDOW_CONFIG_KEY, e);
            None
        }
    }
}
