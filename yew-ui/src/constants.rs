// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use tutorial_types::auth::{AuthPolicy, DEFAULT_REGISTER_PATH};
use tutorial_types::truthy;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Milliseconds between a navigation and the scroll that follows it, so the
/// newly selected section has rendered before it is scrolled into view.
pub const SCROLL_SETTLE_MS: u32 = 200;

/// `window.__APP_CONFIG`, injected by the hosting page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuntimeConfig {
    #[serde(rename = "authEnabled")]
    #[serde(default)]
    pub auth_enabled: String,
    #[serde(rename = "allowRegisteredVisitors")]
    #[serde(default)]
    pub allow_registered_visitors: Option<String>,
    #[serde(rename = "registerPath")]
    #[serde(default)]
    pub register_path: Option<String>,
}

impl RuntimeConfig {
    pub fn auth_policy(&self) -> AuthPolicy {
        AuthPolicy {
            enabled: truthy(Some(self.auth_enabled.as_str())),
            allow_registered_visitors: self
                .allow_registered_visitors
                .as_deref()
                .map(|v| truthy(Some(v)))
                .unwrap_or(true),
            register_path: self
                .register_path
                .clone()
                .filter(|p| !p.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_REGISTER_PATH.to_string()),
        }
    }
}

/// `Ok(None)` when the page provides no config at all.
pub fn app_config() -> Result<Option<RuntimeConfig>, String> {
    let win = window().ok_or_else(|| "No window available".to_string())?;
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Ok(None);
    }
    from_js_value::<RuntimeConfig>(config)
        .map(Some)
        .map_err(|e| format!("Failed to parse __APP_CONFIG: {e:?}"))
}

pub fn auth_policy() -> Result<AuthPolicy, String> {
    app_config().map(|c| c.map(|c| c.auth_policy()).unwrap_or_default())
}
