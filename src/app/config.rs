use super::error::js_error_message;
use js_sys::Reflect;
use leptos::prelude::window;
use models::{ConfigError, ConfigSource};
use serde::de::DeserializeOwned;
use shared_constants::CONFIG_GLOBAL;
use wasm_bindgen::JsValue;

/// Module configuration registered on `window.wcconfig`, keyed by module id.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlobalConfig;

impl ConfigSource for GlobalConfig {
    fn module_config<T>(&self, module_id: &str) -> Result<Option<T>, ConfigError>
    where
        T: DeserializeOwned,
    {
        let lookup_error = |err: JsValue| ConfigError::Lookup {
            module: module_id.into(),
            reason: js_error_message(&err),
        };

        let registry = Reflect::get(&window(), &JsValue::from_str(CONFIG_GLOBAL))
            .map_err(lookup_error)?;
        if registry.is_undefined() || registry.is_null() {
            return Ok(None);
        }
        let entry = Reflect::get(&registry, &JsValue::from_str(module_id)).map_err(lookup_error)?;
        if entry.is_undefined() || entry.is_null() {
            return Ok(None);
        }
        serde_wasm_bindgen::from_value(entry)
            .map(Some)
            .map_err(|err| ConfigError::Invalid {
                module: module_id.into(),
                reason: err.to_string(),
            })
    }
}
