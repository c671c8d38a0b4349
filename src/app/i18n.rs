use js_sys::Reflect;
use leptos::prelude::window;
use shared_constants::{I18N_GLOBAL, LABEL_KEY};
use wasm_bindgen::JsValue;

const BUILTIN: &[(&str, &str)] = &[(LABEL_KEY, "Back to top")];

fn lookup_global(key: &str) -> Option<String> {
    let table = Reflect::get(&window(), &JsValue::from_str(I18N_GLOBAL)).ok()?;
    if table.is_undefined() || table.is_null() {
        return None;
    }
    Reflect::get(&table, &JsValue::from_str(key))
        .ok()
        .and_then(|value| value.as_string())
}

fn lookup_builtin(key: &str) -> Option<String> {
    BUILTIN
        .iter()
        .find_map(|(k, text)| (*k == key).then(|| (*text).to_string()))
}

/// Localised text for `key`; the key itself when no translation exists.
pub fn get(key: &str) -> String {
    lookup_global(key)
        .or_else(|| lookup_builtin(key))
        .unwrap_or_else(|| {
            log::warn!("Missing translation for {key}");
            key.to_string()
        })
}
