//! WASM platform implementations
//!
//! Browser builds: storage is localStorage, the Google transport pushes
//! onto `window.dataLayer` (creating it if needed, as the gtag shim
//! does), and the Clarity transport calls `window.clarity(...)` when it
//! is loaded. Storage failures (disabled storage, quota exceeded) are
//! logged and absorbed; they must never take the page down.

use consentr_domain::ConsentError;
use wasm_bindgen::{JsCast, JsValue};

use crate::ports::outbound::{SignalTransport, StorageProvider};

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// localStorage-backed storage provider.
#[derive(Clone, Default)]
pub struct LocalStorageProvider;

impl StorageProvider for LocalStorageProvider {
    fn save(&self, key: &str, value: &str) {
        match local_storage() {
            Some(storage) => {
                // set_item fails on quota exceeded or disabled storage
                if let Err(e) = storage.set_item(key, value) {
                    tracing::error!(key, "localStorage write failed: {:?}", e);
                }
            }
            None => {
                tracing::warn!(key, "localStorage unavailable, consent write dropped");
            }
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            if let Err(e) = storage.remove_item(key) {
                tracing::error!(key, "localStorage remove failed: {:?}", e);
            }
        }
    }
}

/// Transport that pushes events onto `window.dataLayer`.
#[derive(Clone, Default)]
pub struct DataLayerTransport;

impl DataLayerTransport {
    fn data_layer(window: &web_sys::Window) -> Result<js_sys::Array, ConsentError> {
        let key = JsValue::from_str("dataLayer");
        let existing = js_sys::Reflect::get(window, &key).unwrap_or(JsValue::UNDEFINED);

        if existing.is_undefined() || existing.is_null() {
            // window.dataLayer = window.dataLayer || []
            let fresh = js_sys::Array::new();
            js_sys::Reflect::set(window, &key, &fresh).map_err(|_| {
                ConsentError::sink_unavailable("data-layer", "window.dataLayer is not writable")
            })?;
            return Ok(fresh);
        }

        existing.dyn_into::<js_sys::Array>().map_err(|_| {
            ConsentError::sink_unavailable("data-layer", "window.dataLayer is not an array")
        })
    }
}

impl SignalTransport for DataLayerTransport {
    fn push(&self, event: serde_json::Value) -> Result<(), ConsentError> {
        let window = web_sys::window()
            .ok_or_else(|| ConsentError::sink_unavailable("data-layer", "no window object"))?;
        let layer = Self::data_layer(&window)?;

        let value = serde_wasm_bindgen::to_value(&event)
            .map_err(|e| ConsentError::sink_unavailable("data-layer", e.to_string()))?;
        layer.push(&value);
        Ok(())
    }
}

/// Transport that calls `window.clarity(...)` with the event as the
/// argument list. Reports `SinkUnavailable` when clarity is not loaded.
#[derive(Clone, Default)]
pub struct ClarityTransport;

impl SignalTransport for ClarityTransport {
    fn push(&self, event: serde_json::Value) -> Result<(), ConsentError> {
        let window = web_sys::window()
            .ok_or_else(|| ConsentError::sink_unavailable("clarity", "no window object"))?;

        let clarity = js_sys::Reflect::get(&window, &JsValue::from_str("clarity"))
            .unwrap_or(JsValue::UNDEFINED);
        let clarity: js_sys::Function = clarity.dyn_into().map_err(|_| {
            ConsentError::sink_unavailable("clarity", "clarity() not found at time of call")
        })?;

        let args = serde_wasm_bindgen::to_value(&event)
            .map_err(|e| ConsentError::sink_unavailable("clarity", e.to_string()))?;
        let args: js_sys::Array = args.dyn_into().map_err(|_| {
            ConsentError::sink_unavailable("clarity", "event is not an argument list")
        })?;

        clarity
            .apply(&window, &args)
            .map_err(|e| ConsentError::sink_unavailable("clarity", format!("{e:?}")))?;
        Ok(())
    }
}

/// Initialize tracing for browser builds (console-backed).
pub fn init_tracing() {
    console_error_panic_hook::set_once();
    let _ = tracing_wasm::try_set_as_global_default();
}
