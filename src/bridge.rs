//! Cloud Bridge
//!
//! Bindings to the vendor SDK exposed by the host page as
//! `window.__KAARYA_CLOUD__`. The bridge owns authentication and the hosted
//! document collections; this module only shuttles JSON-shaped values across
//! and converts rejections into messages.
//!
//! Bridge surface:
//! - `invoke(cmd, args) -> Promise` for one-shot calls
//! - `subscribe(topic, args, callback) -> unsubscribe` for push channels
//! - `storeEnabled: bool` when the hosted document store should be used

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__KAARYA_CLOUD__"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "__KAARYA_CLOUD__"])]
    fn subscribe(topic: &str, args: JsValue, callback: &js_sys::Function) -> js_sys::Function;
}

const BRIDGE_KEY: &str = "__KAARYA_CLOUD__";

fn bridge_object() -> Option<JsValue> {
    let window = web_sys::window()?;
    let bridge = js_sys::Reflect::get(&window, &JsValue::from_str(BRIDGE_KEY)).ok()?;
    (!bridge.is_undefined() && !bridge.is_null()).then_some(bridge)
}

/// Whether the host page loaded the vendor bridge at all
pub fn available() -> bool {
    bridge_object().is_some()
}

/// Whether records should go to the hosted document store rather than
/// local storage. Decided once by the host page, read at composition time.
pub fn store_enabled() -> bool {
    bridge_object()
        .and_then(|bridge| js_sys::Reflect::get(&bridge, &JsValue::from_str("storeEnabled")).ok())
        .map(|flag| flag.is_truthy())
        .unwrap_or(false)
}

/// Best-effort human-readable message from a JS rejection value
pub fn error_message(value: &JsValue) -> String {
    if let Some(message) = value.as_string() {
        return message;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{:?}", value)
}

/// Call a bridge command and deserialize its resolution
pub async fn invoke_json<A, T>(cmd: &str, args: &A) -> Result<T, String>
where
    A: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let value = invoke(cmd, args).await.map_err(|e| error_message(&e))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
}

/// Call a bridge command, discarding its resolution value
pub async fn invoke_unit<A>(cmd: &str, args: &A) -> Result<(), String>
where
    A: Serialize + ?Sized,
{
    let args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    invoke(cmd, args)
        .await
        .map(|_| ())
        .map_err(|e| error_message(&e))
}

/// Live push channel. Holds the JS callback alive; `cancel` (or drop at view
/// teardown) invokes the unsubscribe handle so no dangling callback remains.
pub struct Subscription {
    unsubscribe: js_sys::Function,
    _callback: Closure<dyn FnMut(JsValue)>,
}

impl Subscription {
    /// Explicit teardown; dropping the handle does the same
    pub fn cancel(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let _ = self.unsubscribe.call0(&JsValue::NULL);
    }
}

/// Open a push channel on `topic`; every delivery is deserialized and handed
/// to `on_change` wholesale
pub fn subscribe_json<A, T, F>(topic: &str, args: &A, mut on_change: F) -> Result<Subscription, String>
where
    A: Serialize + ?Sized,
    T: DeserializeOwned + 'static,
    F: FnMut(T) + 'static,
{
    if !available() {
        return Err("cloud bridge is not loaded".to_string());
    }
    let args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let topic_name = topic.to_string();
    let callback = Closure::wrap(Box::new(move |value: JsValue| {
        match serde_wasm_bindgen::from_value::<T>(value) {
            Ok(snapshot) => on_change(snapshot),
            Err(err) => web_sys::console::error_1(
                &format!("[BRIDGE] bad {} snapshot: {}", topic_name, err).into(),
            ),
        }
    }) as Box<dyn FnMut(JsValue)>);
    let unsubscribe = subscribe(topic, args, callback.as_ref().unchecked_ref());
    Ok(Subscription {
        unsubscribe,
        _callback: callback,
    })
}
