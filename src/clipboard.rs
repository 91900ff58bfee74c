use anyhow::anyhow;
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// `navigator.clipboard.writeText(text)`, awaited. Looked up dynamically so
/// that pages served without a secure context fail here rather than at load.
pub async fn write_text(text: &str) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let navigator = window.navigator();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|e| anyhow!("{:?}", e))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(anyhow!("clipboard API unavailable"));
    }
    let write = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(|e| anyhow!("{:?}", e))?
        .dyn_into::<js_sys::Function>()
        .map_err(|e| anyhow!("writeText is not callable: {:?}", e))?;
    let promise = write
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| anyhow!("{:?}", e))?
        .dyn_into::<js_sys::Promise>()
        .map_err(|e| anyhow!("writeText returned {:?}", e))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
