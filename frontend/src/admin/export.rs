use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, HtmlElement};

/// Hands `bytes` to the browser as a JSON file download.
pub fn download_json(bytes: &[u8], file_name: &str) -> Result<(), JsValue> {
    let text = String::from_utf8_lossy(bytes);
    let href = format!("data:text/json;charset=utf-8,{}", urlencoding::encode(&text));

    let document = window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;

    let anchor = document.create_element("a")?;
    anchor.set_attribute("href", &href)?;
    anchor.set_attribute("download", file_name)?;
    body.append_child(&anchor)?;
    if let Some(anchor) = anchor.dyn_ref::<HtmlElement>() {
        anchor.click();
    }
    anchor.remove();
    Ok(())
}
