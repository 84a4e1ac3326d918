//! Browser fetch via `web_sys` and `js_sys`.
//!
//! Both data files are requested at once and awaited together with
//! `Promise.all`; the caller sees either both bodies or the first failure.
//! URLs ending in `.gz` are read as bytes and gunzipped in Rust.

use haq_core::compression::{gunzip_to_string, is_gzip_path};
use js_sys::{Array, Promise, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

fn js_error(context: &str, err: &JsValue) -> String {
    match err.as_string() {
        Some(msg) => format!("{}: {}", context, msg),
        None => format!("{}: {:?}", context, err),
    }
}

async fn await_all(promises: &Array) -> Result<Array, String> {
    let values = JsFuture::from(Promise::all(promises))
        .await
        .map_err(|e| js_error("request failed", &e))?;
    values
        .dyn_into::<Array>()
        .map_err(|e| js_error("unexpected Promise.all result", &e))
}

/// Fetch two URLs concurrently and return their bodies as text.
pub async fn fetch_text_pair(first: &str, second: &str) -> Result<(String, String), String> {
    let window = web_sys::window().ok_or_else(|| "no window object".to_string())?;
    let urls = [first, second];

    let requests = Array::of2(&window.fetch_with_str(first), &window.fetch_with_str(second));
    let responses = await_all(&requests).await?;

    let bodies = Array::new();
    for (url, response) in urls.iter().zip(responses.iter()) {
        let response: Response = response
            .dyn_into()
            .map_err(|e| js_error("not a Response", &e))?;
        if !response.ok() {
            return Err(format!("{}: HTTP {}", url, response.status()));
        }
        let body = if is_gzip_path(url) {
            response.array_buffer()
        } else {
            response.text()
        }
        .map_err(|e| js_error(url, &e))?;
        bodies.push(&body);
    }
    let bodies = await_all(&bodies).await?;

    let mut texts = Vec::with_capacity(urls.len());
    for (url, body) in urls.iter().zip(bodies.iter()) {
        let text = if is_gzip_path(url) {
            let bytes = Uint8Array::new(&body).to_vec();
            gunzip_to_string(&bytes).map_err(|e| format!("{}: {}", url, e))?
        } else {
            body.as_string()
                .ok_or_else(|| format!("{}: body is not text", url))?
        };
        log::info!("js_bridge: fetched {} ({} bytes)", url, text.len());
        texts.push(text);
    }

    let second_text = texts.pop().unwrap_or_default();
    let first_text = texts.pop().unwrap_or_default();
    Ok((first_text, second_text))
}

/// Bounding rectangle of a DOM element, for mapping pointer coordinates.
pub fn element_rect(id: &str) -> Option<web_sys::DomRect> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(id)?;
    Some(element.get_bounding_client_rect())
}
