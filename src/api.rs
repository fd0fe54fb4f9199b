//! Quran API Client
//!
//! Thin fetch wrappers around the remote chapter endpoints. The response
//! schema is treated as untrusted and handed to `normalize` as raw JSON.

use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Remote API serving the chapter index and chapter details
pub const API_URL: &str = "https://quran-api-id.vercel.app";

async fn fetch_json(url: &str) -> Result<Value, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| format!("{:?}", e))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| "fetch did not return a Response".to_string())?;
    let promise = resp.json().map_err(|e| format!("{:?}", e))?;
    let json = JsFuture::from(promise)
        .await
        .map_err(|e| format!("{:?}", e))?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

/// GET `/surah` - the chapter index
pub async fn fetch_chapter_index() -> Result<Value, String> {
    fetch_json(&format!("{}/surah", API_URL)).await
}

/// GET `/surah/{number}` - one chapter with its verses
pub async fn fetch_chapter(number: u32) -> Result<Value, String> {
    fetch_json(&format!("{}/surah/{}", API_URL, number)).await
}
