//! Catalog loader.
//!
//! Fetches the static product list once at startup. Any transport or parse
//! failure is reported to the console and degrades to an empty catalog, so
//! the grid always has something (possibly nothing) to render.

use gs_types::Product;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

pub const CATALOG_URL: &str = "./data/products.json";

/// Fetch the catalog, yielding an empty list on any failure.
pub async fn load_catalog() -> Vec<Product> {
    match fetch_catalog(CATALOG_URL).await {
        Ok(products) => products,
        Err(e) => {
            gloo_console::error!("failed to load product catalog:", e);
            Vec::new()
        }
    }
}

async fn fetch_catalog(url: &str) -> Result<Vec<Product>, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{:?}", e))?;

    let window = crate::dom::window();
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("fetch error: {:?}", e))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| "response is not a Response".to_string())?;

    if !resp.ok() {
        return Err(format!("{} {}", resp.status(), resp.status_text()));
    }

    let text = JsFuture::from(resp.text().map_err(|e| format!("{:?}", e))?)
        .await
        .map_err(|e| format!("text error: {:?}", e))?;

    let text_str = text.as_string().unwrap_or_default();
    serde_json::from_str(&text_str).map_err(|e| format!("JSON parse error: {}", e))
}
