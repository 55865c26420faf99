//! GameStall storefront frontend.
//!
//! Pure Rust + WASM client: product catalog, shopping cart, and mock
//! checkout, with all durable state in `localStorage`. Each concern lives
//! in its own module.

pub mod app;
pub mod cart_view;
pub mod catalog;
pub mod checkout;
pub mod dom;
pub mod events;
pub mod product_view;
pub mod storage;

use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init().await
}

/// Main initialisation sequence: bind the DOM, open the stores, fetch the
/// catalog once, render, and wire the event dispatcher.
async fn init() -> Result<(), JsValue> {
    let els = dom::Elements::bind()?;
    let app = app::App::new(els);

    let products = catalog::load_catalog().await;
    gloo_console::debug!("catalog loaded:", products.len());
    app.set_catalog(products);

    product_view::render_products(&app);
    cart_view::render_cart(&app);

    events::bind_events(&app);

    Ok(())
}
