//! Product grid and detail-modal rendering.
//!
//! Cards carry the product id in a `data-product-id` attribute; the
//! delegated dispatcher routes clicks from there, so nothing here attaches
//! listeners.

use crate::app::App;
use crate::dom;
use gs_types::{usd, Product};

fn product_card_html(p: &Product) -> String {
    let image = p.images.first().map(String::as_str).unwrap_or_default();
    format!(
        r#"
        <div class="product-card" data-product-id="{id}">
            <img src="{image}" alt="{name}" class="product-card__image">
            <h3 class="product-card__name">{name}</h3>
            <p class="product-card__platforms">{platforms}</p>
            <p class="product-card__price">{price}</p>
        </div>
        "#,
        id = p.id,
        image = image,
        name = p.name,
        platforms = p.platforms.join(" · "),
        price = usd(p.price),
    )
}

/// Redraw the product grid from the current catalog.
pub fn render_products(app: &App) {
    let catalog = app.catalog.borrow();
    if catalog.is_empty() {
        dom::set_inner_html(
            &app.els.product_grid,
            r#"<p class="product-grid__empty">No products available right now.</p>"#,
        );
        return;
    }

    let html: String = catalog.iter().map(product_card_html).collect();
    dom::set_inner_html(&app.els.product_grid, &html);
}

/// Populate and open the product detail modal.
pub fn show_detail_modal(app: &App, product: &Product) {
    let els = &app.els;

    let images: String = product
        .images
        .iter()
        .map(|url| {
            format!(
                r#"<img src="{url}" alt="{name}" class="modal-product-image">"#,
                url = url,
                name = product.name,
            )
        })
        .collect();
    dom::set_inner_html(&els.modal_images, &images);

    dom::set_text(&els.modal_title, &product.name);
    dom::set_text(
        &els.modal_desc,
        product
            .description
            .as_deref()
            .unwrap_or("No description available."),
    );
    dom::set_text(&els.modal_price, &usd(product.price));

    let options: String = product
        .platforms
        .iter()
        .map(|p| format!(r#"<option value="{p}">{p}</option>"#))
        .collect();
    dom::set_inner_html(&els.modal_platform_select, &options);

    els.modal_quantity_input.set_value("1");
    // The add button routes back to this product through the dispatcher.
    let _ = els
        .modal_add_to_cart_btn
        .set_attribute("data-product-id", &product.id.to_string());

    dom::show(&els.product_modal);
}
