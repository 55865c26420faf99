//! Cart panel and header auth region rendering.
//!
//! Pulled wholesale from store state after every mutation: line items,
//! total, count badge, session status, and checkout gating all redraw
//! together so the page can never show a stale mix.

use crate::app::App;
use crate::dom;
use gs_types::{usd, CartItem};
use web_sys::Element;

fn cart_item_html(item: &CartItem) -> String {
    let image = item.product.images.first().map(String::as_str).unwrap_or_default();
    format!(
        r#"
        <div class="cart-item">
            <img src="{image}" alt="{name}" class="cart-item__image">
            <div class="cart-item__info">
                <p class="cart-item__name">{name}</p>
                <p class="cart-item__platform">{platform}</p>
            </div>
            <div class="cart-item__controls">
                <button class="decrement-btn" data-product-id="{id}" data-platform="{platform}">-</button>
                <span class="cart-item__quantity">{quantity}</span>
                <button class="increment-btn" data-product-id="{id}" data-platform="{platform}">+</button>
                <button class="remove-btn" data-product-id="{id}" data-platform="{platform}">Remove</button>
            </div>
        </div>
        "#,
        id = item.product.id,
        image = image,
        name = item.product.name,
        platform = item.platform,
        quantity = item.quantity,
    )
}

fn set_region(el: &Option<Element>, html: &str) {
    if let Some(el) = el {
        dom::set_inner_html(el, html);
    }
}

/// Redraw the cart panel, badge, and auth regions from current store state.
pub fn render_cart(app: &App) {
    let els = &app.els;
    let cart = app.cart.borrow();
    let auth = app.auth.borrow();

    let items = cart.items();
    if items.is_empty() {
        dom::set_inner_html(
            &els.cart_items,
            r#"<p class="cart-empty">Your cart is empty.</p>"#,
        );
    } else {
        let html: String = items.iter().map(cart_item_html).collect();
        dom::set_inner_html(&els.cart_items, &html);
    }

    dom::set_text(&els.cart_total, &usd(cart.total()));

    let count = cart.item_count();
    dom::set_text(&els.cart_count_badge, &count.to_string());
    dom::toggle_class(&els.cart_count_badge, "hidden", count == 0);

    if auth.is_logged_in() {
        let name = auth
            .current_user()
            .map(|u| u.name.clone())
            .unwrap_or_default();
        let status = format!(r#"<span class="auth-welcome">Welcome, {name}</span>"#);
        let actions = r#"<button id="logout-btn" class="link-btn">Log out</button>"#;

        dom::set_inner_html(&els.auth_status, &status);
        dom::set_inner_html(&els.user_actions, actions);
        set_region(&els.mobile_auth_status, &status);
        set_region(&els.mobile_user_actions, actions);

        els.checkout_btn.set_disabled(items.is_empty());
        els.checkout_btn.set_text_content(Some("Proceed to checkout"));
        dom::toggle_class(&els.checkout_btn, "checkout-btn--blocked", items.is_empty());
    } else {
        let status = r#"<span class="auth-anonymous">Not signed in</span>"#;
        let actions = concat!(
            r#"<button id="login-modal-btn" class="link-btn">Log in</button>"#,
            r#"<button id="register-modal-btn" class="link-btn">Register</button>"#,
        );

        dom::set_inner_html(&els.auth_status, status);
        dom::set_inner_html(&els.user_actions, actions);
        set_region(&els.mobile_auth_status, status);
        set_region(&els.mobile_user_actions, actions);

        els.checkout_btn.set_disabled(true);
        els.checkout_btn
            .set_text_content(Some("Log in to check out"));
        dom::add_class(&els.checkout_btn, "checkout-btn--blocked");
    }
}

pub fn open_cart_panel(app: &App) {
    dom::add_class(&app.els.cart_aside, "open");
    dom::show(&app.els.cart_overlay);
}

pub fn close_cart_panel(app: &App) {
    dom::remove_class(&app.els.cart_aside, "open");
    dom::hide(&app.els.cart_overlay);
}

pub fn toggle_cart_panel(app: &App) {
    if dom::has_class(&app.els.cart_aside, "open") {
        close_cart_panel(app);
    } else {
        open_cart_panel(app);
    }
}
