//! Event dispatch.
//!
//! One delegated click listener on the document routes every UI action by
//! id/class to a store mutation plus re-render, so dynamically rendered
//! controls (cards, cart line buttons) never need rewiring. The two auth
//! forms keep their own `submit` listeners.

use crate::app::App;
use crate::cart_view;
use crate::checkout;
use crate::dom;
use crate::product_view;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

/// Bind the dispatcher and the form listeners. Call once after init.
pub fn bind_events(app: &Rc<App>) {
    // ── Delegated click dispatcher ──
    {
        let app2 = app.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
            on_document_click(&app2, &e);
        }) as Box<dyn FnMut(_)>);
        dom::document()
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }

    // ── Login form ──
    {
        let app2 = app.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::Event| {
            e.prevent_default();
            on_login_submit(&app2);
        }) as Box<dyn FnMut(_)>);
        app.els
            .login_form
            .add_event_listener_with_callback("submit", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }

    // ── Register form ──
    {
        let app2 = app.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::Event| {
            e.prevent_default();
            on_register_submit(&app2);
        }) as Box<dyn FnMut(_)>);
        app.els
            .register_form
            .add_event_listener_with_callback("submit", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }
}

fn matches(el: &Element, selector: &str) -> bool {
    el.matches(selector).unwrap_or(false)
}

fn closest(el: &Element, selector: &str) -> Option<Element> {
    el.closest(selector).ok().flatten()
}

fn data_u64(el: &Element, attr: &str) -> Option<u64> {
    el.get_attribute(attr)?.parse().ok()
}

fn on_document_click(app: &Rc<App>, e: &web_sys::MouseEvent) {
    let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return;
    };
    let els = &app.els;

    // ── Cart panel ──
    if closest(&target, "#cart-toggle-btn").is_some() {
        cart_view::toggle_cart_panel(app);
        return;
    }
    if matches(&target, "#close-cart-btn") || matches(&target, "#cart-overlay") {
        cart_view::close_cart_panel(app);
        return;
    }

    // ── Product detail ──
    if let Some(card) = closest(&target, ".product-card") {
        if let Some(product) =
            data_u64(&card, "data-product-id").and_then(|id| app.product_by_id(id))
        {
            product_view::show_detail_modal(app, &product);
        }
        return;
    }
    if matches(&target, "#modal-add-to-cart-btn") {
        on_add_to_cart(app, &target);
        return;
    }

    // ── Cart line controls ──
    if matches(&target, ".increment-btn") {
        adjust_line(app, &target, 1);
        return;
    }
    if matches(&target, ".decrement-btn") {
        adjust_line(app, &target, -1);
        return;
    }
    if matches(&target, ".remove-btn") {
        remove_line(app, &target);
        return;
    }

    // ── Checkout flow ──
    if let Some(method) = closest(&target, ".payment-method") {
        checkout::select_payment_method(&method);
        return;
    }
    if matches(&target, "#checkout-btn") && !els.checkout_btn.disabled() {
        checkout::open_payment_modal(app);
        return;
    }
    if matches(&target, "#pay-now-btn") {
        let app2 = app.clone();
        wasm_bindgen_futures::spawn_local(async move {
            checkout::complete_payment(app2).await;
        });
        return;
    }

    // ── Auth ──
    if matches(&target, "#login-modal-btn") {
        dom::show(&els.login_modal);
        return;
    }
    if matches(&target, "#register-modal-btn") {
        dom::show(&els.register_modal);
        return;
    }
    if matches(&target, ".close-modal-btn") {
        if let Some(modal) = closest(&target, ".modal") {
            dom::hide(&modal);
        }
        return;
    }
    if matches(&target, "#logout-btn") {
        app.auth.borrow_mut().logout();
        cart_view::render_cart(app);
    }
}

fn on_add_to_cart(app: &Rc<App>, target: &Element) {
    let els = &app.els;
    let Some(product) = data_u64(target, "data-product-id").and_then(|id| app.product_by_id(id))
    else {
        return;
    };
    let platform = dom::get_select_value(&els.modal_platform_select);
    let quantity: u32 = dom::get_input_value(&els.modal_quantity_input)
        .parse()
        .unwrap_or(0);
    if platform.is_empty() || quantity == 0 {
        return;
    }

    app.cart.borrow_mut().add(&product, &platform, quantity);
    cart_view::render_cart(app);
    dom::hide(&els.product_modal);
}

fn adjust_line(app: &Rc<App>, target: &Element, delta: i32) {
    let (Some(id), Some(platform)) = (
        data_u64(target, "data-product-id"),
        target.get_attribute("data-platform"),
    ) else {
        return;
    };
    app.cart.borrow_mut().update_quantity(id, &platform, delta);
    cart_view::render_cart(app);
}

fn remove_line(app: &Rc<App>, target: &Element) {
    let (Some(id), Some(platform)) = (
        data_u64(target, "data-product-id"),
        target.get_attribute("data-platform"),
    ) else {
        return;
    };
    app.cart.borrow_mut().remove(id, &platform);
    cart_view::render_cart(app);
}

fn on_login_submit(app: &Rc<App>) {
    let email = dom::get_input_value(&app.els.login_email);
    let password = app.els.login_password.value();

    let result = app.auth.borrow_mut().login(&email, &password);
    match result {
        Ok(_) => {
            dom::hide(&app.els.login_modal);
            app.els.login_form.reset();
            cart_view::render_cart(app);
        }
        Err(e) => dom::alert(&e.to_string()),
    }
}

fn on_register_submit(app: &Rc<App>) {
    let els = &app.els;
    let name = dom::get_input_value(&els.register_name);
    let email = dom::get_input_value(&els.register_email);
    let password = els.register_password.value();
    let confirm = els.register_password_confirm.value();

    if name.is_empty() || email.is_empty() {
        dom::alert("Name and email are required.");
        return;
    }
    if password != confirm {
        dom::alert("Passwords do not match.");
        return;
    }

    let now_ms = js_sys::Date::now() as u64;
    let result = app.auth.borrow_mut().register(&name, &email, &password, now_ms);
    match result {
        Ok(()) => {
            dom::alert("Registration successful. You can now log in.");
            dom::hide(&els.register_modal);
            els.register_form.reset();
        }
        Err(e) => dom::alert(&e.to_string()),
    }
}
