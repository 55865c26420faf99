//! DOM element bindings.
//!
//! All static element references are resolved once at startup into
//! [`Elements`]. Dynamically rendered controls (product cards, cart line
//! buttons) are routed through the delegated dispatcher in `events` and
//! never need individual bindings. To add new UI elements, add a field here
//! and bind it in `Elements::bind()`.

use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement,
};

// ── Helpers ──

fn doc() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

pub fn by_id(id: &str) -> Option<Element> {
    doc().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let nl = doc().query_selector_all(selector).unwrap();
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn set_inner_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

pub fn get_input_value(el: &HtmlInputElement) -> String {
    el.value().trim().to_string()
}

pub fn get_select_value(el: &HtmlSelectElement) -> String {
    el.value()
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn has_class(el: &Element, cls: &str) -> bool {
    el.class_list().contains(cls)
}

/// Visibility is driven by the `hidden` class throughout the page.
pub fn show(el: &Element) {
    remove_class(el, "hidden");
}

pub fn hide(el: &Element) {
    add_class(el, "hidden");
}

pub fn document() -> Document {
    doc()
}

pub fn window() -> web_sys::Window {
    web_sys::window().unwrap()
}

/// Blocking user-facing notification, the storefront's only failure surface.
pub fn alert(msg: &str) {
    let _ = window().alert_with_message(msg);
}

// ── Elements struct ──

/// All static DOM element references used by the storefront.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    // Catalog
    pub product_grid: Element,

    // Cart panel
    pub cart_aside: Element,
    pub cart_overlay: Element,
    pub cart_items: Element,
    pub cart_total: Element,
    pub cart_count_badge: Element,
    pub checkout_btn: HtmlButtonElement,

    // Header auth regions (mobile duplicates are optional in the markup)
    pub auth_status: Element,
    pub user_actions: Element,
    pub mobile_auth_status: Option<Element>,
    pub mobile_user_actions: Option<Element>,

    // Product detail modal
    pub product_modal: Element,
    pub modal_images: Element,
    pub modal_title: Element,
    pub modal_desc: Element,
    pub modal_price: Element,
    pub modal_platform_select: HtmlSelectElement,
    pub modal_quantity_input: HtmlInputElement,
    pub modal_add_to_cart_btn: HtmlElement,

    // Checkout
    pub payment_modal: Element,
    pub payment_total: Element,
    pub confirmation_modal: Element,
    pub confirmation_user_name: Element,

    // Auth modals and forms
    pub login_modal: Element,
    pub login_form: HtmlFormElement,
    pub login_email: HtmlInputElement,
    pub login_password: HtmlInputElement,
    pub register_modal: Element,
    pub register_form: HtmlFormElement,
    pub register_name: HtmlInputElement,
    pub register_email: HtmlInputElement,
    pub register_password: HtmlInputElement,
    pub register_password_confirm: HtmlInputElement,
}

macro_rules! get_el {
    ($id:expr) => {
        by_id($id).ok_or_else(|| JsValue::from_str(&format!("missing element #{}", $id)))?
    };
}

macro_rules! get_input {
    ($id:expr) => {
        by_id_typed::<HtmlInputElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing input #{}", $id)))?
    };
}

macro_rules! get_select {
    ($id:expr) => {
        by_id_typed::<HtmlSelectElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing select #{}", $id)))?
    };
}

macro_rules! get_button {
    ($id:expr) => {
        by_id_typed::<HtmlButtonElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing button #{}", $id)))?
    };
}

macro_rules! get_form {
    ($id:expr) => {
        by_id_typed::<HtmlFormElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing form #{}", $id)))?
    };
}

macro_rules! get_html {
    ($id:expr) => {
        by_id_typed::<HtmlElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing html element #{}", $id)))?
    };
}

impl Elements {
    /// Resolve all DOM references. Call once after DOMContentLoaded.
    pub fn bind() -> Result<Elements, JsValue> {
        Ok(Elements {
            product_grid: get_el!("product-grid"),

            cart_aside: get_el!("shopping-cart-aside"),
            cart_overlay: get_el!("cart-overlay"),
            cart_items: get_el!("cart-items"),
            cart_total: get_el!("cart-total"),
            cart_count_badge: get_el!("cart-count-badge"),
            checkout_btn: get_button!("checkout-btn"),

            auth_status: get_el!("auth-status"),
            user_actions: get_el!("user-actions"),
            mobile_auth_status: by_id("mobile-auth-status"),
            mobile_user_actions: by_id("mobile-user-actions"),

            product_modal: get_el!("product-detail-modal"),
            modal_images: get_el!("modal-product-images-container"),
            modal_title: get_el!("modal-product-title"),
            modal_desc: get_el!("modal-product-desc"),
            modal_price: get_el!("modal-product-price"),
            modal_platform_select: get_select!("modal-platform-select"),
            modal_quantity_input: get_input!("modal-quantity-input"),
            modal_add_to_cart_btn: get_html!("modal-add-to-cart-btn"),

            payment_modal: get_el!("payment-modal"),
            payment_total: get_el!("payment-total"),
            confirmation_modal: get_el!("confirmation-modal"),
            confirmation_user_name: get_el!("confirmation-user-name"),

            login_modal: get_el!("login-modal"),
            login_form: get_form!("login-form"),
            login_email: get_input!("login-email"),
            login_password: get_input!("login-password"),
            register_modal: get_el!("register-modal"),
            register_form: get_form!("register-form"),
            register_name: get_input!("register-name"),
            register_email: get_input!("register-email"),
            register_password: get_input!("register-password"),
            register_password_confirm: get_input!("register-password-confirm"),
        })
    }
}
