//! Mock checkout flow.
//!
//! Payment modal with the cart total, a payment-method highlight, and a
//! staged confirmation screen. The delay is cosmetic: it stands in for a
//! payment round-trip and has no retry or cancellation semantics.

use crate::app::App;
use crate::cart_view;
use crate::dom;
use gloo_timers::future::TimeoutFuture;
use gs_types::usd;
use std::rc::Rc;
use web_sys::Element;

const CONFIRMATION_DELAY_MS: u32 = 500;

/// Open the payment modal with the current cart total.
pub fn open_payment_modal(app: &App) {
    let total = app.cart.borrow().total();
    dom::set_text(&app.els.payment_total, &usd(total));
    dom::show(&app.els.payment_modal);
}

/// Highlight the clicked payment method, clearing any previous choice.
pub fn select_payment_method(method: &Element) {
    for el in dom::query_all(".payment-method") {
        dom::remove_class(&el, "payment-method--selected");
    }
    dom::add_class(method, "payment-method--selected");
}

/// Mock payment: hide the payment modal, wait, then confirm and empty the
/// cart.
pub async fn complete_payment(app: Rc<App>) {
    dom::hide(&app.els.payment_modal);

    TimeoutFuture::new(CONFIRMATION_DELAY_MS).await;

    let name = app
        .auth
        .borrow()
        .current_user()
        .map(|u| u.name.clone())
        .unwrap_or_else(|| "guest".to_string());
    dom::set_text(&app.els.confirmation_user_name, &name);
    dom::show(&app.els.confirmation_modal);

    app.cart.borrow_mut().clear();
    cart_view::render_cart(&app);
}
