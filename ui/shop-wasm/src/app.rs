//! Application context.
//!
//! One explicit [`App`] instance is constructed at startup and threaded
//! into every event closure as an `Rc`, instead of hiding the stores in
//! module globals. WASM is single-threaded, so `RefCell` interior
//! mutability is all the coordination the stores need.

use crate::dom::Elements;
use crate::storage::LocalStorageRepository;
use gs_store::{Auth, Cart};
use gs_types::Product;
use std::cell::RefCell;
use std::rc::Rc;

pub struct App {
    pub els: Elements,
    pub cart: RefCell<Cart<LocalStorageRepository>>,
    pub auth: RefCell<Auth<LocalStorageRepository>>,
    pub catalog: RefCell<Vec<Product>>,
}

impl App {
    /// Open both stores against `localStorage` and wrap everything in the
    /// shared context handle.
    pub fn new(els: Elements) -> Rc<App> {
        Rc::new(App {
            els,
            cart: RefCell::new(Cart::load(LocalStorageRepository)),
            auth: RefCell::new(Auth::load(LocalStorageRepository)),
            catalog: RefCell::new(Vec::new()),
        })
    }

    pub fn set_catalog(&self, products: Vec<Product>) {
        *self.catalog.borrow_mut() = products;
    }

    pub fn product_by_id(&self, id: u64) -> Option<Product> {
        self.catalog.borrow().iter().find(|p| p.id == id).cloned()
    }
}
