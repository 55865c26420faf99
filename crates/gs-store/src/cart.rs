//! Shopping cart store.
//!
//! An ordered list of line items keyed by (product id, platform), persisted
//! wholesale after every mutation. Operations on unknown keys are no-ops.

use crate::repo::{load_json, save_json, StateRepository, CART_KEY};
use gs_types::{CartItem, Product};

pub struct Cart<R: StateRepository> {
    items: Vec<CartItem>,
    repo: R,
}

impl<R: StateRepository> Cart<R> {
    /// Open the cart, restoring any previously persisted items.
    pub fn load(repo: R) -> Self {
        let items = load_json(&repo, CART_KEY).unwrap_or_default();
        Self { items, repo }
    }

    fn persist(&self) {
        save_json(&self.repo, CART_KEY, &self.items);
    }

    /// Add `quantity` of a product on a platform. Accumulates onto an
    /// existing (id, platform) line rather than duplicating it. Quantity 0
    /// is a no-op.
    pub fn add(&mut self, product: &Product, platform: &str, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self
            .items
            .iter_mut()
            .find(|i| i.matches(product.id, platform))
        {
            Some(item) => item.quantity += quantity,
            None => self.items.push(CartItem {
                product: product.clone(),
                platform: platform.to_owned(),
                quantity,
            }),
        }
        self.persist();
    }

    /// Adjust a line's quantity by `delta` (+1 or -1). Dropping to zero or
    /// below removes the line entirely.
    pub fn update_quantity(&mut self, product_id: u64, platform: &str, delta: i32) {
        let Some(item) = self.items.iter_mut().find(|i| i.matches(product_id, platform)) else {
            return;
        };
        let quantity = i64::from(item.quantity) + i64::from(delta);
        if quantity <= 0 {
            self.remove(product_id, platform);
        } else {
            item.quantity = quantity as u32;
            self.persist();
        }
    }

    pub fn remove(&mut self, product_id: u64, platform: &str) {
        self.items.retain(|i| !i.matches(product_id, platform));
        self.persist();
    }

    /// Sum of price × quantity over all lines.
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Current lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Total unit count across all lines (for the header badge).
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::MemoryRepository;

    fn product(id: u64, price: f64) -> Product {
        Product {
            id,
            name: format!("game-{id}"),
            platforms: vec!["PC".into(), "PS5".into()],
            price,
            ..Product::default()
        }
    }

    #[test]
    fn adding_same_pair_accumulates_quantity() {
        let mut cart = Cart::load(MemoryRepository::default());
        let p = product(1, 9.99);
        cart.add(&p, "PC", 1);
        cart.add(&p, "PC", 2);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
    }

    #[test]
    fn same_product_on_other_platform_is_a_separate_line() {
        let mut cart = Cart::load(MemoryRepository::default());
        let p = product(1, 9.99);
        cart.add(&p, "PC", 1);
        cart.add(&p, "PS5", 1);
        assert_eq!(cart.items().len(), 2);
    }

    #[test]
    fn decrement_to_zero_removes_and_further_decrements_are_noops() {
        let mut cart = Cart::load(MemoryRepository::default());
        cart.add(&product(1, 5.0), "PC", 1);
        cart.update_quantity(1, "PC", -1);
        assert!(cart.is_empty());
        cart.update_quantity(1, "PC", -1);
        assert!(cart.is_empty());
    }

    #[test]
    fn operations_on_unknown_keys_are_noops() {
        let mut cart = Cart::load(MemoryRepository::default());
        cart.add(&product(1, 5.0), "PC", 1);
        cart.update_quantity(2, "PC", 1);
        cart.update_quantity(1, "Xbox", 1);
        cart.remove(9, "PC");
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn add_with_zero_quantity_is_a_noop() {
        let mut cart = Cart::load(MemoryRepository::default());
        cart.add(&product(1, 5.0), "PC", 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn total_sums_lines_and_clear_resets_it() {
        let mut cart = Cart::load(MemoryRepository::default());
        cart.add(&product(1, 9.99), "PC", 2);
        cart.add(&product(2, 30.0), "PS5", 1);
        assert!((cart.total() - 49.98).abs() < 1e-9);
        assert_eq!(cart.item_count(), 3);
        cart.clear();
        assert_eq!(cart.total(), 0.0);
        assert!(cart.is_empty());
    }

    #[test]
    fn items_keep_insertion_order() {
        let mut cart = Cart::load(MemoryRepository::default());
        cart.add(&product(3, 1.0), "PC", 1);
        cart.add(&product(1, 1.0), "PC", 1);
        cart.add(&product(2, 1.0), "PC", 1);
        let ids: Vec<u64> = cart.items().iter().map(|i| i.product.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn reopening_restores_persisted_items() {
        let repo = MemoryRepository::default();
        {
            let mut cart = Cart::load(repo.clone());
            cart.add(&product(1, 9.99), "PC", 2);
        }
        let reopened = Cart::load(repo);
        assert_eq!(reopened.items().len(), 1);
        assert_eq!(reopened.items()[0].quantity, 2);
    }
}
