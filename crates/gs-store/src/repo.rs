//! Persistence seam for store state.
//!
//! The browser build backs this with `localStorage`; tests use
//! [`MemoryRepository`]. Records are whole JSON documents overwritten on
//! every mutation — last writer wins, single client.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Storage key for the registered-user collection.
pub const USERS_KEY: &str = "app_users";
/// Storage key for the current-session record.
pub const SESSION_KEY: &str = "current_user";
/// Storage key for the cart line items.
pub const CART_KEY: &str = "shopping_cart";

/// Key-value persistence for serialized store state.
///
/// Saves are best-effort: a full or unavailable backing store must not take
/// the storefront down, so implementations swallow write errors.
pub trait StateRepository {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Load and deserialize a record, tolerating missing or corrupt data.
pub fn load_json<R: StateRepository, T: DeserializeOwned>(repo: &R, key: &str) -> Option<T> {
    let raw = repo.load(key)?;
    serde_json::from_str(&raw).ok()
}

/// Serialize and persist a record.
pub fn save_json<R: StateRepository, T: Serialize>(repo: &R, key: &str, value: &T) {
    if let Ok(json) = serde_json::to_string(value) {
        repo.save(key, &json);
    }
}

/// In-memory repository for tests and headless use.
///
/// Cloning shares the backing map, so a store can be dropped and reopened
/// against the same data to exercise cold-start behavior.
#[derive(Clone, Default)]
pub struct MemoryRepository {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl StateRepository for MemoryRepository {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_backing_map() {
        let repo = MemoryRepository::default();
        repo.save("k", "v");
        assert_eq!(repo.clone().load("k").as_deref(), Some("v"));
    }

    #[test]
    fn load_json_tolerates_corrupt_records() {
        let repo = MemoryRepository::default();
        repo.save("k", "{not json");
        let parsed: Option<Vec<String>> = load_json(&repo, "k");
        assert_eq!(parsed, None);
    }

    #[test]
    fn remove_deletes_the_record() {
        let repo = MemoryRepository::default();
        repo.save("k", "v");
        repo.remove("k");
        assert_eq!(repo.load("k"), None);
    }
}
