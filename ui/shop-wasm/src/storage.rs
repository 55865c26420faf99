//! `localStorage`-backed repository.
//!
//! Writes are last-writer-wins and best-effort: quota or availability
//! errors leave the in-memory stores as the source of truth for the rest
//! of the session.

use gs_store::StateRepository;

#[derive(Clone, Copy, Default)]
pub struct LocalStorageRepository;

fn backing() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

impl StateRepository for LocalStorageRepository {
    fn load(&self, key: &str) -> Option<String> {
        backing()?.get_item(key).ok()?
    }

    fn save(&self, key: &str, value: &str) {
        if let Some(s) = backing() {
            let _ = s.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(s) = backing() {
            let _ = s.remove_item(key);
        }
    }
}
