//! UI-agnostic storefront state: cart and auth stores over a pluggable
//! persistence seam. No DOM or wasm dependency lives here.

pub mod auth;
pub mod cart;
pub mod repo;

pub use auth::{Auth, AuthError};
pub use cart::Cart;
pub use repo::{MemoryRepository, StateRepository, CART_KEY, SESSION_KEY, USERS_KEY};
