use serde::{Deserialize, Serialize};

/// A purchasable product from the static catalog. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub platforms: Vec<String>,
    pub price: f64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A registered storefront user.
///
/// `id` is the epoch-millisecond timestamp taken at registration.
/// `password` is absent on session records (see [`User::session_copy`])
/// and on records written by pre-password revisions of the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
}

impl User {
    /// Clone suitable for persisting as the current session: password stripped.
    pub fn session_copy(&self) -> User {
        User {
            password: None,
            ..self.clone()
        }
    }
}

/// One cart line. At most one line exists per (product id, platform) pair,
/// and `quantity` is always >= 1 while the line exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub platform: String,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }

    pub fn matches(&self, product_id: u64, platform: &str) -> bool {
        self.product.id == product_id && self.platform == platform
    }
}

/// Format an amount as `$X.YY`. Single point of money formatting for views.
pub fn usd(amount: f64) -> String {
    format!("${:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_renders_two_decimals() {
        assert_eq!(usd(9.99), "$9.99");
        assert_eq!(usd(0.0), "$0.00");
        assert_eq!(usd(19.98), "$19.98");
    }

    #[test]
    fn line_total_multiplies_price_by_quantity() {
        let item = CartItem {
            product: Product {
                id: 1,
                name: "Starfall".into(),
                price: 9.99,
                ..Product::default()
            },
            platform: "PC".into(),
            quantity: 2,
        };
        assert!((item.line_total() - 19.98).abs() < 1e-9);
    }

    #[test]
    fn session_copy_strips_password() {
        let user = User {
            id: 1,
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: Some("hunter2".into()),
        };
        let session = user.session_copy();
        assert_eq!(session.email, user.email);
        assert_eq!(session.password, None);
    }
}
