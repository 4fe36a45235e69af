//! Order confirmation produced by the checkout flow.

use crate::cart::{Cart, CartPricing, LineItem};
use crate::ids::OrderId;
use serde::{Deserialize, Serialize};

/// A completed order: an immutable snapshot of the cart at checkout time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderConfirmation {
    /// Generated order id.
    pub id: OrderId,
    /// The purchased line items, in cart order.
    pub items: Vec<LineItem>,
    /// Pricing at the moment of checkout.
    pub pricing: CartPricing,
    /// Unix timestamp of order placement.
    pub placed_at: i64,
}

impl OrderConfirmation {
    /// Snapshot the current cart into a confirmation.
    pub fn from_cart(cart: &Cart) -> Self {
        Self {
            id: OrderId::generate(),
            items: cart.items().to_vec(),
            pricing: cart.pricing(),
            placed_at: current_timestamp(),
        }
    }

    /// Total units in the order.
    pub fn total_units(&self) -> u64 {
        self.items.iter().map(|i| i.quantity as u64).sum()
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::ids::ProductId;
    use crate::money::{Currency, Money};

    fn product(id: u64, price_cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Produkt {}", id),
            category: "Herren".to_string(),
            price: Money::new(price_cents, Currency::EUR),
            image: format!("https://example.com/{}.jpg", id),
            description: "Testartikel".to_string(),
            rating: "4.5".to_string(),
            reviews: 20,
        }
    }

    #[test]
    fn test_confirmation_snapshots_cart() {
        let mut cart = Cart::new();
        let p = product(1, 2500);
        cart.add_item(&p);
        cart.add_item(&p);
        cart.add_item(&product(2, 4000));

        let confirmation = OrderConfirmation::from_cart(&cart);
        assert_eq!(confirmation.items.len(), 2);
        assert_eq!(confirmation.total_units(), 3);
        assert_eq!(confirmation.pricing, cart.pricing());
        assert!(!confirmation.id.as_str().is_empty());

        // Later cart mutations do not touch the snapshot.
        cart.clear();
        assert_eq!(confirmation.items.len(), 2);
    }

    #[test]
    fn test_confirmations_get_distinct_ids() {
        let cart = Cart::new();
        let a = OrderConfirmation::from_cart(&cart);
        let b = OrderConfirmation::from_cart(&cart);
        assert_ne!(a.id, b.id);
    }
}
