//! Product catalog: immutable records and the in-memory table.
//!
//! The catalog is loaded once at startup from the product data file and is
//! never mutated afterwards. All derivations (browse, search, featured
//! strips) read from it without copying the full table.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product record.
///
/// Identity is `id`; records are immutable at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique positive id.
    pub id: ProductId,
    /// Display name; may embed a color suffix ("... in Schwarz").
    pub name: String,
    /// Stored category label (e.g. "Herren"). Virtual categories such as
    /// "Sale" and "Neuheiten" are computed at browse time, never stored.
    pub category: String,
    /// Unit price. The data file carries decimal currency units; internally
    /// the amount is integer cents.
    #[serde(with = "price_units")]
    pub price: Money,
    /// Image URL.
    pub image: String,
    /// Display description.
    pub description: String,
    /// Average rating as a one-decimal string in [3.0, 5.0].
    pub rating: String,
    /// Review count.
    pub reviews: u32,
}

impl Product {
    /// Parse the rating string into a numeric value (0.0 if malformed).
    pub fn rating_value(&self) -> f64 {
        self.rating.parse().unwrap_or(0.0)
    }

    /// Price formatted for display (e.g. "€49.99").
    pub fn display_price(&self) -> String {
        self.price.display()
    }
}

/// Serde adapter: `price` is decimal currency units on the wire, cents in
/// memory.
mod price_units {
    use crate::money::{Currency, Money};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(price: &Money, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(price.to_decimal())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Money, D::Error>
    where
        D: Deserializer<'de>,
    {
        let units = f64::deserialize(deserializer)?;
        Ok(Money::from_decimal(units, Currency::EUR))
    }
}

/// The read-only in-memory product table.
///
/// Iteration order is the data-file order, which every derived view
/// preserves unless a rule says otherwise.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from product records.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All products in data-file order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate products in data-file order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// The `n` most recent products, newest (highest id) first.
    pub fn latest(&self, n: usize) -> Vec<&Product> {
        let mut all: Vec<&Product> = self.products.iter().collect();
        all.sort_unstable_by(|a, b| b.id.cmp(&a.id));
        all.truncate(n);
        all
    }

    /// The `n` best-rated products, highest rating first.
    pub fn top_rated(&self, n: usize) -> Vec<&Product> {
        let mut all: Vec<&Product> = self.products.iter().collect();
        all.sort_by(|a, b| b.rating_value().total_cmp(&a.rating_value()));
        all.truncate(n);
        all
    }
}
