//! Storefront domain types and logic for Stilhaus.
//!
//! This crate is the pure core of the storefront:
//!
//! - **Catalog**: immutable product records and the in-memory table
//! - **Cart**: the shopping cart store with derived totals
//! - **Browse**: category/price filtering and pagination
//! - **Search**: the quick-search probe for the overlay
//! - **Checkout**: order confirmation snapshots
//!
//! It performs no I/O and knows nothing about latency; loading the catalog
//! and simulating the backend live in `stilhaus-data`.
//!
//! # Example
//!
//! ```rust
//! use stilhaus_commerce::prelude::*;
//!
//! let product = Product {
//!     id: ProductId::new(1),
//!     name: "Klassisches Hemd".to_string(),
//!     category: "Herren".to_string(),
//!     price: Money::from_decimal(49.99, Currency::EUR),
//!     image: "https://example.com/1.jpg".to_string(),
//!     description: "Zeitloser Schnitt.".to_string(),
//!     rating: "4.5".to_string(),
//!     reviews: 31,
//! };
//!
//! let mut cart = Cart::new();
//! cart.add_item(&product);
//! cart.add_item(&product);
//!
//! assert_eq!(cart.item_count(), 1);
//! assert_eq!(cart.total(), Money::from_decimal(99.98, Currency::EUR));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod browse;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;

pub use error::CommerceError;
pub use ids::{OrderId, ProductId};
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::{OrderId, ProductId};
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Product};

    // Cart
    pub use crate::cart::{Cart, CartPricing, LineItem};

    // Browse
    pub use crate::browse::{
        browse, BrowsePage, BrowseQuery, CategoryFilter, PageEntry, Pagination, PriceRange,
    };

    // Search
    pub use crate::search::quick_search;

    // Checkout
    pub use crate::checkout::OrderConfirmation;
}
