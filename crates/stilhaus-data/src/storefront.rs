//! The storefront API surface.
//!
//! Wraps the immutable catalog behind the operations the presentation
//! layer calls, with simulated network latency on everything the original
//! backend would serve asynchronously. Quick search stays synchronous: it
//! runs on every keystroke.
//!
//! The simulated endpoints always resolve; a real integration would add
//! failure paths for checkout and newsletter subscription here.

use crate::config::StoreConfig;
use crate::error::DataError;
use crate::pending::Pending;
use std::sync::Arc;
use stilhaus_commerce::browse::{browse, BrowsePage, BrowseQuery};
use stilhaus_commerce::cart::Cart;
use stilhaus_commerce::catalog::{Catalog, Product};
use stilhaus_commerce::checkout::OrderConfirmation;
use stilhaus_commerce::ids::ProductId;
use stilhaus_commerce::search::quick_search;
use tracing::{debug, info};

/// The simulated storefront backend.
#[derive(Debug, Clone)]
pub struct Storefront {
    catalog: Arc<Catalog>,
    config: StoreConfig,
}

impl Storefront {
    /// Create a storefront over a loaded catalog.
    pub fn new(catalog: Arc<Catalog>, config: StoreConfig) -> Self {
        Self { catalog, config }
    }

    /// The underlying catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Derive the visible browse page, behind the browse delay.
    pub fn browse(&self, query: BrowseQuery) -> Pending<BrowsePage> {
        debug!(category = query.category().label(), page = query.page(), "browse requested");
        let catalog = Arc::clone(&self.catalog);
        Pending::after(self.config.latency.browse(), move || {
            browse(&catalog, &query)
        })
    }

    /// Fetch a product by id, behind the detail delay.
    ///
    /// `None` means "not found"; the caller navigates back to the listing
    /// rather than treating it as an error.
    pub fn product_detail(&self, id: ProductId) -> Pending<Option<Product>> {
        debug!(%id, "product detail requested");
        let catalog = Arc::clone(&self.catalog);
        Pending::after(self.config.latency.detail(), move || {
            catalog.get(id).cloned()
        })
    }

    /// Search the catalog for the overlay. Synchronous, capped result.
    pub fn quick_search(&self, query: &str) -> Vec<Product> {
        quick_search(&self.catalog, query)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Place an order for the cart's current contents, behind the checkout
    /// delay. Always succeeds; the caller clears the cart on completion.
    pub fn checkout(&self, cart: &Cart) -> Pending<OrderConfirmation> {
        let confirmation = OrderConfirmation::from_cart(cart);
        info!(
            order_id = %confirmation.id,
            items = confirmation.items.len(),
            total = %confirmation.pricing.grand_total,
            "checkout started"
        );
        Pending::after(self.config.latency.checkout(), move || confirmation)
    }

    /// Subscribe an address to the newsletter.
    ///
    /// Validation is immediate; the confirmation is delayed and always
    /// succeeds.
    pub fn subscribe_newsletter(&self, email: &str) -> Result<Pending<()>, DataError> {
        if !email.contains('@') {
            return Err(DataError::InvalidEmail(email.to_string()));
        }
        info!(email, "newsletter subscription started");
        Ok(Pending::after(self.config.latency.newsletter(), || ()))
    }
}
