//! Commerce error types.
//!
//! The cart and browse pipeline handle boundary conditions by clamping or
//! silent no-op, so very little in this crate can fail. What remains is
//! price-range construction.

use crate::money::Money;
use thiserror::Error;

/// Errors that can occur in storefront domain operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Price range bounds are inverted or narrower than the minimum span.
    #[error("Invalid price range: {min} to {max}")]
    InvalidPriceRange { min: Money, max: Money },

    /// Price range extends past the slider bounds.
    #[error("Price range out of bounds: {min} to {max}")]
    PriceRangeOutOfBounds { min: Money, max: Money },
}
