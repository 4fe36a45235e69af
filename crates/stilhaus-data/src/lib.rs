//! Catalog loading and the simulated storefront backend for Stilhaus.
//!
//! There is no real server behind this storefront: the catalog is a JSON
//! file read once at startup, and every "network" operation is an
//! in-memory computation behind an artificial delay. This crate provides:
//!
//! - **Source**: loading and validating the catalog data file
//! - **Config**: TOML-backed runtime configuration (paths, latency)
//! - **Pending**: delayed computations with cancellation on drop
//! - **Storefront**: the API surface the presentation layer talks to
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use stilhaus_commerce::prelude::*;
//! use stilhaus_data::{load_catalog, StoreConfig, Storefront};
//!
//! let config = StoreConfig::default();
//! let catalog = Arc::new(load_catalog(&config.catalog_path)?);
//! let store = Storefront::new(catalog, config);
//!
//! let page = store.browse(BrowseQuery::new()).wait().await;
//! ```

pub mod config;
pub mod error;
pub mod pending;
pub mod source;
pub mod storefront;

pub use config::{LatencyConfig, StoreConfig};
pub use error::DataError;
pub use pending::Pending;
pub use source::{load_catalog, parse_catalog};
pub use storefront::Storefront;
