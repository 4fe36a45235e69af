//! Runtime configuration.
//!
//! Every field has a default so an empty TOML document (or no file at all)
//! yields a working setup.

use crate::error::DataError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for the storefront.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path to the catalog data file (a JSON array of product records).
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,
    /// Simulated latency per endpoint.
    #[serde(default)]
    pub latency: LatencyConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            latency: LatencyConfig::default(),
        }
    }
}

impl StoreConfig {
    /// Parse a TOML document; missing fields keep their defaults.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, DataError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }
}

/// Simulated latency, in milliseconds, per mocked endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LatencyConfig {
    /// Delay before filtered browse results appear.
    #[serde(default = "default_browse_ms")]
    pub browse_ms: u64,
    /// Delay before a product detail resolves.
    #[serde(default = "default_detail_ms")]
    pub detail_ms: u64,
    /// Delay before checkout completes.
    #[serde(default = "default_checkout_ms")]
    pub checkout_ms: u64,
    /// Delay before a newsletter subscription confirms.
    #[serde(default = "default_newsletter_ms")]
    pub newsletter_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            browse_ms: default_browse_ms(),
            detail_ms: default_detail_ms(),
            checkout_ms: default_checkout_ms(),
            newsletter_ms: default_newsletter_ms(),
        }
    }
}

impl LatencyConfig {
    /// No artificial delay at all; useful in tests.
    pub fn instant() -> Self {
        Self {
            browse_ms: 0,
            detail_ms: 0,
            checkout_ms: 0,
            newsletter_ms: 0,
        }
    }

    /// Browse delay as a `Duration`.
    pub fn browse(&self) -> Duration {
        Duration::from_millis(self.browse_ms)
    }

    /// Detail delay as a `Duration`.
    pub fn detail(&self) -> Duration {
        Duration::from_millis(self.detail_ms)
    }

    /// Checkout delay as a `Duration`.
    pub fn checkout(&self) -> Duration {
        Duration::from_millis(self.checkout_ms)
    }

    /// Newsletter delay as a `Duration`.
    pub fn newsletter(&self) -> Duration {
        Duration::from_millis(self.newsletter_ms)
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("data/products.json")
}

fn default_browse_ms() -> u64 {
    600
}

fn default_detail_ms() -> u64 {
    800
}

fn default_checkout_ms() -> u64 {
    2000
}

fn default_newsletter_ms() -> u64 {
    1500
}
