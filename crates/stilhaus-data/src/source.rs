//! Catalog loading from the product data file.
//!
//! The file is a JSON array of product records, read once at startup.
//! Records are validated before the table is handed out: ids must be
//! positive and unique, prices non-negative.

use crate::error::DataError;
use std::collections::HashSet;
use std::path::Path;
use stilhaus_commerce::catalog::{Catalog, Product};
use tracing::info;

/// Load and validate the catalog from a JSON file.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, DataError> {
    let raw = std::fs::read_to_string(path)?;
    parse_catalog(&raw)
}

/// Parse and validate a catalog from a JSON string.
pub fn parse_catalog(json: &str) -> Result<Catalog, DataError> {
    let products: Vec<Product> = serde_json::from_str(json)?;

    let mut seen = HashSet::new();
    for product in &products {
        let id = product.id.get();
        if id == 0 {
            return Err(DataError::InvalidRecord {
                id,
                reason: "product id must be positive",
            });
        }
        if !seen.insert(id) {
            return Err(DataError::InvalidRecord {
                id,
                reason: "duplicate product id",
            });
        }
        if product.price.amount_cents < 0 {
            return Err(DataError::InvalidRecord {
                id,
                reason: "price must not be negative",
            });
        }
    }

    info!(products = products.len(), "catalog loaded");
    Ok(Catalog::new(products))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, price: f64) -> String {
        format!(
            r#"{{
                "id": {id},
                "name": "Produkt {id}",
                "category": "Herren",
                "price": {price},
                "image": "https://example.com/{id}.jpg",
                "description": "Testartikel",
                "rating": "4.1",
                "reviews": 8
            }}"#
        )
    }

    #[test]
    fn test_parse_valid_catalog() {
        let json = format!("[{},{}]", record(1, 19.99), record(2, 34.0));
        let catalog = parse_catalog(&json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.iter().map(|p| p.price.amount_cents).collect::<Vec<_>>(),
            vec![1999, 3400]
        );
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            parse_catalog("[{\"id\": 1,"),
            Err(DataError::Json(_))
        ));
    }

    #[test]
    fn test_zero_id_is_rejected() {
        let json = format!("[{}]", record(0, 10.0));
        assert!(matches!(
            parse_catalog(&json),
            Err(DataError::InvalidRecord {
                id: 0,
                reason: "product id must be positive"
            })
        ));
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let json = format!("[{},{}]", record(3, 10.0), record(3, 12.0));
        assert!(matches!(
            parse_catalog(&json),
            Err(DataError::InvalidRecord {
                id: 3,
                reason: "duplicate product id"
            })
        ));
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let json = format!("[{}]", record(4, -1.0));
        assert!(matches!(
            parse_catalog(&json),
            Err(DataError::InvalidRecord {
                id: 4,
                reason: "price must not be negative"
            })
        ));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        assert!(matches!(
            load_catalog("does/not/exist.json"),
            Err(DataError::Io(_))
        ));
    }
}
