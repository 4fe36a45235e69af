//! Quick-search probe over the catalog.
//!
//! Matching is intentionally simple: lowercase substring containment of
//! every query term, no scoring. Results keep catalog order and are capped
//! for the search overlay.

use crate::catalog::{Catalog, Product};

/// Maximum number of results returned.
pub const RESULT_LIMIT: usize = 6;

/// Find products whose combined name, category, and description contain
/// every whitespace-separated query term (case-insensitive).
///
/// An empty or whitespace-only query yields no results, not the whole
/// catalog.
pub fn quick_search<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Product> {
    let terms: Vec<String> = query
        .split_whitespace()
        .map(|term| term.to_lowercase())
        .collect();
    if terms.is_empty() {
        return Vec::new();
    }

    catalog
        .iter()
        .filter(|product| {
            let text = format!(
                "{} {} {}",
                product.name, product.category, product.description
            )
            .to_lowercase();
            terms.iter().all(|term| text.contains(term.as_str()))
        })
        .take(RESULT_LIMIT)
        .collect()
}
