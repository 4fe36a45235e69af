//! Catalog browsing: category/price filtering and pagination.
//!
//! `browse` is a pure derivation from (catalog, query) to the visible page;
//! it holds no state and never mutates the catalog. Filters are applied in
//! a fixed order: category, then price, then pagination.

use crate::catalog::{Catalog, Product};
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Products per page.
pub const PAGE_SIZE: usize = 12;

/// Number of items in the "Neuheiten" view.
pub const NEW_ARRIVALS_COUNT: usize = 10;

/// Price cap in cents for the "Sale" rule.
pub const SALE_PRICE_CAP_CENTS: i64 = 5000;

/// Pages shown in full before the pager switches to the compact form.
const PAGER_WINDOW: usize = 5;

/// The selected category: a stored label or one of the virtual views.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    /// "Alle" — no category restriction.
    #[default]
    All,
    /// "Neuheiten" — the latest arrivals, by id.
    New,
    /// "Sale" — discounted items.
    Sale,
    /// Exact, case-sensitive match against the stored category label.
    Label(String),
}

impl CategoryFilter {
    /// Parse a display label ("Alle", "Neuheiten", "Sale", or a stored
    /// category label).
    pub fn from_label(label: &str) -> Self {
        match label {
            "Alle" => CategoryFilter::All,
            "Neuheiten" => CategoryFilter::New,
            "Sale" => CategoryFilter::Sale,
            other => CategoryFilter::Label(other.to_string()),
        }
    }

    /// The display label.
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "Alle",
            CategoryFilter::New => "Neuheiten",
            CategoryFilter::Sale => "Sale",
            CategoryFilter::Label(label) => label,
        }
    }
}

/// An inclusive price interval for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    min: Money,
    max: Money,
}

impl PriceRange {
    /// Lower slider bound in cents.
    pub const FLOOR_CENTS: i64 = 0;
    /// Upper slider bound in cents (200 EUR).
    pub const CEILING_CENTS: i64 = 20_000;
    /// Minimum distance between the bounds in cents (10 EUR).
    pub const MIN_SPAN_CENTS: i64 = 1_000;

    /// Create a validated range: `0 <= min < max <= 200 EUR` and a span of
    /// at least 10 EUR.
    pub fn new(min: Money, max: Money) -> Result<Self, CommerceError> {
        if min.amount_cents < Self::FLOOR_CENTS || max.amount_cents > Self::CEILING_CENTS {
            return Err(CommerceError::PriceRangeOutOfBounds { min, max });
        }
        if min.amount_cents >= max.amount_cents
            || max.amount_cents - min.amount_cents < Self::MIN_SPAN_CENTS
        {
            return Err(CommerceError::InvalidPriceRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Create a range from decimal EUR bounds.
    pub fn from_units(min: f64, max: f64) -> Result<Self, CommerceError> {
        Self::new(
            Money::from_decimal(min, Currency::EUR),
            Money::from_decimal(max, Currency::EUR),
        )
    }

    /// Lower bound.
    pub fn min(&self) -> Money {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> Money {
        self.max
    }

    /// Inclusive membership test.
    pub fn contains(&self, price: Money) -> bool {
        price.amount_cents >= self.min.amount_cents && price.amount_cents <= self.max.amount_cents
    }
}

impl Default for PriceRange {
    /// The full slider range, 0 to 200 EUR.
    fn default() -> Self {
        Self {
            min: Money::new(Self::FLOOR_CENTS, Currency::EUR),
            max: Money::new(Self::CEILING_CENTS, Currency::EUR),
        }
    }
}

/// Browse parameters: category, price range, and the requested page.
///
/// Fields are private so the setters can uphold the rule that changing
/// category or price range snaps back to page 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowseQuery {
    category: CategoryFilter,
    price: PriceRange,
    page: usize,
}

impl Default for BrowseQuery {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            price: PriceRange::default(),
            page: 1,
        }
    }
}

impl BrowseQuery {
    /// "Alle" over the full price range, page 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a category; resets the page to 1.
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self.page = 1;
        self
    }

    /// Select a price range; resets the page to 1.
    pub fn with_price_range(mut self, price: PriceRange) -> Self {
        self.price = price;
        self.page = 1;
        self
    }

    /// Request a page (1-indexed; 0 is treated as 1). Filters are kept.
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    /// The selected category.
    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    /// The selected price range.
    pub fn price(&self) -> PriceRange {
        self.price
    }

    /// The requested page.
    pub fn page(&self) -> usize {
        self.page
    }
}

/// Pagination info for a filtered result.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed; clamped to the last page).
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
    /// Total number of filtered items.
    pub total: usize,
    /// Total number of pages; 0 when nothing matched.
    pub total_pages: usize,
}

impl Pagination {
    /// Compute pagination for a result of `total` items.
    ///
    /// A requested page past the end is clamped to the last page rather
    /// than rejected.
    pub fn new(requested_page: usize, per_page: usize, total: usize) -> Self {
        let total_pages = total.div_ceil(per_page);
        let page = if total_pages == 0 {
            1
        } else {
            requested_page.clamp(1, total_pages)
        };
        Self {
            page,
            per_page,
            total,
            total_pages,
        }
    }

    /// Offset of the first item on the current page.
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.per_page
    }

    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether a previous page exists.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Entries for the compact pager.
    ///
    /// Up to five pages are listed in full; longer results collapse around
    /// the current page with ellipsis placeholders. Ellipses are display
    /// fillers, never page targets.
    pub fn entries(&self) -> Vec<PageEntry> {
        use PageEntry::{Ellipsis, Page};

        let n = self.total_pages;
        if n <= PAGER_WINDOW {
            return (1..=n).map(Page).collect();
        }

        if self.page <= 3 {
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(n)]
        } else if self.page >= n - 2 {
            vec![
                Page(1),
                Ellipsis,
                Page(n - 3),
                Page(n - 2),
                Page(n - 1),
                Page(n),
            ]
        } else {
            vec![
                Page(1),
                Ellipsis,
                Page(self.page - 1),
                Page(self.page),
                Page(self.page + 1),
                Ellipsis,
                Page(n),
            ]
        }
    }
}

/// One slot in the compact pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageEntry {
    /// A clickable page number.
    Page(usize),
    /// A non-clickable "…" placeholder.
    Ellipsis,
}

/// One visible page of browse results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrowsePage {
    /// Products on the current page, in filtered order.
    pub items: Vec<Product>,
    /// Pagination over the full filtered result.
    pub pagination: Pagination,
}

impl BrowsePage {
    /// Check if the page has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Derive the visible page for a query.
pub fn browse(catalog: &Catalog, query: &BrowseQuery) -> BrowsePage {
    let filtered = filter_products(catalog, query);
    let pagination = Pagination::new(query.page(), PAGE_SIZE, filtered.len());
    let items = filtered
        .into_iter()
        .skip(pagination.offset())
        .take(pagination.per_page)
        .cloned()
        .collect();
    BrowsePage { items, pagination }
}

/// Apply the category and price steps, preserving catalog order except
/// where a rule imposes its own.
fn filter_products<'a>(catalog: &'a Catalog, query: &BrowseQuery) -> Vec<&'a Product> {
    let mut result = category_step(catalog, query.category());
    let range = query.price();
    result.retain(|p| range.contains(p.price));
    result
}

fn category_step<'a>(catalog: &'a Catalog, category: &CategoryFilter) -> Vec<&'a Product> {
    match category {
        CategoryFilter::All => catalog.iter().collect(),
        // Placeholder sale rule: cheap items plus every third id stand in
        // for a real discount flag.
        CategoryFilter::Sale => catalog
            .iter()
            .filter(|p| p.price.amount_cents < SALE_PRICE_CAP_CENTS || p.id.get() % 3 == 0)
            .collect(),
        // "Neuheiten" substitutes a fixed latest-10 set for the whole
        // catalog; it ignores any stored category.
        CategoryFilter::New => catalog.latest(NEW_ARRIVALS_COUNT),
        CategoryFilter::Label(label) => catalog.iter().filter(|p| p.category == *label).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;

    fn product(id: u64, category: &str, price_cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Produkt {}", id),
            category: category.to_string(),
            price: Money::new(price_cents, Currency::EUR),
            image: format!("https://example.com/{}.jpg", id),
            description: "Testartikel".to_string(),
            rating: "4.0".to_string(),
            reviews: 5,
        }
    }

    fn catalog_of(products: Vec<Product>) -> Catalog {
        Catalog::new(products)
    }

    #[test]
    fn test_category_label_round_trip() {
        assert_eq!(CategoryFilter::from_label("Alle"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_label("Neuheiten"), CategoryFilter::New);
        assert_eq!(CategoryFilter::from_label("Sale"), CategoryFilter::Sale);
        assert_eq!(
            CategoryFilter::from_label("Herren"),
            CategoryFilter::Label("Herren".to_string())
        );
        assert_eq!(CategoryFilter::from_label("Herren").label(), "Herren");
        assert_eq!(CategoryFilter::All.label(), "Alle");
    }

    #[test]
    fn test_exact_category_match_only() {
        let catalog = catalog_of(vec![
            product(1, "Herren", 2000),
            product(2, "Damen", 2000),
            product(3, "herren", 2000),
        ]);
        let query = BrowseQuery::new().with_category(CategoryFilter::from_label("Herren"));
        let page = browse(&catalog, &query);
        let ids: Vec<u64> = page.items.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_unknown_category_yields_empty_page() {
        let catalog = catalog_of(vec![product(1, "Herren", 2000)]);
        let query = BrowseQuery::new().with_category(CategoryFilter::from_label("Schuhe"));
        let page = browse(&catalog, &query);
        assert!(page.is_empty());
        assert_eq!(page.pagination.total_pages, 0);
    }

    #[test]
    fn test_sale_rule_membership() {
        let catalog = catalog_of(vec![
            product(1, "Herren", 4999), // cheap
            product(2, "Herren", 9000), // neither
            product(3, "Herren", 9000), // id divisible by 3
            product(4, "Damen", 5000),  // exactly at the cap, not below
        ]);
        let query = BrowseQuery::new().with_category(CategoryFilter::Sale);
        let ids: Vec<u64> = browse(&catalog, &query)
            .items
            .iter()
            .map(|p| p.id.get())
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_sale_rule_is_deterministic() {
        let catalog = catalog_of((1..=40).map(|i| product(i, "Herren", 100 * i as i64)).collect());
        let query = BrowseQuery::new().with_category(CategoryFilter::Sale);
        assert_eq!(browse(&catalog, &query), browse(&catalog, &query));
    }

    #[test]
    fn test_new_arrivals_ignore_category_and_sort_by_id_descending() {
        let mut products: Vec<Product> = (1..=30).map(|i| product(i, "Damen", 2000)).collect();
        products.push(product(31, "Accessoires", 2000));
        let catalog = catalog_of(products);

        let query = BrowseQuery::new().with_category(CategoryFilter::New);
        let page = browse(&catalog, &query);
        let ids: Vec<u64> = page.items.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![31, 30, 29, 28, 27, 26, 25, 24, 23, 22]);
        assert_eq!(page.pagination.total, NEW_ARRIVALS_COUNT);
    }

    #[test]
    fn test_new_arrivals_on_small_catalog() {
        let catalog = catalog_of(vec![product(2, "Herren", 2000), product(9, "Damen", 2000)]);
        let query = BrowseQuery::new().with_category(CategoryFilter::New);
        let ids: Vec<u64> = browse(&catalog, &query)
            .items
            .iter()
            .map(|p| p.id.get())
            .collect();
        assert_eq!(ids, vec![9, 2]);
    }

    #[test]
    fn test_price_filter_is_inclusive() {
        let catalog = catalog_of(vec![
            product(1, "Herren", 1000),
            product(2, "Herren", 3000),
            product(3, "Herren", 3001),
        ]);
        let range = PriceRange::new(
            Money::new(1000, Currency::EUR),
            Money::new(3000, Currency::EUR),
        )
        .unwrap();
        let query = BrowseQuery::new().with_price_range(range);
        let ids: Vec<u64> = browse(&catalog, &query)
            .items
            .iter()
            .map(|p| p.id.get())
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_price_filter_applies_after_new_arrivals() {
        let catalog = catalog_of(vec![
            product(1, "Herren", 500),
            product(2, "Herren", 15_000),
            product(3, "Herren", 500),
        ]);
        let range = PriceRange::new(
            Money::new(0, Currency::EUR),
            Money::new(1000, Currency::EUR),
        )
        .unwrap();
        let query = BrowseQuery::new()
            .with_category(CategoryFilter::New)
            .with_price_range(range);
        let ids: Vec<u64> = browse(&catalog, &query)
            .items
            .iter()
            .map(|p| p.id.get())
            .collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_price_range_validation() {
        assert!(PriceRange::from_units(0.0, 200.0).is_ok());
        assert!(PriceRange::from_units(10.0, 20.0).is_ok());
        assert!(matches!(
            PriceRange::from_units(50.0, 40.0),
            Err(CommerceError::InvalidPriceRange { .. })
        ));
        assert!(matches!(
            PriceRange::from_units(50.0, 55.0),
            Err(CommerceError::InvalidPriceRange { .. })
        ));
        assert!(matches!(
            PriceRange::from_units(0.0, 250.0),
            Err(CommerceError::PriceRangeOutOfBounds { .. })
        ));
        assert!(matches!(
            PriceRange::new(
                Money::new(-100, Currency::EUR),
                Money::new(5000, Currency::EUR)
            ),
            Err(CommerceError::PriceRangeOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_changing_filters_resets_page() {
        let query = BrowseQuery::new().with_page(4);
        assert_eq!(query.page(), 4);

        let query = query.with_category(CategoryFilter::Sale);
        assert_eq!(query.page(), 1);

        let query = query.with_page(3).with_price_range(PriceRange::default());
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn test_pagination_counts() {
        let p = Pagination::new(2, 12, 45);
        assert_eq!(p.total_pages, 4);
        assert_eq!(p.offset(), 12);
        assert!(p.has_next());
        assert!(p.has_prev());
    }

    #[test]
    fn test_pagination_empty_result() {
        let p = Pagination::new(1, 12, 0);
        assert_eq!(p.total_pages, 0);
        assert_eq!(p.page, 1);
        assert!(!p.has_next());
        assert!(!p.has_prev());
        assert!(p.entries().is_empty());
    }

    #[test]
    fn test_page_past_end_is_clamped() {
        let catalog = catalog_of((1..=30).map(|i| product(i, "Herren", 2000)).collect());
        let query = BrowseQuery::new().with_page(99);
        let page = browse(&catalog, &query);
        assert_eq!(page.pagination.page, 3);
        assert_eq!(page.items.len(), 6);
    }

    #[test]
    fn test_pager_lists_all_when_short() {
        let p = Pagination::new(2, 12, 50);
        assert_eq!(
            p.entries(),
            vec![
                PageEntry::Page(1),
                PageEntry::Page(2),
                PageEntry::Page(3),
                PageEntry::Page(4),
                PageEntry::Page(5)
            ]
        );
    }

    #[test]
    fn test_pager_near_start() {
        let p = Pagination::new(2, 12, 120);
        assert_eq!(
            p.entries(),
            vec![
                PageEntry::Page(1),
                PageEntry::Page(2),
                PageEntry::Page(3),
                PageEntry::Page(4),
                PageEntry::Ellipsis,
                PageEntry::Page(10)
            ]
        );
    }

    #[test]
    fn test_pager_near_end() {
        let p = Pagination::new(9, 12, 120);
        assert_eq!(
            p.entries(),
            vec![
                PageEntry::Page(1),
                PageEntry::Ellipsis,
                PageEntry::Page(7),
                PageEntry::Page(8),
                PageEntry::Page(9),
                PageEntry::Page(10)
            ]
        );
    }

    #[test]
    fn test_pager_in_the_middle() {
        let p = Pagination::new(5, 12, 120);
        assert_eq!(
            p.entries(),
            vec![
                PageEntry::Page(1),
                PageEntry::Ellipsis,
                PageEntry::Page(4),
                PageEntry::Page(5),
                PageEntry::Page(6),
                PageEntry::Ellipsis,
                PageEntry::Page(10)
            ]
        );
    }

    #[test]
    fn test_full_run_over_category_page_three() {
        let catalog = catalog_of((1..=25).map(|i| product(i, "Herren", 2000)).collect());
        let query = BrowseQuery::new()
            .with_category(CategoryFilter::from_label("Herren"))
            .with_page(3);
        let page = browse(&catalog, &query);
        assert_eq!(page.pagination.total, 25);
        assert_eq!(page.pagination.total_pages, 3);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id.get(), 25);
    }
}
