//! Product list filtering
//!
//! [`ProductFilter`] owns the full product list fetched from a store and derives the visible
//! subset from an optional category and a free-text query. Both filters are intersective and the
//! visible sequence keeps the order of the full list.

use crate::products::ProductRecord;

/// Category label that stands for "no category filter".
pub const ALL_CATEGORIES: &str = "Tous";

/// Category labels offered to the user, the "all" sentinel last.
pub const CATEGORIES: [&str; 5] = ["Électronique", "Vêtements", "Livres", "Maison", ALL_CATEGORIES];

/// Whether `label` is the "all categories" sentinel.
pub fn is_all_categories(label: &str) -> bool {
    label.trim().to_lowercase() == ALL_CATEGORIES.to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Criterion {
    label: String,
    folded: String,
}

impl Criterion {
    fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            folded: label.to_lowercase(),
        }
    }
}

/// Client-side category and text filter over a fetched product list.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    products: Vec<ProductRecord>,
    category: Option<Criterion>,
    query: Option<Criterion>,
}

impl ProductFilter {
    /// Create an empty filter with no criteria.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter over `products` with no criteria.
    #[must_use]
    pub fn with_products(products: Vec<ProductRecord>) -> Self {
        Self {
            products,
            ..Self::default()
        }
    }

    /// Replace the full list, keeping the current category and query.
    pub fn set_products(&mut self, products: Vec<ProductRecord>) {
        self.products = products;
    }

    /// Restrict to a category, compared case-insensitively.
    ///
    /// `None`, a blank label or the [`ALL_CATEGORIES`] sentinel clears the category filter.
    pub fn set_category(&mut self, category: Option<&str>) {
        self.category = category
            .filter(|label| !label.trim().is_empty() && !is_all_categories(label))
            .map(Criterion::new);
    }

    /// Restrict to products whose name or description contains `query`, ignoring case.
    ///
    /// Blank queries clear the text filter.
    pub fn set_query(&mut self, query: &str) {
        self.query = Some(query)
            .filter(|query| !query.trim().is_empty())
            .map(Criterion::new);
    }

    /// Clear both the category and the query.
    pub fn clear(&mut self) {
        self.category = None;
        self.query = None;
    }

    /// The full, unfiltered list.
    #[must_use]
    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    /// Selected category, as given by the caller.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_ref().map(|criterion| criterion.label.as_str())
    }

    /// Active query, as given by the caller.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_ref().map(|criterion| criterion.label.as_str())
    }

    /// Whether a category or query is active.
    #[must_use]
    pub fn is_filtered(&self) -> bool {
        self.category.is_some() || self.query.is_some()
    }

    /// Whether `product` passes both the category and the text filter.
    #[must_use]
    pub fn matches(&self, product: &ProductRecord) -> bool {
        self.matches_category(product) && self.matches_query(product)
    }

    /// Products passing both filters, in full-list order.
    pub fn visible(&self) -> impl Iterator<Item = &ProductRecord> {
        self.products
            .iter()
            .filter(|product| self.matches(product))
    }

    /// Owned copy of [`ProductFilter::visible`].
    #[must_use]
    pub fn to_visible(&self) -> Vec<ProductRecord> {
        self.visible().cloned().collect()
    }

    fn matches_category(&self, product: &ProductRecord) -> bool {
        self.category
            .as_ref()
            .is_none_or(|category| product.category.to_lowercase() == category.folded)
    }

    fn matches_query(&self, product: &ProductRecord) -> bool {
        self.query.as_ref().is_none_or(|query| {
            product.name.to_lowercase().contains(&query.folded)
                || product.description.to_lowercase().contains(&query.folded)
        })
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::products::ProductId;

    use super::*;

    fn product(name: &str, description: &str, category: &str) -> ProductRecord {
        ProductRecord {
            id: ProductId::new(),
            name: name.to_string(),
            description: description.to_string(),
            price: Decimal::ONE,
            category: category.to_string(),
            image_url: None,
        }
    }

    fn catalog() -> Vec<ProductRecord> {
        vec![
            product("Roman", "Un roman policier", "Livres"),
            product("Lampe", "Lampe de chevet", "Maison"),
            product("Casque", "Casque audio sans fil", "Électronique"),
            product("Livre de cuisine", "Recettes", "Livres"),
        ]
    }

    fn names(filter: &ProductFilter) -> Vec<&str> {
        filter.visible().map(|product| product.name.as_str()).collect()
    }

    #[test]
    fn no_criteria_shows_everything_in_order() {
        let filter = ProductFilter::with_products(catalog());

        assert_eq!(names(&filter), ["Roman", "Lampe", "Casque", "Livre de cuisine"]);
        assert!(!filter.is_filtered());
    }

    #[test]
    fn category_comparison_ignores_case() {
        let mut filter = ProductFilter::with_products(catalog());

        filter.set_category(Some("livres"));

        assert_eq!(names(&filter), ["Roman", "Livre de cuisine"]);
        assert_eq!(filter.category(), Some("livres"));
    }

    #[test]
    fn blank_category_clears_the_filter() {
        let mut filter = ProductFilter::with_products(catalog());

        for blank in ["", "   "] {
            filter.set_category(Some("Livres"));
            filter.set_category(Some(blank));

            assert_eq!(filter.category(), None);
            assert_eq!(names(&filter), ["Roman", "Lampe", "Casque", "Livre de cuisine"]);
            assert!(!filter.is_filtered());
        }
    }

    #[test]
    fn category_is_exact_not_substring() {
        let mut filter = ProductFilter::with_products(catalog());

        filter.set_category(Some("Livre"));

        assert_eq!(filter.visible().count(), 0);
    }

    #[test]
    fn sentinel_and_none_clear_the_category() {
        let mut filter = ProductFilter::with_products(catalog());

        filter.set_category(Some("Maison"));
        filter.set_category(Some(ALL_CATEGORIES));

        assert_eq!(filter.category(), None);
        assert_eq!(filter.visible().count(), 4);

        filter.set_category(Some("Maison"));
        filter.set_category(None);

        assert_eq!(filter.visible().count(), 4);
    }

    #[test]
    fn query_matches_name_or_description_ignoring_case() {
        let mut filter = ProductFilter::with_products(catalog());

        filter.set_query("LAMPE");
        assert_eq!(names(&filter), ["Lampe"]);

        filter.set_query("audio");
        assert_eq!(names(&filter), ["Casque"]);
    }

    #[test]
    fn blank_query_clears_text_filter() {
        let mut filter = ProductFilter::with_products(catalog());

        filter.set_query("roman");
        filter.set_query("   ");

        assert_eq!(filter.query(), None);
        assert_eq!(filter.visible().count(), 4);
    }

    #[test]
    fn category_and_query_compose() {
        let mut filter = ProductFilter::with_products(catalog());

        filter.set_category(Some("Livres"));
        filter.set_query("re");

        assert_eq!(names(&filter), ["Livre de cuisine"]);
    }

    #[test]
    fn replacing_products_keeps_criteria() {
        let mut filter = ProductFilter::with_products(catalog());

        filter.set_category(Some("Maison"));
        filter.set_products(vec![
            product("Chaise", "Chaise en bois", "Maison"),
            product("Stylo", "Stylo bille", "Bureau"),
        ]);

        assert_eq!(names(&filter), ["Chaise"]);
    }

    #[test]
    fn empty_list_stays_empty_whatever_the_criteria() {
        let mut filter = ProductFilter::new();

        filter.set_category(Some("Maison"));
        filter.set_query("lampe");

        assert_eq!(filter.visible().count(), 0);
    }

    #[test]
    fn sentinel_is_recognised_in_any_case() {
        assert!(is_all_categories("Tous"));
        assert!(is_all_categories("tous"));
        assert!(!is_all_categories("Maison"));
    }
}
