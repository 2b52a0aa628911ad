//! Integration tests for the product list filter laws

use catalog::prelude::*;
use rust_decimal::Decimal;

fn product(name: &str, description: &str, category: &str) -> ProductRecord {
    ProductRecord {
        id: ProductId::new(),
        name: name.to_string(),
        description: description.to_string(),
        price: Decimal::new(1999, 2),
        category: category.to_string(),
        image_url: None,
    }
}

fn lists() -> Vec<Vec<ProductRecord>> {
    vec![
        Vec::new(),
        vec![product("Widget", "A widget", "Maison")],
        vec![
            product("Roman", "Un roman policier", "Livres"),
            product("Lampe", "Lampe de chevet", "Maison"),
            product("Casque", "Casque audio", "Électronique"),
            product("T-shirt", "Coton bio", "Vêtements"),
            product("Atlas", "Cartes du MONDE", "livres"),
            product("Veste", "Veste imperméable", "VÊTEMENTS"),
        ],
    ]
}

const QUERIES: [&str; 7] = ["", "  ", "a", "MONDE", "lampe de", "zzz", "é"];

const SELECTIONS: [Option<&str>; 6] = [
    None,
    Some(ALL_CATEGORIES),
    Some("livres"),
    Some("Vêtements"),
    Some("Maison"),
    Some("Jardin"),
];

fn ids(products: impl IntoIterator<Item = ProductRecord>) -> Vec<ProductId> {
    products.into_iter().map(|product| product.id).collect()
}

#[test]
fn clearing_both_filters_restores_the_full_list() {
    for list in lists() {
        for category in SELECTIONS {
            for query in QUERIES {
                let mut filter = ProductFilter::with_products(list.clone());

                filter.set_category(category);
                filter.set_query(query);
                filter.set_query("");
                filter.set_category(None);

                assert_eq!(filter.to_visible(), list, "filters should be fully cleared");
            }
        }
    }
}

#[test]
fn query_results_are_a_matching_subset() {
    for list in lists() {
        for query in QUERIES.iter().filter(|query| !query.trim().is_empty()) {
            let mut filter = ProductFilter::with_products(list.clone());

            filter.set_query(query);

            let needle = query.to_lowercase();

            for product in filter.visible() {
                assert!(list.contains(product), "visible product must come from the list");
                assert!(
                    product.name.to_lowercase().contains(&needle)
                        || product.description.to_lowercase().contains(&needle),
                    "{} should match {query:?}",
                    product.name
                );
            }
        }
    }
}

#[test]
fn category_and_query_compose_as_intersection() {
    for list in lists() {
        for category in SELECTIONS {
            for query in QUERIES {
                let mut combined = ProductFilter::with_products(list.clone());
                combined.set_category(category);
                combined.set_query(query);

                let mut by_category = ProductFilter::with_products(list.clone());
                by_category.set_category(category);

                let mut by_query = ProductFilter::with_products(list.clone());
                by_query.set_query(query);

                let expected: Vec<ProductId> = list
                    .iter()
                    .filter(|product| by_category.matches(product) && by_query.matches(product))
                    .map(|product| product.id)
                    .collect();

                assert_eq!(ids(combined.to_visible()), expected);
            }
        }
    }
}

#[test]
fn visible_order_follows_the_full_list() {
    let list = lists().pop().unwrap_or_default();
    let mut filter = ProductFilter::with_products(list.clone());

    filter.set_query("e");

    let positions: Vec<usize> = filter
        .visible()
        .filter_map(|product| list.iter().position(|candidate| candidate.id == product.id))
        .collect();

    assert!(
        positions.windows(2).all(|pair| pair.first() < pair.last()),
        "visible products should keep list order"
    );
}

#[test]
fn category_selection_ignores_case() {
    let livres = product("Roman", "Un roman", "Livres");
    let maison = product("Lampe", "Une lampe", "Maison");
    let mut filter = ProductFilter::with_products(vec![livres.clone(), maison]);

    filter.set_category(Some("livres"));

    assert_eq!(filter.to_visible(), vec![livres]);
}

#[test]
fn unmatched_category_is_an_empty_result_not_an_error() {
    let mut filter = ProductFilter::with_products(lists().pop().unwrap_or_default());

    filter.set_category(Some("Jardin"));

    assert_eq!(filter.visible().count(), 0);
    assert!(filter.is_filtered());
}
