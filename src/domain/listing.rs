//! Filtering and ordering of the product listing.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::domain::filter::FilterState;
use crate::domain::hierarchy::CategoryHierarchy;
use crate::domain::product::Product;
use crate::domain::types::{CategorySlug, SortKey};

/// Produces the list of products to display.
///
/// Steps run in a fixed order: text search, category filter, sort. The input
/// slice is never reordered; the result is a fresh vector.
///
/// * Search is a case-insensitive substring match on title, description or
///   category slug. A blank query disables it.
/// * Selecting a root category with descendants keeps products from the whole
///   subtree. Any other selection keeps exact slug matches only.
/// * Sorting is stable. Under [`SortKey::Newest`] products without a valid
///   timestamp go last. `None` keeps the filtered order.
pub fn filter_and_sort(
    products: &[Product],
    search_query: &str,
    selected_category: Option<&CategorySlug>,
    selected_sort: Option<SortKey>,
    hierarchy: &CategoryHierarchy,
) -> Vec<Product> {
    let needle = search_query.trim().to_lowercase();
    let category_filter = selected_category.map(|slug| CategoryFilter::new(slug, hierarchy));

    let mut listing: Vec<Product> = products
        .iter()
        .filter(|p| needle.is_empty() || matches_search(p, &needle))
        .filter(|p| category_filter.as_ref().is_none_or(|f| f.matches(p)))
        .cloned()
        .collect();

    if let Some(sort) = selected_sort {
        listing.sort_by(|a, b| compare(a, b, sort));
    }

    listing
}

/// [`filter_and_sort`] driven by a [`FilterState`].
pub fn apply_filter(
    products: &[Product],
    state: &FilterState,
    hierarchy: &CategoryHierarchy,
) -> Vec<Product> {
    filter_and_sort(
        products,
        &state.search_query,
        state.selected_category.as_ref(),
        state.selected_sort,
        hierarchy,
    )
}

enum CategoryFilter<'a> {
    Subtree(&'a HashSet<CategorySlug>),
    Exact(&'a CategorySlug),
}

impl<'a> CategoryFilter<'a> {
    fn new(selected: &'a CategorySlug, hierarchy: &'a CategoryHierarchy) -> Self {
        match hierarchy.subtree(selected) {
            Some(subtree) if hierarchy.is_aggregating_root(selected) => Self::Subtree(subtree),
            _ => Self::Exact(selected),
        }
    }

    fn matches(&self, product: &Product) -> bool {
        let Some(category) = product.category.as_ref() else {
            return false;
        };
        match self {
            Self::Subtree(subtree) => subtree.contains(category),
            Self::Exact(selected) => category == *selected,
        }
    }
}

fn matches_search(product: &Product, needle: &str) -> bool {
    product.title.to_lowercase().contains(needle)
        || product
            .description
            .as_ref()
            .is_some_and(|d| d.to_lowercase().contains(needle))
        || product
            .category
            .as_ref()
            .is_some_and(|c| c.as_str().contains(needle))
}

fn compare(a: &Product, b: &Product, sort: SortKey) -> Ordering {
    match sort {
        SortKey::Hottest => b.temperature.cmp(&a.temperature),
        // `None < Some(_)`, so reversing puts missing timestamps last.
        SortKey::Newest => b.created_at.cmp(&a.created_at),
        SortKey::Commented => b.comments_count.cmp(&a.comments_count),
    }
}
