use serde::{Deserialize, Serialize};

use crate::domain::types::{CategorySlug, SortKey};

/// User-driven listing state held by the caller between renders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterState {
    /// Free text matched against title, description and category slug.
    pub search_query: String,
    /// `None` shows every category.
    pub selected_category: Option<CategorySlug>,
    /// `None` keeps the filtered order untouched.
    pub selected_sort: Option<SortKey>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            selected_category: None,
            selected_sort: Some(SortKey::default()),
        }
    }
}

impl FilterState {
    /// Sets the free-text query.
    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    /// Restricts the listing to `slug` (and its subtree when it is a root).
    pub fn category(mut self, slug: CategorySlug) -> Self {
        self.selected_category = Some(slug);
        self
    }

    /// Sets the ordering; `None` keeps filter order.
    pub fn sort(mut self, sort: Option<SortKey>) -> Self {
        self.selected_sort = sort;
        self
    }
}
