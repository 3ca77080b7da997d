use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    CategorySlug, CommentCount, ProductDescription, ProductId, ProductPrice, ProductTitle,
    Temperature,
};

/// A deal listed in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub title: ProductTitle,
    pub description: Option<ProductDescription>,
    /// Slug of the category the deal is filed under. Unknown slugs are kept
    /// as-is and simply never match a category filter.
    pub category: Option<CategorySlug>,
    pub price: Option<ProductPrice>,
    pub temperature: Temperature,
    pub comments_count: CommentCount,
    /// `None` when the stored timestamp could not be parsed.
    pub created_at: Option<DateTime<Utc>>,
    pub is_active: bool,
}

/// Information required to create a new [`Product`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProduct {
    pub title: ProductTitle,
    pub description: Option<ProductDescription>,
    pub category: Option<CategorySlug>,
    pub price: Option<ProductPrice>,
    pub temperature: Temperature,
    pub comments_count: CommentCount,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}
