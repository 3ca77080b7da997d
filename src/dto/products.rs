use serde::Serialize;

use crate::domain::product::Product;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub temperature: i32,
    pub comments_count: i32,
    /// RFC 3339, or `None` when the stored value was unparseable.
    pub created_at: Option<String>,
}

impl From<Product> for ProductDto {
    fn from(value: Product) -> Self {
        Self {
            id: value.id.get(),
            title: value.title.into_inner(),
            description: value.description.map(|d| d.into_inner()),
            category: value.category.map(|c| c.into_inner()),
            price: value.price.map(|p| p.get()),
            temperature: value.temperature.get(),
            comments_count: value.comments_count.get(),
            created_at: value.created_at.map(|ts| ts.to_rfc3339()),
        }
    }
}
