use diesel::prelude::*;

use crate::domain::product::{NewProduct as DomainNewProduct, Product as DomainProduct};
use crate::domain::types::{
    CategorySlug, CommentCount, ProductDescription, ProductPrice, ProductTitle, Temperature,
    TypeConstraintError, parse_timestamp,
};

/// Diesel model representing the `products` table.
///
/// Timestamps are stored as text exactly as the upstream store emits them and
/// are parsed on conversion to the domain type.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub price: Option<f64>,
    pub temperature: i32,
    pub comments_count: i32,
    pub is_active: bool,
    pub created_at: String,
}

/// Insertable form of [`Product`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct {
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub price: Option<f64>,
    pub temperature: i32,
    pub comments_count: i32,
    pub is_active: bool,
    pub created_at: String,
}

impl TryFrom<Product> for DomainProduct {
    type Error = TypeConstraintError;

    fn try_from(product: Product) -> Result<Self, Self::Error> {
        Ok(Self {
            id: product.id.try_into()?,
            title: ProductTitle::new(product.title)?,
            // Blank descriptions and slugs are treated as absent.
            description: product.description.and_then(|d| ProductDescription::new(d).ok()),
            category: CategorySlug::parse_optional(&product.category),
            price: product.price.map(ProductPrice::new).transpose()?,
            temperature: Temperature::new(product.temperature),
            comments_count: CommentCount::new(product.comments_count)?,
            created_at: parse_timestamp(&product.created_at),
            is_active: product.is_active,
        })
    }
}

impl From<DomainNewProduct> for NewProduct {
    fn from(product: DomainNewProduct) -> Self {
        Self {
            title: product.title.into_inner(),
            description: product.description.map(ProductDescription::into_inner),
            category: product
                .category
                .map(|slug| slug.into_inner())
                .unwrap_or_default(),
            price: product.price.map(ProductPrice::get),
            temperature: product.temperature.get(),
            comments_count: product.comments_count.get(),
            is_active: product.is_active,
            created_at: product.created_at.to_rfc3339(),
        }
    }
}
