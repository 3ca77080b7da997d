use diesel::prelude::*;

use crate::domain::category::{Category as DomainCategory, NewCategory as DomainNewCategory};
use crate::domain::types::{CategoryId, CategoryName, CategorySlug, TypeConstraintError};

/// Diesel model representing the `categories` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::categories)]
pub struct Category {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub parent_id: Option<i32>,
}

/// Insertable form of [`Category`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::categories)]
pub struct NewCategory {
    pub slug: String,
    pub name: String,
    pub parent_id: Option<i32>,
}

impl TryFrom<Category> for DomainCategory {
    type Error = TypeConstraintError;

    fn try_from(category: Category) -> Result<Self, Self::Error> {
        Ok(Self {
            id: category.id.try_into()?,
            slug: CategorySlug::new(&category.slug)?,
            name: CategoryName::new(category.name)?,
            parent_id: category.parent_id.map(CategoryId::new).transpose()?,
        })
    }
}

impl From<DomainNewCategory> for NewCategory {
    fn from(category: DomainNewCategory) -> Self {
        Self {
            slug: category.slug.into_inner(),
            name: category.name.into_inner(),
            parent_id: category.parent_id.map(CategoryId::get),
        }
    }
}
