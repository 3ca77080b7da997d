use serde::Serialize;

use crate::domain::category::Category;
use crate::domain::hierarchy::CategoryHierarchy;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDto {
    pub id: i32,
    pub slug: String,
    pub name: String,
}

impl From<&Category> for CategoryDto {
    fn from(value: &Category) -> Self {
        Self {
            id: value.id.get(),
            slug: value.slug.as_str().to_string(),
            name: value.name.as_str().to_string(),
        }
    }
}

/// Sidebar entry: a root category and its direct subcategories.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTreeDto {
    pub category: CategoryDto,
    pub children: Vec<CategoryDto>,
}

impl CategoryTreeDto {
    /// One entry per root, in the order the roots were loaded.
    pub fn from_hierarchy(hierarchy: &CategoryHierarchy) -> Vec<Self> {
        hierarchy
            .root_categories
            .iter()
            .map(|root| Self {
                category: root.into(),
                children: hierarchy
                    .children(root.id)
                    .iter()
                    .map(CategoryDto::from)
                    .collect(),
            })
            .collect()
    }
}
