use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CategoryName, CategorySlug};

/// A node of the catalog's category tree.
///
/// Categories without a `parent_id` are roots. Products reference categories
/// by [`CategorySlug`], never by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub slug: CategorySlug,
    pub name: CategoryName,
    pub parent_id: Option<CategoryId>,
}

impl Category {
    /// Whether this category sits at the top of the tree.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Data required to insert a new [`Category`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCategory {
    pub slug: CategorySlug,
    pub name: CategoryName,
    pub parent_id: Option<CategoryId>,
}
