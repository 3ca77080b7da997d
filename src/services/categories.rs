use crate::domain::hierarchy::build_hierarchy;
use crate::dto::categories::CategoryTreeDto;
use crate::repository::CategoryReader;

use super::{ServiceError, ServiceResult};

/// Loads the category snapshot and shapes it for the sidebar: every root with
/// its direct subcategories.
pub fn show_category_tree<R>(repo: &R) -> ServiceResult<Vec<CategoryTreeDto>>
where
    R: CategoryReader,
{
    match repo.list_categories() {
        Ok(categories) => Ok(CategoryTreeDto::from_hierarchy(&build_hierarchy(
            &categories,
        ))),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(ServiceError::Internal)
        }
    }
}
