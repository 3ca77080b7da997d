use serde::Serialize;

use crate::domain::hierarchy::build_hierarchy;
use crate::domain::listing::apply_filter;
use crate::dto::categories::CategoryTreeDto;
use crate::dto::products::ProductDto;
use crate::forms::catalog::CatalogQueryPayload;
use crate::repository::{CategoryReader, ProductListQuery, ProductReader};

use super::{ServiceError, ServiceResult};

/// Everything needed to render the catalog page.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub categories: Vec<CategoryTreeDto>,
    pub products: Vec<ProductDto>,
}

/// Core business logic for the catalog listing.
///
/// Loads the category snapshot and the active products, indexes the category
/// tree and runs the filter/sort engine with the requested state. Repository
/// errors are logged and reported as `ServiceError::Internal`.
pub fn show_catalog<R>(payload: CatalogQueryPayload, repo: &R) -> ServiceResult<CatalogView>
where
    R: CategoryReader + ProductReader,
{
    let categories = match repo.list_categories() {
        Ok(categories) => categories,
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let products = match repo.list_products(ProductListQuery::default().active()) {
        Ok(products) => products,
        Err(e) => {
            log::error!("Failed to list products: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let hierarchy = build_hierarchy(&categories);
    let listing = apply_filter(&products, &payload.filter, &hierarchy);

    log::debug!(
        "Catalog listing: {} of {} active products (search={:?}, category={:?}, sort={:?})",
        listing.len(),
        products.len(),
        payload.filter.search_query,
        payload.filter.selected_category,
        payload.filter.selected_sort,
    );

    Ok(CatalogView {
        categories: CategoryTreeDto::from_hierarchy(&hierarchy),
        products: listing.into_iter().map(ProductDto::from).collect(),
    })
}
