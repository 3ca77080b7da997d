use pushkind_common::db::{DbConnection, DbPool};
use pushkind_common::repository::errors::RepositoryResult;

use crate::domain::category::{Category, NewCategory};
use crate::domain::product::{NewProduct, Product};
use crate::domain::types::{CategoryId, ProductId};

pub mod category;
pub mod product;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between callers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters used when listing products.
///
/// Category filtering belongs to the catalog engine, which compares
/// normalized slugs.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Only return products flagged as active.
    pub active_only: bool,
}

impl ProductListQuery {
    pub fn active(mut self) -> Self {
        self.active_only = true;
        self
    }
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// Load the full category snapshot.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Persist a new category.
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<usize>;
    /// Delete a category. Children keep their now dangling parent reference.
    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize>;
}

/// Read-only operations for product entities.
pub trait ProductReader {
    /// List products matching the supplied query parameters.
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
}

/// Write operations for product entities.
pub trait ProductWriter {
    /// Persist new products.
    fn create_products(&self, products: &[NewProduct]) -> RepositoryResult<usize>;
    /// Activate or deactivate a product.
    fn set_product_active(&self, id: ProductId, is_active: bool) -> RepositoryResult<usize>;
}
