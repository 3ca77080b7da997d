use diesel::prelude::*;
use pushkind_common::repository::errors::RepositoryResult;

use crate::domain::product::{NewProduct, Product};
use crate::domain::types::ProductId;
use crate::models::product::{NewProduct as DbNewProduct, Product as DbProduct};
use crate::repository::{DieselRepository, ProductListQuery, ProductReader, ProductWriter};

impl ProductReader for DieselRepository {
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let mut items = products::table.into_boxed::<diesel::sqlite::Sqlite>();
        if query.active_only {
            items = items.filter(products::is_active.eq(true));
        }

        let rows = items
            .order(products::id.asc())
            .load::<DbProduct>(&mut conn)?;

        let items = rows
            .into_iter()
            .filter_map(|row| {
                let id = row.id;
                match Product::try_from(row) {
                    Ok(product) => Some(product),
                    Err(e) => {
                        log::warn!("Skipping product {id}: {e}");
                        None
                    }
                }
            })
            .collect();

        Ok(items)
    }
}

impl ProductWriter for DieselRepository {
    fn create_products(&self, products: &[NewProduct]) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let rows: Vec<DbNewProduct> = products.iter().cloned().map(Into::into).collect();

        let affected = diesel::insert_into(products::table)
            .values(&rows)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn set_product_active(&self, id: ProductId, is_active: bool) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let affected = diesel::update(products::table.filter(products::id.eq(id.get())))
            .set(products::is_active.eq(is_active))
            .execute(&mut conn)?;

        Ok(affected)
    }
}
