use diesel::prelude::*;
use pushkind_common::repository::errors::RepositoryResult;

use crate::domain::category::{Category, NewCategory};
use crate::domain::types::CategoryId;
use crate::models::category::{Category as DbCategory, NewCategory as DbNewCategory};
use crate::repository::{CategoryReader, CategoryWriter, DieselRepository};

impl CategoryReader for DieselRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let rows = categories::table
            .order(categories::id.asc())
            .load::<DbCategory>(&mut conn)?;

        // A malformed row must not hide the rest of the tree.
        let items = rows
            .into_iter()
            .filter_map(|row| {
                let id = row.id;
                match Category::try_from(row) {
                    Ok(category) => Some(category),
                    Err(e) => {
                        log::warn!("Skipping category {id}: {e}");
                        None
                    }
                }
            })
            .collect();

        Ok(items)
    }

    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .filter(categories::id.eq(id.get()))
            .first::<DbCategory>(&mut conn)
            .optional()?;

        let category = category.map(TryInto::try_into).transpose()?;
        Ok(category)
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<usize> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let db_category: DbNewCategory = category.clone().into();

        let affected = diesel::insert_into(categories::table)
            .values(db_category)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let affected = diesel::delete(categories::table.filter(categories::id.eq(id.get())))
            .execute(&mut conn)?;

        Ok(affected)
    }
}
