//! Helpers for integration tests.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use deals_catalog::domain::category::NewCategory;
use deals_catalog::domain::product::NewProduct;
use deals_catalog::domain::types::{
    CategoryId, CategoryName, CategorySlug, CommentCount, ProductTitle, Temperature,
};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use pushkind_common::db::{DbPool, establish_connection_pool};
use tempfile::NamedTempFile;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Temporary SQLite catalog used in integration tests.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

pub fn new_category(slug: &str, parent_id: Option<CategoryId>) -> NewCategory {
    NewCategory {
        slug: CategorySlug::new(slug).expect("valid slug"),
        name: CategoryName::new(slug).expect("valid name"),
        parent_id,
    }
}

pub fn new_product(
    title: &str,
    category: &str,
    temperature: i32,
    comments: i32,
    created_at: &str,
) -> NewProduct {
    NewProduct {
        title: ProductTitle::new(title).expect("valid title"),
        description: None,
        category: CategorySlug::parse_optional(category),
        price: None,
        temperature: Temperature::new(temperature),
        comments_count: CommentCount::new(comments).expect("valid count"),
        created_at: created_at
            .parse::<DateTime<Utc>>()
            .expect("valid RFC 3339 timestamp"),
        is_active: true,
    }
}
