//! Repository for the `categories` table.

use catalog_core::pagination::Pagination;
use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::{Category, CreateCategory, UpdateCategory};
use crate::repositories::contains_pattern;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let query = format!("INSERT INTO categories (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a category by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List categories in insertion order, optionally filtered by a
    /// case-insensitive name substring.
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        page: Pagination,
    ) -> Result<Vec<Category>, sqlx::Error> {
        match search {
            Some(search) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM categories
                     WHERE name ILIKE $1
                     ORDER BY id
                     LIMIT $2 OFFSET $3"
                );
                sqlx::query_as::<_, Category>(&query)
                    .bind(contains_pattern(search))
                    .bind(page.limit)
                    .bind(page.offset())
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query =
                    format!("SELECT {COLUMNS} FROM categories ORDER BY id LIMIT $1 OFFSET $2");
                sqlx::query_as::<_, Category>(&query)
                    .bind(page.limit)
                    .bind(page.offset())
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Update a category. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCategory,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET
                name = COALESCE($2, name)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(input.name.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Delete a category by ID, returning the removed row.
    ///
    /// Returns `None` if no row with the given `id` exists. Fails with a
    /// foreign key violation while products still reference the category.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("DELETE FROM categories WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
