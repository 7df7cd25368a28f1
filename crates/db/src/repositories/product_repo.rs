//! Repository for the `products` table.
//!
//! Every query returns rows joined with the parent category's name so the
//! caller can embed `{ id, name }` of the category without a second trip.

use catalog_core::pagination::Pagination;
use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::{CreateProduct, Product, ProductFilter, UpdateProduct};
use crate::repositories::contains_pattern;

/// Product columns, qualified with the `p` alias, plus the joined category name.
const COLUMNS: &str = "\
    p.id, p.name, p.color, p.price, p.category_id, \
    p.created_at, p.updated_at, \
    c.name AS category_name";

/// Provides CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the created row.
    ///
    /// Does not check the category; a dangling `category_id` is rejected by
    /// the `fk_products_category_id` constraint.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "WITH inserted AS (
                INSERT INTO products (name, color, price, category_id)
                VALUES ($1, $2, $3, $4)
                RETURNING *
             )
             SELECT {COLUMNS}
             FROM inserted p
             LEFT JOIN categories c ON c.id = p.category_id"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(input.color.as_deref())
            .bind(input.price)
            .bind(input.category_id)
            .fetch_one(pool)
            .await
    }

    /// Find a product by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS}
             FROM products p
             LEFT JOIN categories c ON c.id = p.category_id
             WHERE p.id = $1"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List products matching every supplied filter, in insertion order.
    pub async fn list(
        pool: &PgPool,
        filter: &ProductFilter,
        page: Pagination,
    ) -> Result<Vec<Product>, sqlx::Error> {
        // Build dynamic WHERE clauses.
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if filter.search.is_some() {
            conditions.push(format!("p.name ILIKE ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.category_id.is_some() {
            conditions.push(format!("p.category_id = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.color.is_some() {
            conditions.push(format!("p.color = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.price_from.is_some() {
            conditions.push(format!("p.price >= ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.price_to.is_some() {
            conditions.push(format!("p.price <= ${bind_idx}"));
            bind_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {COLUMNS}
             FROM products p
             LEFT JOIN categories c ON c.id = p.category_id
             {where_clause}
             ORDER BY p.id
             LIMIT ${bind_idx} OFFSET ${next_idx}",
            next_idx = bind_idx + 1,
        );

        let mut q = sqlx::query_as::<_, Product>(&query);

        // Bind dynamic parameters in the same order the clauses were pushed.
        if let Some(ref search) = filter.search {
            q = q.bind(contains_pattern(search));
        }
        if let Some(category_id) = filter.category_id {
            q = q.bind(category_id);
        }
        if let Some(ref color) = filter.color {
            q = q.bind(color);
        }
        if let Some(price_from) = filter.price_from {
            q = q.bind(price_from);
        }
        if let Some(price_to) = filter.price_to {
            q = q.bind(price_to);
        }

        q = q.bind(page.limit).bind(page.offset());
        q.fetch_all(pool).await
    }

    /// Update a product. Only supplied fields in `input` are applied; an
    /// explicit null clears `color` or `price`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "WITH updated AS (
                UPDATE products SET
                    name = COALESCE($2, name),
                    color = CASE WHEN $6 THEN $3 ELSE color END,
                    price = CASE WHEN $7 THEN $4 ELSE price END,
                    category_id = COALESCE($5, category_id)
                WHERE id = $1
                RETURNING *
             )
             SELECT {COLUMNS}
             FROM updated p
             LEFT JOIN categories c ON c.id = p.category_id"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(input.name.as_deref())
            .bind(input.color.value().map(String::as_str))
            .bind(input.price.value().copied())
            .bind(input.category_id)
            .bind(!input.color.is_undefined())
            .bind(!input.price.is_undefined())
            .fetch_optional(pool)
            .await
    }

    /// Delete a product by ID, returning the removed row.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "WITH deleted AS (
                DELETE FROM products WHERE id = $1 RETURNING *
             )
             SELECT {COLUMNS}
             FROM deleted p
             LEFT JOIN categories c ON c.id = p.category_id"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
