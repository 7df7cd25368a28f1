//! Category entity model and DTOs.

use async_graphql::{InputObject, SimpleObject};
use catalog_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, PartialEq, FromRow, SimpleObject)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The slice of a category embedded into product results: id and name only.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct CategoryRef {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a new category.
#[derive(Debug, Clone, InputObject)]
#[graphql(name = "CreateCategoryInput")]
pub struct CreateCategory {
    pub name: String,
}

/// DTO for updating an existing category. All fields are optional.
#[derive(Debug, Clone, Default)]
pub struct UpdateCategory {
    pub name: Option<String>,
}
