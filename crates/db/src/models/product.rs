//! Product entity model, DTOs and list filter.

use async_graphql::{ComplexObject, InputObject, MaybeUndefined, SimpleObject};
use catalog_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use crate::models::category::CategoryRef;

/// A row from the `products` table, joined with its category's name.
#[derive(Debug, Clone, PartialEq, FromRow, SimpleObject)]
#[graphql(complex)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub color: Option<String>,
    pub price: Option<f64>,
    pub category_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// `None` only if the category row vanished after the product was read.
    #[graphql(skip)]
    pub category_name: Option<String>,
}

impl Product {
    /// The parent category as `{ id, name }`.
    pub fn category_ref(&self) -> Option<CategoryRef> {
        self.category_name.as_ref().map(|name| CategoryRef {
            id: self.category_id,
            name: name.clone(),
        })
    }
}

#[ComplexObject]
impl Product {
    /// Parent category, restricted to its id and name.
    async fn category(&self) -> Option<CategoryRef> {
        self.category_ref()
    }
}

/// DTO for creating a new product.
#[derive(Debug, Clone, InputObject)]
#[graphql(name = "CreateProductInput")]
pub struct CreateProduct {
    pub name: String,
    pub color: Option<String>,
    pub price: Option<f64>,
    pub category_id: DbId,
}

/// DTO for updating an existing product. All fields are optional.
///
/// The nullable columns distinguish "leave unchanged" (`Undefined`) from
/// "clear" (`Null`). `category_id` is applied as given; callers decide
/// whether to check it.
#[derive(Debug, Clone, Default)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub color: MaybeUndefined<String>,
    pub price: MaybeUndefined<f64>,
    pub category_id: Option<DbId>,
}

/// Optional filters for product listing. Every supplied field narrows the
/// result; omitted fields impose no constraint.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category_id: Option<DbId>,
    /// Case-insensitive substring of the product name.
    pub search: Option<String>,
    /// Exact color match.
    pub color: Option<String>,
    /// Inclusive lower price bound.
    pub price_from: Option<f64>,
    /// Inclusive upper price bound.
    pub price_to: Option<f64>,
}
