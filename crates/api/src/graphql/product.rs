//! Product queries and mutations.

use async_graphql::{InputObject, MaybeUndefined, Object, Result};
use catalog_core::types::DbId;
use catalog_db::models::product::{CreateProduct, Product, ProductFilter, UpdateProduct};

use crate::error::IntoGraphQL;
use crate::services::ProductService;

/// Input for `updateProduct`: the target id plus the fields to replace.
/// An explicit `null` clears `color` or `price`; an omitted field is kept.
#[derive(Debug, InputObject)]
pub struct UpdateProductInput {
    pub id: DbId,
    pub name: Option<String>,
    pub color: MaybeUndefined<String>,
    pub price: MaybeUndefined<f64>,
    pub category_id: Option<DbId>,
}

impl UpdateProductInput {
    fn into_parts(self) -> (DbId, UpdateProduct) {
        (
            self.id,
            UpdateProduct {
                name: self.name,
                color: self.color,
                price: self.price,
                category_id: self.category_id,
            },
        )
    }
}

pub struct ProductQuery {
    service: ProductService,
}

impl ProductQuery {
    pub fn new(service: ProductService) -> Self {
        Self { service }
    }
}

#[Object]
impl ProductQuery {
    /// Page through products. Every supplied argument narrows the result;
    /// price bounds are inclusive.
    async fn products(
        &self,
        category_id: Option<DbId>,
        find_color: Option<String>,
        price_from: Option<f64>,
        price_to: Option<f64>,
        search: Option<String>,
        page: Option<i64>,
        limit: Option<i64>,
    ) -> Result<Vec<Product>> {
        let filter = ProductFilter {
            category_id,
            search,
            color: find_color,
            price_from,
            price_to,
        };
        self.service.find_all(filter, page, limit).await.into_graphql()
    }

    async fn product(&self, id: DbId) -> Result<Product> {
        self.service.find_one(id).await.into_graphql()
    }
}

pub struct ProductMutation {
    service: ProductService,
}

impl ProductMutation {
    pub fn new(service: ProductService) -> Self {
        Self { service }
    }
}

#[Object]
impl ProductMutation {
    /// Create a product. Fails with "Category not found" when `categoryId`
    /// does not reference an existing category.
    async fn create_product(&self, create_product_input: CreateProduct) -> Result<Product> {
        self.service
            .create(create_product_input)
            .await
            .into_graphql()
    }

    /// Replace the supplied fields. `categoryId` is not re-checked against
    /// existing categories.
    async fn update_product(&self, update_product_input: UpdateProductInput) -> Result<Product> {
        let (id, input) = update_product_input.into_parts();
        self.service.update(id, input).await.into_graphql()
    }

    async fn remove_product(&self, id: DbId) -> Result<Product> {
        self.service.remove(id).await.into_graphql()
    }
}
