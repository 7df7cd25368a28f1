//! Product service.

use catalog_core::error::CoreError;
use catalog_core::pagination::Pagination;
use catalog_core::types::DbId;
use catalog_db::models::product::{CreateProduct, Product, ProductFilter, UpdateProduct};
use catalog_db::repositories::{CategoryRepo, ProductRepo};
use catalog_db::DbPool;

use super::{store_failure, ServiceResult};

const ENTITY: &str = "Product";

/// Persistence orchestration for products.
#[derive(Clone)]
pub struct ProductService {
    pool: DbPool,
}

impl ProductService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create a product after confirming its category exists.
    ///
    /// Nothing is written when the category is missing.
    pub async fn create(&self, input: CreateProduct) -> ServiceResult<Product> {
        let category_exists = CategoryRepo::find_by_id(&self.pool, input.category_id)
            .await
            .map_err(|e| store_failure(ENTITY, "create", e))?
            .is_some();
        if !category_exists {
            return Err(CoreError::NotFound {
                entity: "Category",
                id: input.category_id,
            });
        }

        let product = ProductRepo::create(&self.pool, &input)
            .await
            .map_err(|e| store_failure(ENTITY, "create", e))?;
        tracing::info!(
            product_id = product.id,
            category_id = product.category_id,
            "Product created"
        );
        Ok(product)
    }

    /// List products matching every supplied filter. An empty `search` is
    /// treated as absent; contradictory price bounds simply match nothing.
    pub async fn find_all(
        &self,
        mut filter: ProductFilter,
        page: Option<i64>,
        limit: Option<i64>,
    ) -> ServiceResult<Vec<Product>> {
        filter.search = filter.search.filter(|s| !s.is_empty());
        let pagination = Pagination::resolve(page, limit);
        tracing::debug!(?filter, ?pagination, "Listing products");

        ProductRepo::list(&self.pool, &filter, pagination)
            .await
            .map_err(|e| store_failure(ENTITY, "find_all", e))
    }

    pub async fn find_one(&self, id: DbId) -> ServiceResult<Product> {
        ProductRepo::find_by_id(&self.pool, id)
            .await
            .map_err(|e| store_failure(ENTITY, "find_one", e))?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })
    }

    /// Apply a partial update. Fails with not-found if `id` does not exist.
    ///
    /// A new `category_id` is not checked here; only the foreign key
    /// constraint guards it.
    pub async fn update(&self, id: DbId, input: UpdateProduct) -> ServiceResult<Product> {
        ProductRepo::update(&self.pool, id, &input)
            .await
            .map_err(|e| store_failure(ENTITY, "update", e))?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })
    }

    pub async fn remove(&self, id: DbId) -> ServiceResult<Product> {
        let product = ProductRepo::delete(&self.pool, id)
            .await
            .map_err(|e| store_failure(ENTITY, "remove", e))?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
        tracing::info!(product_id = id, "Product removed");
        Ok(product)
    }
}
