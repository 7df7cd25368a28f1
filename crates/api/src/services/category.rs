//! Category service.

use catalog_core::error::CoreError;
use catalog_core::pagination::Pagination;
use catalog_core::types::DbId;
use catalog_db::models::category::{Category, CreateCategory, UpdateCategory};
use catalog_db::repositories::CategoryRepo;
use catalog_db::DbPool;

use super::{store_failure, ServiceResult};

const ENTITY: &str = "Category";

/// Persistence orchestration for categories.
#[derive(Clone)]
pub struct CategoryService {
    pool: DbPool,
}

impl CategoryService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: CreateCategory) -> ServiceResult<Category> {
        let category = CategoryRepo::create(&self.pool, &input)
            .await
            .map_err(|e| store_failure(ENTITY, "create", e))?;
        tracing::info!(category_id = category.id, "Category created");
        Ok(category)
    }

    /// List categories, optionally narrowed by a case-insensitive name
    /// substring. An empty `search` is treated as absent.
    pub async fn find_all(
        &self,
        search: Option<&str>,
        page: Option<i64>,
        limit: Option<i64>,
    ) -> ServiceResult<Vec<Category>> {
        let search = search.filter(|s| !s.is_empty());
        let pagination = Pagination::resolve(page, limit);
        tracing::debug!(?search, ?pagination, "Listing categories");

        CategoryRepo::list(&self.pool, search, pagination)
            .await
            .map_err(|e| store_failure(ENTITY, "find_all", e))
    }

    pub async fn find_one(&self, id: DbId) -> ServiceResult<Category> {
        CategoryRepo::find_by_id(&self.pool, id)
            .await
            .map_err(|e| store_failure(ENTITY, "find_one", e))?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })
    }

    /// Apply a partial update. Fails with not-found if `id` does not exist.
    pub async fn update(&self, id: DbId, input: UpdateCategory) -> ServiceResult<Category> {
        CategoryRepo::update(&self.pool, id, &input)
            .await
            .map_err(|e| store_failure(ENTITY, "update", e))?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })
    }

    /// Delete a category and return it. Products are not cascaded; removing
    /// a category that still has products fails at the store.
    pub async fn remove(&self, id: DbId) -> ServiceResult<Category> {
        let category = CategoryRepo::delete(&self.pool, id)
            .await
            .map_err(|e| store_failure(ENTITY, "remove", e))?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
        tracing::info!(category_id = id, "Category removed");
        Ok(category)
    }
}
