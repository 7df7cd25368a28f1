//! Category queries and mutations.

use async_graphql::{InputObject, Object, Result};
use catalog_core::types::DbId;
use catalog_db::models::category::{Category, CreateCategory, UpdateCategory};

use crate::error::IntoGraphQL;
use crate::services::CategoryService;

/// Input for `updateCategory`: the target id plus the fields to replace.
#[derive(Debug, InputObject)]
pub struct UpdateCategoryInput {
    pub id: DbId,
    pub name: Option<String>,
}

impl UpdateCategoryInput {
    fn into_parts(self) -> (DbId, UpdateCategory) {
        (self.id, UpdateCategory { name: self.name })
    }
}

pub struct CategoryQuery {
    service: CategoryService,
}

impl CategoryQuery {
    pub fn new(service: CategoryService) -> Self {
        Self { service }
    }
}

#[Object]
impl CategoryQuery {
    /// Page through categories, optionally filtered by a case-insensitive
    /// name substring.
    async fn get_all_category(
        &self,
        search: Option<String>,
        page: Option<i64>,
        limit: Option<i64>,
    ) -> Result<Vec<Category>> {
        self.service
            .find_all(search.as_deref(), page, limit)
            .await
            .into_graphql()
    }

    async fn get_one_category(&self, id: DbId) -> Result<Category> {
        self.service.find_one(id).await.into_graphql()
    }
}

pub struct CategoryMutation {
    service: CategoryService,
}

impl CategoryMutation {
    pub fn new(service: CategoryService) -> Self {
        Self { service }
    }
}

#[Object]
impl CategoryMutation {
    async fn create_category(&self, create_category_input: CreateCategory) -> Result<Category> {
        self.service
            .create(create_category_input)
            .await
            .into_graphql()
    }

    async fn update_category(&self, update_category_input: UpdateCategoryInput) -> Result<Category> {
        let (id, input) = update_category_input.into_parts();
        self.service.update(id, input).await.into_graphql()
    }

    /// Delete a category and return the removed record.
    async fn remove_category(&self, id: DbId) -> Result<Category> {
        self.service.remove(id).await.into_graphql()
    }
}
