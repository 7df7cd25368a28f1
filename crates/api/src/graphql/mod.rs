//! GraphQL schema: resolver objects for each resource, merged into the
//! query and mutation roots.
//!
//! Resolvers only extract arguments and delegate to the services; every
//! service error is converted with [`IntoGraphQL`](crate::error::IntoGraphQL).

use async_graphql::{EmptySubscription, MergedObject, Schema};
use catalog_db::DbPool;

use crate::services::{CategoryService, ProductService};

pub mod category;
pub mod product;

use category::{CategoryMutation, CategoryQuery};
use product::{ProductMutation, ProductQuery};

/// Root query object combining every resource's queries.
#[derive(MergedObject)]
pub struct QueryRoot(CategoryQuery, ProductQuery);

/// Root mutation object combining every resource's mutations.
#[derive(MergedObject)]
pub struct MutationRoot(CategoryMutation, ProductMutation);

/// The executable catalog schema.
pub type CatalogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema, wiring one service per resource around the shared pool.
pub fn build_schema(pool: DbPool) -> CatalogSchema {
    let categories = CategoryService::new(pool.clone());
    let products = ProductService::new(pool);

    Schema::build(
        QueryRoot(
            CategoryQuery::new(categories.clone()),
            ProductQuery::new(products.clone()),
        ),
        MutationRoot(
            CategoryMutation::new(categories),
            ProductMutation::new(products),
        ),
        EmptySubscription,
    )
    .finish()
}
