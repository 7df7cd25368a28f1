use std::sync::Arc;

use crate::config::ServerConfig;
use crate::graphql::CatalogSchema;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: catalog_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Executable GraphQL schema; its resolvers hold clones of `pool`.
    pub schema: CatalogSchema,
}

impl AppState {
    /// Build the state and the GraphQL schema around a single shared pool.
    pub fn new(pool: catalog_db::DbPool, config: ServerConfig) -> Self {
        let schema = crate::graphql::build_schema(pool.clone());
        Self {
            pool,
            config: Arc::new(config),
            schema,
        }
    }
}
