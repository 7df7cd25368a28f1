//! HTTP routes.
//!
//! ```text
//! GET  /health     service and database health
//! POST /graphql    GraphQL endpoint
//! GET  /graphql    GraphiQL IDE (only when GRAPHQL_PLAYGROUND is enabled)
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub mod graphql;
pub mod health;

/// Every route the service exposes, without middleware.
pub fn router(graphql_playground: bool) -> Router<AppState> {
    let mut endpoint = post(graphql::execute);
    if graphql_playground {
        endpoint = endpoint.get(graphql::graphiql);
    }

    Router::new()
        .route("/health", get(health::health))
        .route(graphql::GRAPHQL_PATH, endpoint)
}
