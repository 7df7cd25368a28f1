//! Catalog API server library.
//!
//! Exposes the building blocks (config, state, error handling, services,
//! GraphQL schema, routes) so integration tests and the binary entrypoint
//! can both access them.

pub mod config;
pub mod error;
pub mod graphql;
pub mod router;
pub mod routes;
pub mod services;
pub mod state;
