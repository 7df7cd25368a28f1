//! Service layer.
//!
//! Each service owns persistence orchestration for one entity. Services
//! hold a clone of the shared pool and return [`ServiceResult`]; not-found
//! passes through untouched while every store failure is logged and
//! collapsed into [`CoreError::Internal`].

use catalog_core::error::CoreError;

pub mod category;
pub mod product;

pub use category::CategoryService;
pub use product::ProductService;

/// Result type returned by every service operation.
pub type ServiceResult<T> = Result<T, CoreError>;

/// Log a store failure and convert it into an internal error.
pub(crate) fn store_failure(
    entity: &'static str,
    operation: &'static str,
    err: sqlx::Error,
) -> CoreError {
    tracing::error!(entity, operation, error = %err, "Store operation failed");
    CoreError::internal(err.to_string())
}
