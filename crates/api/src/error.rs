use async_graphql::ErrorExtensions;
use catalog_core::error::CoreError;

/// Error code attached to not-found failures.
pub const BAD_REQUEST: &str = "BAD_REQUEST";

/// Error code attached to every other failure.
pub const INTERNAL_SERVER_ERROR: &str = "INTERNAL_SERVER_ERROR";

/// Application-level error type for GraphQL resolvers.
///
/// Wraps [`CoreError`] and implements [`ErrorExtensions`] so every resolver
/// error carries a machine-readable `extensions.code`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `catalog_core`.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl AppError {
    /// The `extensions.code` reported to GraphQL clients.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Core(CoreError::NotFound { .. }) => BAD_REQUEST,
            AppError::Core(CoreError::Internal(_)) => INTERNAL_SERVER_ERROR,
        }
    }
}

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code();
        // Internal failures keep their original message; the classification
        // is carried by `code` alone.
        async_graphql::Error::new(self.to_string()).extend_with(|_, ext| ext.set("code", code))
    }
}

/// Converts service results into GraphQL results with error extensions.
pub trait IntoGraphQL<T> {
    fn into_graphql(self) -> async_graphql::Result<T>;
}

impl<T> IntoGraphQL<T> for Result<T, CoreError> {
    fn into_graphql(self) -> async_graphql::Result<T> {
        self.map_err(|err| AppError::from(err).extend())
    }
}
