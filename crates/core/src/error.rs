use crate::types::DbId;

/// Message used when an internal failure carries no text of its own.
pub const DEFAULT_INTERNAL_MESSAGE: &str = "Internal server error";

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("{0}")]
    Internal(String),
}

impl CoreError {
    /// Build an [`CoreError::Internal`] from an arbitrary failure message.
    ///
    /// Blank messages are replaced with [`DEFAULT_INTERNAL_MESSAGE`].
    pub fn internal(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            CoreError::Internal(DEFAULT_INTERNAL_MESSAGE.to_string())
        } else {
            CoreError::Internal(message)
        }
    }
}
