//! Runtime errors.

use frontier_core::OracleError;

use crate::repository::RepositoryError;

/// Failures while assembling or persisting a game session.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("oracle error: {0}")]
    Oracle(#[from] OracleError),

    /// Content catalogs failed to load or cross-check.
    #[error(transparent)]
    Content(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
