use thiserror::Error;

use vibe_core::DomainError;

/// Failures reaching or interpreting the external catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The upstream reported the resource missing (or an empty result set).
    #[error("{0}")]
    NotFound(String),

    /// The upstream was unreachable or answered with an error status.
    /// Never retried here; the catalog is cheap to re-request.
    #[error("catalog upstream failure: {0}")]
    Upstream(String),
}

impl From<CatalogError> for DomainError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(msg) => DomainError::NotFound(msg),
            CatalogError::Upstream(msg) => DomainError::Upstream(msg),
        }
    }
}
