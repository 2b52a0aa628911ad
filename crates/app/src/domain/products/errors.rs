//! Product store errors.

use std::error::Error as StdError;

use thiserror::Error;

/// Boxed cause of a store failure.
pub type StoreFailure = Box<dyn StdError + Send + Sync + 'static>;

/// Failures surfaced by every [`ProductStore`](super::ProductStore) implementation.
#[derive(Debug, Error)]
pub enum ProductStoreError {
    /// No product has the requested id.
    #[error("product not found")]
    NotFound,

    /// The backing store could not serve the request.
    #[error("product store unavailable: {0}")]
    Unavailable(#[source] StoreFailure),
}

impl ProductStoreError {
    /// Wrap a transport or backend failure.
    pub fn unavailable(source: impl Into<StoreFailure>) -> Self {
        Self::Unavailable(source.into())
    }
}

impl From<sqlx::Error> for ProductStoreError {
    fn from(error: sqlx::Error) -> Self {
        if matches!(error, sqlx::Error::RowNotFound) {
            return Self::NotFound;
        }

        Self::unavailable(error)
    }
}

impl From<reqwest::Error> for ProductStoreError {
    fn from(error: reqwest::Error) -> Self {
        Self::unavailable(error)
    }
}
