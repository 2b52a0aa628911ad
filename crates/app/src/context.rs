//! App Context

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::{
    database,
    domain::products::{HttpProductStore, PgProductStore, ProductStore},
};

/// Failures while building an [`AppContext`].
#[derive(Debug, Error)]
pub enum AppInitError {
    /// The database could not be reached.
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    /// Pending migrations failed to apply.
    #[error("failed to run database migrations")]
    Migration(#[source] sqlx::migrate::MigrateError),
}

/// Services shared by the screens, the CLI and the JSON API.
#[derive(Clone)]
pub struct AppContext {
    /// Product storage.
    pub products: Arc<dyn ProductStore>,
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}

impl AppContext {
    /// Build application context from a database URL, applying pending migrations.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or migrating fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migration)?;

        Ok(Self::with_store(Arc::new(PgProductStore::new(pool))))
    }

    /// Build application context that talks to a remote JSON API.
    #[must_use]
    pub fn from_remote_url(url: &str) -> Self {
        Self::with_store(Arc::new(HttpProductStore::new(url)))
    }

    /// Build application context around an existing store.
    #[must_use]
    pub fn with_store(products: Arc<dyn ProductStore>) -> Self {
        Self { products }
    }
}
