//! Product store contract and its Postgres implementation.

use async_trait::async_trait;
use catalog::products::{NewProduct, ProductId, ProductPatch, ProductRecord};
use mockall::automock;
use sqlx::PgPool;
use tracing::debug;

use crate::domain::products::{errors::ProductStoreError, repository::PgProductsRepository};

/// Product store backed by Postgres.
#[derive(Debug, Clone)]
pub struct PgProductStore {
    pool: PgPool,
    repository: PgProductsRepository,
}

impl PgProductStore {
    /// Create a store over an already-migrated pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductStoreError> {
        Ok(self.repository.list_products(&self.pool).await?)
    }

    async fn list_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<ProductRecord>, ProductStoreError> {
        Ok(self
            .repository
            .list_products_by_category(&self.pool, category)
            .await?)
    }

    async fn get_product(
        &self,
        product: ProductId,
    ) -> Result<Option<ProductRecord>, ProductStoreError> {
        Ok(self.repository.get_product(&self.pool, product).await?)
    }

    async fn create_product(&self, product: NewProduct) -> Result<ProductId, ProductStoreError> {
        let created = self
            .repository
            .create_product(&self.pool, ProductId::new(), product)
            .await?;

        debug!(product = %created, "product created");

        Ok(created)
    }

    async fn update_product(
        &self,
        product: ProductId,
        patch: ProductPatch,
    ) -> Result<(), ProductStoreError> {
        self.repository
            .update_product(&self.pool, product, patch)
            .await?
            .ok_or(ProductStoreError::NotFound)?;

        Ok(())
    }

    async fn delete_product(&self, product: ProductId) -> Result<(), ProductStoreError> {
        let rows_affected = self.repository.delete_product(&self.pool, product).await?;

        if rows_affected == 0 {
            debug!(product = %product, "delete of unknown product ignored");
        }

        Ok(())
    }
}

/// Data access the screens depend on.
///
/// Implementations only need to honour these signatures: a missing product is `Ok(None)` from
/// [`ProductStore::get_product`] but [`ProductStoreError::NotFound`] from
/// [`ProductStore::update_product`], and updates merge only the fields present in the patch.
#[automock]
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Retrieves all products in insertion order.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductStoreError>;

    /// Retrieves the products whose category is exactly `category`.
    async fn list_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<ProductRecord>, ProductStoreError>;

    /// Retrieve a single product, `None` when it does not exist.
    async fn get_product(
        &self,
        product: ProductId,
    ) -> Result<Option<ProductRecord>, ProductStoreError>;

    /// Persists a new product and returns its assigned identifier.
    async fn create_product(&self, product: NewProduct) -> Result<ProductId, ProductStoreError>;

    /// Merges `patch` into an existing product.
    async fn update_product(
        &self,
        product: ProductId,
        patch: ProductPatch,
    ) -> Result<(), ProductStoreError>;

    /// Deletes a product. Deleting an unknown product succeeds.
    async fn delete_product(&self, product: ProductId) -> Result<(), ProductStoreError>;
}
