//! In-memory product store.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use catalog::products::{NewProduct, ProductId, ProductPatch, ProductRecord};

use crate::domain::products::{errors::ProductStoreError, service::ProductStore};

/// Insertion-ordered store kept in process memory.
#[derive(Debug, Default)]
pub struct MemoryProductStore {
    products: RwLock<Vec<ProductRecord>>,
}

impl MemoryProductStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with already-persisted records.
    #[must_use]
    pub fn with_products(products: Vec<ProductRecord>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<ProductRecord>> {
        self.products.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<ProductRecord>> {
        self.products.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductStoreError> {
        Ok(self.read().clone())
    }

    async fn list_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<ProductRecord>, ProductStoreError> {
        Ok(self
            .read()
            .iter()
            .filter(|product| product.category == category)
            .cloned()
            .collect())
    }

    async fn get_product(
        &self,
        product: ProductId,
    ) -> Result<Option<ProductRecord>, ProductStoreError> {
        Ok(self
            .read()
            .iter()
            .find(|candidate| candidate.id == product)
            .cloned())
    }

    async fn create_product(&self, product: NewProduct) -> Result<ProductId, ProductStoreError> {
        let id = ProductId::new();
        let mut record = ProductRecord::from_draft(id, product);

        record.image_url = record.image_url.filter(|url| !url.is_empty());

        self.write().push(record);

        Ok(id)
    }

    async fn update_product(
        &self,
        product: ProductId,
        patch: ProductPatch,
    ) -> Result<(), ProductStoreError> {
        let mut products = self.write();

        let record = products
            .iter_mut()
            .find(|candidate| candidate.id == product)
            .ok_or(ProductStoreError::NotFound)?;

        record.apply(patch);

        Ok(())
    }

    async fn delete_product(&self, product: ProductId) -> Result<(), ProductStoreError> {
        self.write().retain(|candidate| candidate.id != product);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;

    fn draft(name: &str, category: &str) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: format!("{name} description"),
            price: Decimal::new(999, 2),
            category: category.to_string(),
            image_url: None,
        }
    }

    #[tokio::test]
    async fn created_products_are_listed_in_insertion_order() -> TestResult {
        let store = MemoryProductStore::new();

        let first = store.create_product(draft("A", "Livres")).await?;
        let second = store.create_product(draft("B", "Maison")).await?;

        let ids: Vec<ProductId> = store
            .list_products()
            .await?
            .into_iter()
            .map(|product| product.id)
            .collect();

        assert_eq!(ids, [first, second]);

        Ok(())
    }

    #[tokio::test]
    async fn list_by_category_is_exact_and_case_sensitive() -> TestResult {
        let store = MemoryProductStore::new();

        let livres = store.create_product(draft("A", "Livres")).await?;
        store.create_product(draft("B", "livres")).await?;

        let products = store.list_products_by_category("Livres").await?;

        assert_eq!(products.len(), 1);
        assert_eq!(products.first().map(|product| product.id), Some(livres));

        Ok(())
    }

    #[tokio::test]
    async fn update_merges_patch_fields() -> TestResult {
        let store = MemoryProductStore::new();
        let id = store.create_product(draft("Lampe", "Maison")).await?;

        store
            .update_product(
                id,
                ProductPatch {
                    name: Some("Lampe de chevet".to_string()),
                    ..ProductPatch::default()
                },
            )
            .await?;

        let product = store.get_product(id).await?.ok_or(ProductStoreError::NotFound)?;

        assert_eq!(product.name, "Lampe de chevet");
        assert_eq!(product.description, "Lampe description");
        assert_eq!(product.price, Decimal::new(999, 2));

        Ok(())
    }

    #[tokio::test]
    async fn update_unknown_product_is_not_found() {
        let store = MemoryProductStore::new();

        let result = store
            .update_product(ProductId::new(), ProductPatch::default())
            .await;

        assert!(
            matches!(result, Err(ProductStoreError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn deleted_product_is_gone_but_get_is_not_an_error() -> TestResult {
        let store = MemoryProductStore::new();
        let id = store.create_product(draft("Lampe", "Maison")).await?;

        store.delete_product(id).await?;

        assert!(store.get_product(id).await?.is_none());
        assert!(store.list_products().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn deleting_unknown_product_succeeds() -> TestResult {
        let store = MemoryProductStore::new();

        store.delete_product(ProductId::new()).await?;

        Ok(())
    }

    #[tokio::test]
    async fn empty_image_url_is_not_stored() -> TestResult {
        let store = MemoryProductStore::new();

        let id = store
            .create_product(NewProduct {
                image_url: Some(String::new()),
                ..draft("Lampe", "Maison")
            })
            .await?;

        let product = store.get_product(id).await?.ok_or(ProductStoreError::NotFound)?;

        assert_eq!(product.image_url, None);

        Ok(())
    }
}
