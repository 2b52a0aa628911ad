//! HTTP client for a remote `catalog-json` server.

use async_trait::async_trait;
use catalog::products::{NewProduct, ProductId, ProductPatch, ProductRecord};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::products::{errors::ProductStoreError, service::ProductStore};

/// A response the server should never send for the request that was made.
#[derive(Debug, Error)]
#[error("unexpected response status {status}: {body}")]
pub struct UnexpectedResponse {
    /// Status the server answered with.
    pub status: StatusCode,
    /// Raw response body.
    pub body: String,
}

#[derive(Debug, Deserialize)]
struct ProductCreated {
    id: ProductId,
}

/// Product store backed by the JSON API.
#[derive(Debug, Clone)]
pub struct HttpProductStore {
    base_url: String,
    http: Client,
}

impl HttpProductStore {
    /// Create a store talking to the server at `base_url`, e.g. `"http://localhost:8698"`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a store using a preconfigured HTTP client.
    #[must_use]
    pub fn with_client(base_url: impl Into<String>, http: Client) -> Self {
        let mut base_url = base_url.into();

        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self { base_url, http }
    }

    fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    fn product_url(&self, product: ProductId) -> String {
        format!("{}/products/{product}", self.base_url)
    }
}

async fn unexpected(response: Response) -> ProductStoreError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    ProductStoreError::unavailable(UnexpectedResponse { status, body })
}

#[async_trait]
impl ProductStore for HttpProductStore {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductStoreError> {
        let response = self.http.get(self.products_url()).send().await?;

        if !response.status().is_success() {
            return Err(unexpected(response).await);
        }

        Ok(response.json().await?)
    }

    async fn list_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<ProductRecord>, ProductStoreError> {
        let response = self
            .http
            .get(self.products_url())
            .query(&[("category", category)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(unexpected(response).await);
        }

        Ok(response.json().await?)
    }

    async fn get_product(
        &self,
        product: ProductId,
    ) -> Result<Option<ProductRecord>, ProductStoreError> {
        let response = self.http.get(self.product_url(product)).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.json().await?)),
            _ => Err(unexpected(response).await),
        }
    }

    async fn create_product(&self, product: NewProduct) -> Result<ProductId, ProductStoreError> {
        let response = self
            .http
            .post(self.products_url())
            .json(&product)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(unexpected(response).await);
        }

        let created: ProductCreated = response.json().await?;

        Ok(created.id)
    }

    async fn update_product(
        &self,
        product: ProductId,
        patch: ProductPatch,
    ) -> Result<(), ProductStoreError> {
        let response = self
            .http
            .patch(self.product_url(product))
            .json(&patch)
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(ProductStoreError::NotFound),
            status if status.is_success() => Ok(()),
            _ => Err(unexpected(response).await),
        }
    }

    async fn delete_product(&self, product: ProductId) -> Result<(), ProductStoreError> {
        let response = self.http.delete(self.product_url(product)).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(()),
            status if status.is_success() => Ok(()),
            _ => Err(unexpected(response).await),
        }
    }
}
