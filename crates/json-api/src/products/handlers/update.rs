//! Update Product Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use catalog::products::ProductPatch;

use crate::{
    extensions::*,
    products::{
        errors::into_status_error,
        models::{ProductResponse, UpdateProductRequest},
    },
    state::State,
};

/// Product Update Handler
///
/// Merges the fields present in the body into the stored product and returns the result.
#[endpoint(
    tags("products"),
    summary = "Update Product",
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Product store unavailable"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(product, json, depot),
    fields(
        product_id = tracing::field::Empty,
        fields_changed = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = product.into_inner();
    let patch = ProductPatch::from(json.into_inner());

    let span = tracing::Span::current();

    span.record("product_id", tracing::field::display(product));
    span.record("fields_changed", tracing::field::display(changed_fields(&patch)));

    state
        .products()
        .update_product(product.into(), patch)
        .await
        .map_err(into_status_error)?;

    let updated = state
        .products()
        .get_product(product.into())
        .await
        .map_err(into_status_error)?
        .ok_or_else(|| StatusError::not_found().brief("Product not found"))?;

    tracing::info!(product_id = %product, "updated product");

    Ok(Json(updated.into()))
}

fn changed_fields(patch: &ProductPatch) -> usize {
    [
        patch.name.is_some(),
        patch.description.is_some(),
        patch.price.is_some(),
        patch.category.is_some(),
        patch.image_url.is_some(),
    ]
    .into_iter()
    .filter(|present| *present)
    .count()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use catalog::products::{ProductId, ProductRecord};
    use catalog_app::domain::products::{
        MemoryProductStore, MockProductStore, ProductStore, ProductStoreError,
    };

    use crate::test_helpers::{make_draft, make_product, memory_service, products_service};

    use super::*;

    fn route() -> Router {
        Router::with_path("products/{product}").patch(handler)
    }

    #[tokio::test]
    async fn test_update_product_merges_present_fields() -> TestResult {
        let store = Arc::new(MemoryProductStore::new());
        let id = store.create_product(make_draft("Lampe")).await?;

        let mut res = TestClient::patch(format!("http://example.com/products/{id}"))
            .json(&json!({ "price": 12.5 }))
            .send(&memory_service(store.clone(), route()))
            .await;

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.price, Decimal::new(125, 1));
        assert_eq!(body.name, "Lampe");
        assert_eq!(body.description, "Lampe description");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_empty_image_url_clears_it() -> TestResult {
        let product = ProductRecord {
            image_url: Some("https://example.com/lampe.jpg".to_string()),
            ..make_product(ProductId::new())
        };
        let id = product.id;
        let store = Arc::new(MemoryProductStore::with_products(vec![product]));

        let mut res = TestClient::patch(format!("http://example.com/products/{id}"))
            .json(&json!({ "imageUrl": "" }))
            .send(&memory_service(store, route()))
            .await;

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(body.image_url, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_product_returns_404() -> TestResult {
        let mut store = MockProductStore::new();

        store
            .expect_update_product()
            .once()
            .return_once(|_, _| Err(ProductStoreError::NotFound));

        let res = TestClient::patch(format!("http://example.com/products/{}", ProductId::new()))
            .json(&json!({ "name": "Lampe" }))
            .send(&products_service(store, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_invalid_uuid_returns_400() -> TestResult {
        let res = TestClient::patch("http://example.com/products/123")
            .json(&json!({ "name": "Lampe" }))
            .send(&products_service(MockProductStore::new(), route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[test]
    fn changed_fields_counts_present_values() {
        let patch = ProductPatch {
            name: Some("Lampe".to_string()),
            image_url: Some(String::new()),
            ..ProductPatch::default()
        };

        assert_eq!(changed_fields(&patch), 2);
        assert_eq!(changed_fields(&ProductPatch::default()), 0);
    }
}
