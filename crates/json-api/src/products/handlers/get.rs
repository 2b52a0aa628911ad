//! Get Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    products::{errors::into_status_error, models::ProductResponse},
    state::State,
};

/// Get Product Handler
///
/// Returns a product.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Product found"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Product store unavailable"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .products()
        .get_product(product.into_inner().into())
        .await
        .map_err(into_status_error)?
        .ok_or_else(|| StatusError::not_found().brief("Product not found"))?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use std::io;

    use mockall::predicate::eq;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use catalog::products::ProductId;
    use catalog_app::domain::products::{MockProductStore, ProductStoreError};

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    fn make_service(store: MockProductStore) -> Service {
        products_service(store, Router::with_path("products/{product}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_200() -> TestResult {
        let id = ProductId::new();

        let mut store = MockProductStore::new();

        store
            .expect_get_product()
            .once()
            .with(eq(id))
            .return_once(move |_| Ok(Some(make_product(id))));

        let mut res = TestClient::get(format!("http://example.com/products/{id}"))
            .send(&make_service(store))
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body["id"], id.to_string());
        assert_eq!(body["name"], "Lampe");
        assert_eq!(body["price"], 19.99);
        assert!(
            body.get("imageUrl").is_none(),
            "absent image should be omitted"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_product_returns_404() -> TestResult {
        let mut store = MockProductStore::new();

        store
            .expect_get_product()
            .once()
            .return_once(|_| Ok(None));

        let res = TestClient::get(format!("http://example.com/products/{}", ProductId::new()))
            .send(&make_service(store))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_invalid_uuid_returns_400() -> TestResult {
        let res = TestClient::get("http://example.com/products/not-a-uuid")
            .send(&make_service(MockProductStore::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_store_failure_returns_503() -> TestResult {
        let mut store = MockProductStore::new();

        store.expect_get_product().once().return_once(|_| {
            Err(ProductStoreError::unavailable(io::Error::other("timeout")))
        });

        let res = TestClient::get(format!("http://example.com/products/{}", ProductId::new()))
            .send(&make_service(store))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::SERVICE_UNAVAILABLE));

        Ok(())
    }
}
