//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use catalog_app::domain::products::ProductStoreError;

pub(crate) fn into_status_error(error: ProductStoreError) -> StatusError {
    match error {
        ProductStoreError::NotFound => StatusError::not_found().brief("Product not found"),
        ProductStoreError::Unavailable(source) => {
            error!("product store unavailable: {source}");

            StatusError::service_unavailable().brief("Product store unavailable")
        }
    }
}
