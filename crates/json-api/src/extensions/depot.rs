//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};
use tracing::error;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    /// Fetch injected state; a missing `inject` hoop is a server bug, answered with 500.
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>().map_err(|_ignored| {
            error!("no {} injected into depot", std::any::type_name::<T>());

            StatusError::internal_server_error()
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn injected_value_is_returned() {
        let mut depot = Depot::new();

        depot.inject(Arc::new(7_u32));

        assert_eq!(depot.obtain_or_500::<Arc<u32>>().ok().map(|value| **value), Some(7));
    }

    #[test]
    fn missing_value_is_internal_server_error() {
        let depot = Depot::new();

        let status = depot.obtain_or_500::<Arc<u32>>().map_err(|error| error.code);

        assert_eq!(status, Err(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
