//! State

use std::sync::Arc;

use catalog_app::{context::AppContext, domain::products::ProductStore};

/// Handler state injected into the depot.
#[derive(Debug, Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext) -> Self {
        Self { app }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self::new(app))
    }

    /// The store every product handler reads and writes.
    pub(crate) fn products(&self) -> &dyn ProductStore {
        self.app.products.as_ref()
    }
}
