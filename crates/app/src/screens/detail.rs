//! Product detail screen

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use catalog::products::{ProductId, ProductRecord};
use tracing::{debug, error, info};

use crate::{
    domain::products::ProductStore,
    screens::{FetchOutcome, Navigation, Notice, sequence::RequestSequence},
};

/// Shown when the product cannot be fetched.
pub const LOAD_FAILED: &str = "Impossible de charger les détails du produit";

/// Shown when the store has no product with the requested identifier.
pub const NOT_FOUND: &str = "Produit non trouvé";

/// Shown when deleting the product fails.
pub const DELETE_FAILED: &str = "Impossible de supprimer le produit";

/// What the detail screen renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailDisplay {
    /// A load is in flight.
    #[default]
    Loading,

    /// The product was fetched.
    Loaded(ProductRecord),

    /// The store has no such product.
    NotFound,

    /// The store failed; the notice explains it to the user.
    Failed(Notice),
}

impl DetailDisplay {
    /// Message to show in place of the product, if any.
    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Self::NotFound => Some(Notice::new(NOT_FOUND)),
            Self::Failed(notice) => Some(*notice),
            Self::Loading | Self::Loaded(_) => None,
        }
    }
}

#[derive(Debug, Default)]
struct DetailState {
    product: Option<ProductId>,
    display: DetailDisplay,
}

/// Shows a single product and lets the user share or delete it.
pub struct ProductDetailScreen {
    store: Arc<dyn ProductStore>,
    sequence: RequestSequence,
    state: Mutex<DetailState>,
}

impl std::fmt::Debug for ProductDetailScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductDetailScreen")
            .field("sequence", &self.sequence)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl ProductDetailScreen {
    /// Create a screen with nothing loaded.
    #[must_use]
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self {
            store,
            sequence: RequestSequence::default(),
            state: Mutex::new(DetailState::default()),
        }
    }

    /// Fetch `product`. A load started later, for any product, supersedes this one.
    pub async fn load(&self, product: ProductId) -> FetchOutcome {
        let ticket = self.sequence.issue();

        {
            let mut state = self.state();
            state.product = Some(product);
            state.display = DetailDisplay::Loading;
        }

        let result = self.store.get_product(product).await;

        let mut state = self.state();

        if !self.sequence.is_current(ticket) {
            debug!(product = %product, "discarding superseded product details");
            return FetchOutcome::Discarded;
        }

        match result {
            Ok(Some(record)) => {
                state.display = DetailDisplay::Loaded(record);
                FetchOutcome::Applied
            }
            Ok(None) => {
                state.display = DetailDisplay::NotFound;
                FetchOutcome::Applied
            }
            Err(error) => {
                error!("failed to load product {product}: {error}");
                state.display = DetailDisplay::Failed(Notice::new(LOAD_FAILED));
                FetchOutcome::Failed
            }
        }
    }

    /// Current rendering of the product.
    #[must_use]
    pub fn display(&self) -> DetailDisplay {
        self.state().display.clone()
    }

    /// Text handed to the platform share sheet, once the product is loaded.
    #[must_use]
    pub fn share_message(&self) -> Option<String> {
        match &self.state().display {
            DetailDisplay::Loaded(product) => Some(product.share_message()),
            _ => None,
        }
    }

    /// Delete the displayed product.
    ///
    /// On success the caller should navigate to the returned screen; any fetch still in flight
    /// is discarded so the deleted product cannot reappear.
    ///
    /// # Errors
    ///
    /// Returns the notice to show when no product was requested or the store fails.
    pub async fn delete(&self) -> Result<Navigation, Notice> {
        let Some(product) = self.state().product else {
            return Err(Notice::new(NOT_FOUND));
        };

        self.sequence.issue();

        if let Err(error) = self.store.delete_product(product).await {
            error!("failed to delete product {product}: {error}");
            return Err(Notice::new(DELETE_FAILED));
        }

        info!(product = %product, "deleted product");

        Ok(Navigation::ProductList)
    }

    fn state(&self) -> MutexGuard<'_, DetailState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
