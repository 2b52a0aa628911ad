//! Product list screen

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use catalog::{
    filter::{CATEGORIES, ProductFilter},
    products::ProductRecord,
};
use tracing::{debug, error};

use crate::{
    domain::products::ProductStore,
    screens::{FetchOutcome, Notice, sequence::RequestSequence},
};

/// Shown when the product list cannot be fetched.
pub const LOAD_FAILED: &str = "Impossible de charger les produits";

/// Why the visible list is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The store holds no product at all.
    NoProducts,

    /// Products exist but none passes the active filters.
    NoResults,
}

impl EmptyState {
    /// Heading of the empty-state panel.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::NoProducts => "Aucun produit",
            Self::NoResults => "Aucun résultat",
        }
    }

    /// Body text of the empty-state panel.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::NoProducts => {
                "Vous n'avez pas encore ajouté de produits. Commencez par en ajouter un !"
            }
            Self::NoResults => {
                "Aucun produit ne correspond à votre recherche. Essayez avec d'autres critères."
            }
        }
    }
}

/// What the list screen renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListDisplay {
    /// A load is in flight.
    Loading,

    /// The last load failed; the user may retry with [`ProductListScreen::refresh`].
    Failed(Notice),

    /// Nothing to show, see [`EmptyState`].
    Empty(EmptyState),

    /// Visible products in store order.
    Products(Vec<ProductRecord>),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Phase {
    #[default]
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Default)]
struct ListState {
    filter: ProductFilter,
    phase: Phase,
}

/// Lists products with a local category filter and text search.
///
/// The full list is fetched once per [`load`](Self::load); changing the category or the query
/// never calls the store.
pub struct ProductListScreen {
    store: Arc<dyn ProductStore>,
    sequence: RequestSequence,
    state: Mutex<ListState>,
}

impl std::fmt::Debug for ProductListScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductListScreen")
            .field("sequence", &self.sequence)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl ProductListScreen {
    /// Create a screen that has not loaded anything yet.
    #[must_use]
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self {
            store,
            sequence: RequestSequence::default(),
            state: Mutex::new(ListState::default()),
        }
    }

    /// Category labels offered to the user.
    #[must_use]
    pub const fn categories() -> &'static [&'static str] {
        &CATEGORIES
    }

    /// Fetch the full list. Results of superseded loads are discarded.
    pub async fn load(&self) -> FetchOutcome {
        let ticket = self.sequence.issue();

        self.state().phase = Phase::Loading;

        let result = self.store.list_products().await;

        let mut state = self.state();

        if !self.sequence.is_current(ticket) {
            debug!("discarding superseded product list");
            return FetchOutcome::Discarded;
        }

        match result {
            Ok(products) => {
                state.filter.set_products(products);
                state.phase = Phase::Ready;

                FetchOutcome::Applied
            }
            Err(error) => {
                error!("failed to load products: {error}");
                state.phase = Phase::Failed;

                FetchOutcome::Failed
            }
        }
    }

    /// Re-fetch after a mutation or on user request, keeping the active filters.
    pub async fn refresh(&self) -> FetchOutcome {
        self.load().await
    }

    /// Select a category; the `"Tous"` sentinel shows every category.
    pub fn select_category(&self, label: &str) {
        self.state().filter.set_category(Some(label));
    }

    /// Set the free-text query; a blank query clears it.
    pub fn search(&self, query: &str) {
        self.state().filter.set_query(query);
    }

    /// Drop both the category and the query.
    pub fn clear_filters(&self) {
        self.state().filter.clear();
    }

    /// Active category, `None` when every category is shown.
    #[must_use]
    pub fn selected_category(&self) -> Option<String> {
        self.state().filter.category().map(str::to_string)
    }

    /// Active free-text query.
    #[must_use]
    pub fn query(&self) -> Option<String> {
        self.state().filter.query().map(str::to_string)
    }

    /// Current rendering of the list.
    #[must_use]
    pub fn display(&self) -> ListDisplay {
        let state = self.state();

        match state.phase {
            Phase::Loading => ListDisplay::Loading,
            Phase::Failed => ListDisplay::Failed(Notice::new(LOAD_FAILED)),
            Phase::Ready => {
                let visible = state.filter.to_visible();

                if !visible.is_empty() {
                    ListDisplay::Products(visible)
                } else if state.filter.is_filtered() {
                    ListDisplay::Empty(EmptyState::NoResults)
                } else {
                    ListDisplay::Empty(EmptyState::NoProducts)
                }
            }
        }
    }

    fn state(&self) -> MutexGuard<'_, ListState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
