//! Screen controllers
//!
//! Each controller owns the state of one screen and drives an injected [`ProductStore`]. Store
//! failures never escape a controller: they are logged and turned into a [`Notice`] for the user.
//!
//! [`ProductStore`]: crate::domain::products::ProductStore

use std::fmt::{self, Display};

use catalog::products::ProductId;

pub mod detail;
pub mod form;
pub mod list;
mod sequence;

pub use detail::{DetailDisplay, ProductDetailScreen};
pub use form::{FormInput, FormMode, ProductFormScreen, SubmitOutcome};
pub use list::{EmptyState, ListDisplay, ProductListScreen};

/// Screen to show next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The product list.
    ProductList,

    /// The detail screen of one product.
    ProductDetail(ProductId),
}

/// Localized message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice(&'static str);

impl Notice {
    pub(crate) const fn new(message: &'static str) -> Self {
        Self(message)
    }

    /// Text to display.
    #[must_use]
    pub const fn message(self) -> &'static str {
        self.0
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// What happened to the result of a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The result was applied to the screen.
    Applied,

    /// The store failed and the screen now shows an error.
    Failed,

    /// A newer fetch was issued while this one was in flight, so its result was dropped.
    Discarded,
}
