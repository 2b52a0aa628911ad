//! Create and edit product form

use std::sync::{
    Arc, Mutex, MutexGuard, PoisonError,
    atomic::{AtomicBool, Ordering},
};

use catalog::{
    pricing::coerce_price,
    products::{NewProduct, ProductId, ProductPatch, ProductRecord},
    validation::{FormField, ValidationErrors, validate},
};
use tracing::{debug, error, info};

use crate::{
    domain::products::ProductStore,
    screens::{FetchOutcome, Navigation, Notice, detail::NOT_FOUND, sequence::RequestSequence},
};

/// Shown after a product was created.
pub const CREATED: &str = "Produit ajouté avec succès";

/// Shown after a product was updated.
pub const UPDATED: &str = "Produit mis à jour avec succès";

/// Shown when the store fails to create the product.
pub const CREATE_FAILED: &str = "Impossible d'ajouter le produit";

/// Shown when the store fails to update the product.
pub const UPDATE_FAILED: &str = "Impossible de mettre à jour le produit";

/// Shown when the product to edit cannot be fetched.
pub const LOAD_FAILED: &str = "Impossible de charger le produit";

/// Whether the form creates a product or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Submitting creates a new product.
    Create,

    /// Submitting overwrites the given product.
    Edit(ProductId),
}

/// Text of every input, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    /// Product name
    pub name: String,

    /// Product description
    pub description: String,

    /// Price as typed, coerced on submit
    pub price: String,

    /// Category label
    pub category: String,

    /// Image URL, empty for none
    pub image_url: String,
}

impl FormInput {
    /// Inputs pre-filled from a stored product.
    #[must_use]
    pub fn from_record(product: &ProductRecord) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            category: product.category.clone(),
            image_url: product.image_url.clone().unwrap_or_default(),
        }
    }

    /// Text of one input.
    #[must_use]
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Description => &self.description,
            FormField::Price => &self.price,
            FormField::Category => &self.category,
            FormField::ImageUrl => &self.image_url,
        }
    }

    fn get_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Description => &mut self.description,
            FormField::Price => &mut self.price,
            FormField::Category => &mut self.category,
            FormField::ImageUrl => &mut self.image_url,
        }
    }

    /// The draft these inputs describe. Unparseable price text becomes zero.
    #[must_use]
    pub fn to_draft(&self) -> NewProduct {
        NewProduct {
            name: self.name.clone(),
            description: self.description.clone(),
            price: coerce_price(&self.price),
            category: self.category.clone(),
            image_url: Some(self.image_url.clone()).filter(|url| !url.is_empty()),
        }
    }
}

/// Result of [`ProductFormScreen::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The draft failed validation and the store was not called.
    Invalid(ValidationErrors),

    /// The store accepted the product.
    Saved {
        /// Confirmation for the user.
        notice: Notice,

        /// Screen to show next.
        navigation: Navigation,
    },

    /// The store rejected or failed the request.
    Failed(Notice),

    /// Another submit is still in flight.
    Busy,
}

#[derive(Debug, Default)]
struct FormState {
    input: FormInput,
    errors: ValidationErrors,
    notice: Option<Notice>,
}

/// Clears the in-flight flag when the submit finishes, however it finishes.
struct SubmitGuard<'a>(&'a AtomicBool);

impl<'a> SubmitGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Form used to create a product or edit an existing one.
pub struct ProductFormScreen {
    store: Arc<dyn ProductStore>,
    mode: FormMode,
    sequence: RequestSequence,
    submitting: AtomicBool,
    state: Mutex<FormState>,
}

impl std::fmt::Debug for ProductFormScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductFormScreen")
            .field("mode", &self.mode)
            .field("submitting", &self.submitting)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl ProductFormScreen {
    /// An empty form that creates a new product.
    #[must_use]
    pub fn create(store: Arc<dyn ProductStore>) -> Self {
        Self::new(store, FormMode::Create)
    }

    /// A form editing `product`; call [`load`](Self::load) to pre-fill it.
    #[must_use]
    pub fn edit(store: Arc<dyn ProductStore>, product: ProductId) -> Self {
        Self::new(store, FormMode::Edit(product))
    }

    fn new(store: Arc<dyn ProductStore>, mode: FormMode) -> Self {
        Self {
            store,
            mode,
            sequence: RequestSequence::default(),
            submitting: AtomicBool::new(false),
            state: Mutex::new(FormState::default()),
        }
    }

    /// Whether this form creates or edits.
    #[must_use]
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Pre-fill the inputs from the stored product. Does nothing in create mode.
    pub async fn load(&self) -> FetchOutcome {
        let FormMode::Edit(product) = self.mode else {
            return FetchOutcome::Applied;
        };

        let ticket = self.sequence.issue();
        let result = self.store.get_product(product).await;

        let mut state = self.state();

        if !self.sequence.is_current(ticket) {
            debug!(product = %product, "discarding superseded form data");
            return FetchOutcome::Discarded;
        }

        match result {
            Ok(Some(record)) => {
                state.input = FormInput::from_record(&record);
                state.errors = ValidationErrors::default();
                FetchOutcome::Applied
            }
            Ok(None) => {
                state.notice = Some(Notice::new(NOT_FOUND));
                FetchOutcome::Failed
            }
            Err(error) => {
                error!("failed to load product {product} for editing: {error}");
                state.notice = Some(Notice::new(LOAD_FAILED));
                FetchOutcome::Failed
            }
        }
    }

    /// Replace the text of one input and clear any error pending on it.
    pub fn set_field(&self, field: FormField, text: &str) {
        let mut state = self.state();

        text.clone_into(state.input.get_mut(field));
        state.errors.clear(field);
    }

    /// Current text of every input.
    #[must_use]
    pub fn input(&self) -> FormInput {
        self.state().input.clone()
    }

    /// Draft built from the current inputs, with the price coerced.
    #[must_use]
    pub fn draft(&self) -> NewProduct {
        self.state().input.to_draft()
    }

    /// Errors from the last submit that the user has not corrected yet.
    #[must_use]
    pub fn errors(&self) -> ValidationErrors {
        self.state().errors.clone()
    }

    /// Pending snackbar message.
    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        self.state().notice
    }

    /// Hide the pending snackbar message.
    pub fn dismiss_notice(&self) {
        self.state().notice = None;
    }

    /// Whether a submit is in flight.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    /// Validate the inputs and, when valid, create or update the product.
    ///
    /// Edits send every field, so an emptied image input clears the stored image.
    pub async fn submit(&self) -> SubmitOutcome {
        let Some(_guard) = SubmitGuard::acquire(&self.submitting) else {
            return SubmitOutcome::Busy;
        };

        let draft = self.draft();
        let errors = validate(&draft);

        if !errors.is_empty() {
            debug!("rejected invalid product form: {errors}");
            self.state().errors = errors.clone();
            return SubmitOutcome::Invalid(errors);
        }

        self.state().errors = ValidationErrors::default();

        let outcome = match self.mode {
            FormMode::Create => match self.store.create_product(draft).await {
                Ok(product) => {
                    info!(product = %product, "created product");
                    SubmitOutcome::Saved {
                        notice: Notice::new(CREATED),
                        navigation: Navigation::ProductDetail(product),
                    }
                }
                Err(error) => {
                    error!("failed to create product: {error}");
                    SubmitOutcome::Failed(Notice::new(CREATE_FAILED))
                }
            },
            FormMode::Edit(product) => {
                let patch = ProductPatch::replace_all(draft);

                match self.store.update_product(product, patch).await {
                    Ok(()) => {
                        info!(product = %product, "updated product");
                        SubmitOutcome::Saved {
                            notice: Notice::new(UPDATED),
                            navigation: Navigation::ProductDetail(product),
                        }
                    }
                    Err(error) => {
                        error!("failed to update product {product}: {error}");
                        SubmitOutcome::Failed(Notice::new(UPDATE_FAILED))
                    }
                }
            }
        };

        if let SubmitOutcome::Saved { notice, .. } | SubmitOutcome::Failed(notice) = &outcome {
            self.state().notice = Some(*notice);
        }

        outcome
    }

    fn state(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
