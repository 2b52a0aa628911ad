//! Draft validation
//!
//! Checks a [`NewProduct`] before it is handed to a store. Every rule is independent, so a single
//! pass reports all failing fields at once. Validation is a create/edit gate only: stores accept
//! whatever they are given.

use std::{
    collections::{BTreeMap, btree_map},
    fmt::{Display, Formatter, Result as FmtResult},
    sync::LazyLock,
};

use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::products::NewProduct;

/// Message shown when the name is blank.
pub const NAME_REQUIRED: &str = "Le nom est requis";

/// Message shown when the description is blank.
pub const DESCRIPTION_REQUIRED: &str = "La description est requise";

/// Message shown when the price is zero, negative or could not be read.
pub const PRICE_NOT_POSITIVE: &str = "Le prix doit être supérieur à 0";

/// Message shown when the category is blank.
pub const CATEGORY_REQUIRED: &str = "La catégorie est requise";

/// Message shown when a non-empty image URL is not an `http(s)` URL.
pub const IMAGE_URL_INVALID: &str = "L'URL de l'image doit être une URL valide";

#[expect(
    clippy::expect_used,
    reason = "the pattern is a constant and covered by tests"
)]
static IMAGE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://.+").expect("image URL pattern should compile"));

/// Editable form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    /// Product name
    Name,

    /// Product description
    Description,

    /// Product price
    Price,

    /// Category label
    Category,

    /// Optional image URL
    ImageUrl,
}

impl FormField {
    /// Every field, in form order.
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Description,
        Self::Price,
        Self::Category,
        Self::ImageUrl,
    ];

    /// Field key as it appears in persisted documents.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::Price => "price",
            Self::Category => "category",
            Self::ImageUrl => "imageUrl",
        }
    }
}

impl Display for FormField {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Per-field validation failures. Empty means the draft is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<FormField, &'static str>);

impl ValidationErrors {
    /// Whether no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message for `field`, if it failed.
    #[must_use]
    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    /// Whether `field` failed.
    #[must_use]
    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    /// Drop the error for `field`, returning its message.
    pub fn clear(&mut self, field: FormField) -> Option<&'static str> {
        self.0.remove(&field)
    }

    /// Failing fields and their messages, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &'static str)> {
        self.0.iter().map(|(field, message)| (*field, *message))
    }

    fn insert(&mut self, field: FormField, message: &'static str) {
        self.0.insert(field, message);
    }
}

impl IntoIterator for ValidationErrors {
    type Item = (FormField, &'static str);
    type IntoIter = btree_map::IntoIter<FormField, &'static str>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (index, (field, message)) in self.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }

            write!(f, "{field}: {message}")?;
        }

        Ok(())
    }
}

/// Validate a draft, reporting every failing field.
pub fn validate(draft: &NewProduct) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if draft.name.trim().is_empty() {
        errors.insert(FormField::Name, NAME_REQUIRED);
    }

    if draft.description.trim().is_empty() {
        errors.insert(FormField::Description, DESCRIPTION_REQUIRED);
    }

    if draft.price <= Decimal::ZERO {
        errors.insert(FormField::Price, PRICE_NOT_POSITIVE);
    }

    if draft.category.trim().is_empty() {
        errors.insert(FormField::Category, CATEGORY_REQUIRED);
    }

    if let Some(image_url) = draft.image_url.as_deref()
        && !image_url.is_empty()
        && !is_valid_image_url(image_url)
    {
        errors.insert(FormField::ImageUrl, IMAGE_URL_INVALID);
    }

    errors
}

/// Whether `url` is an `http(s)` URL with something after the scheme.
pub fn is_valid_image_url(url: &str) -> bool {
    IMAGE_URL.is_match(url)
}
