//! Prelude
//!
//! Re-exports of the types most callers need.

pub use crate::{
    filter::{ALL_CATEGORIES, CATEGORIES, ProductFilter},
    pricing::{coerce_price, format_price},
    products::{NewProduct, ProductId, ProductPatch, ProductRecord},
    validation::{FormField, ValidationErrors, validate},
};
