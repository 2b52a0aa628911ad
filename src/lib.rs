//! Catalog
//!
//! Product catalog domain: product records, draft validation and client-side list filtering.
//! Nothing in this crate performs I/O; stores and screens live in `catalog-app`.

pub mod filter;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod uuids;
pub mod validation;
