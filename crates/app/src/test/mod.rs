//! Test infrastructure


pub(crate) use context::TestContext;
pub(crate) use stores::{GatedStore, draft, record};
