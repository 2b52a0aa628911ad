//! Products

pub mod errors;
pub mod memory;
pub mod remote;
mod repository;
pub mod service;

pub use errors::ProductStoreError;
pub use memory::MemoryProductStore;
pub use remote::HttpProductStore;
pub use service::*;
