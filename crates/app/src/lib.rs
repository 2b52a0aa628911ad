//! Shared application domain, persistence and screen modules.

pub mod context;
pub mod database;
pub mod domain;
pub mod screens;

#[cfg(test)]
mod test;
