//! Action vocabulary, legality catalog and the sequences resource loader

pub mod catalog;
pub mod loader;

pub use catalog::{ActionClass, ActionId, MovementCatalog};
