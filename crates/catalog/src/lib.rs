//! Catalog domain: the item hierarchy and the category aggregate.
//!
//! This crate contains business rules for the retail catalog, implemented as
//! deterministic domain logic (no storage, no HTTP). The stdout notices
//! emitted here are part of the observable behavior, not incidental logging.

pub mod category;
pub mod product;

pub use category::Category;
pub use product::{
    CatalogItem, CreationLog, ItemKind, LawnGrass, Product, ProductRecord, Smartphone,
};
