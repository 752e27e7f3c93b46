//! JSON catalog loading.
//!
//! Maps external category records onto domain objects, routing every product
//! through the same validated insertion path used for by-hand construction,
//! so counters and notices fire identically either way.

pub mod error;
pub mod json;

pub use error::LoadError;
pub use json::{CategoryRecord, load_catalog, parse_catalog};
