use std::fs;
use std::path::Path;

use serde::Deserialize;

use lavka_catalog::{Category, Product, ProductRecord};
use lavka_core::CatalogStats;

use crate::error::LoadError;

/// External record shape for one category.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryRecord {
    pub name: String,
    pub description: String,
    pub products: Vec<ProductRecord>,
}

/// Parse a JSON document of category records into domain objects.
///
/// Categories are built empty and filled through [`Product::from_record`] and
/// [`Category::add_product`], one record at a time, so validation and the
/// registry counters behave exactly as they do for by-hand construction.
pub fn parse_catalog(
    json: &str,
    stats: &mut CatalogStats,
) -> Result<Vec<Category>, LoadError> {
    let records: Vec<CategoryRecord> = serde_json::from_str(json)?;

    let mut categories = Vec::with_capacity(records.len());
    for record in records {
        let mut category = Category::new(record.name, record.description, Vec::new(), stats)?;
        for product in record.products {
            let product = Product::from_record(product)?;
            category.add_product(product.into(), stats)?;
        }
        tracing::debug!(category = %category.name(), products = category.len(), "category loaded");
        categories.push(category);
    }

    tracing::info!(categories = categories.len(), "catalog loaded");
    Ok(categories)
}

/// Read and parse a catalog file.
pub fn load_catalog(
    path: impl AsRef<Path>,
    stats: &mut CatalogStats,
) -> Result<Vec<Category>, LoadError> {
    let json = fs::read_to_string(path)?;
    parse_catalog(&json, stats)
}
