use thiserror::Error;

use lavka_core::CatalogError;

/// Loader failure: unreadable file, malformed JSON, or a domain rejection
/// while the records were being inserted.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
