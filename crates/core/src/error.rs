//! Domain error model.

use thiserror::Error;

/// Result type used across the catalog domain.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// A closed set of deterministic domain failures. The display strings are
/// user-facing; the insertion paths echo them verbatim into their stdout
/// diagnostics.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CatalogError {
    /// A zero quantity is outside the value domain of a catalog item.
    ///
    /// This is the value-domain member of the set; callers that match broadly
    /// should treat it like any other invalid-value failure.
    #[error("Товар с нулевым количеством не может быть добавлен")]
    ZeroQuantity,

    /// The value offered to a category is not a catalog item.
    #[error("Можно добавлять только продукты или их наследники")]
    IncompatibleMember,

    /// Two items of different concrete variants cannot be combined.
    #[error("Нельзя складывать товары разных классов")]
    IncompatibleVariant,
}
