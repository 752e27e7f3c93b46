//! Merchandise trait: the capability every catalog item provides.

/// Minimal interface of a sellable item.
///
/// Anything held by a category exposes a name and a current price; the
/// concrete variant decides what else it carries.
pub trait Merchandise {
    /// Display name of the item.
    fn name(&self) -> &str;

    /// Current price of the item.
    fn price(&self) -> f64;
}
