use std::any::Any;
use std::fmt;

use lavka_core::{CatalogError, CatalogResult, CatalogStats};

use crate::product::{CatalogItem, LawnGrass, Product, Smartphone};

/// An owning aggregate of catalog items with membership validation and
/// derived statistics.
///
/// The member sequence is private: every entry goes through the validated
/// insertion path, so the collection never holds a zero-quantity item.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    name: String,
    description: String,
    products: Vec<CatalogItem>,
}

impl Category {
    /// Construct a category, routing every initial item through the same
    /// validated insertion path as later additions.
    ///
    /// The category counter is bumped before the initial items go in, so a
    /// failed insertion still leaves the construction attempt counted.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        initial: Vec<CatalogItem>,
        stats: &mut CatalogStats,
    ) -> CatalogResult<Self> {
        let mut category = Self {
            name: name.into(),
            description: description.into(),
            products: Vec::new(),
        };
        stats.record_category();
        for item in initial {
            category.add_product(item, stats)?;
        }
        Ok(category)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Read-only view of the members, in insertion order.
    pub fn products(&self) -> &[CatalogItem] {
        &self.products
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Live sum of member quantities, recomputed on each call.
    pub fn total_quantity(&self) -> u64 {
        self.products.iter().map(|p| u64::from(p.quantity())).sum()
    }

    /// Arithmetic mean of member prices; zero for an empty category.
    pub fn mean_price(&self) -> f64 {
        if self.products.is_empty() {
            return 0.0;
        }
        let total: f64 = self.products.iter().map(CatalogItem::price).sum();
        total / self.products.len() as f64
    }

    /// Newline-joined display lines of the members; empty string when empty.
    pub fn products_listing(&self) -> String {
        self.products
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Validated insertion of a catalog item.
    ///
    /// On success the item is appended, the product counter is bumped and a
    /// success notice is printed; on failure the error notice is printed and
    /// the error propagates. Either way the completion notice is printed last.
    pub fn add_product(
        &mut self,
        item: CatalogItem,
        stats: &mut CatalogStats,
    ) -> CatalogResult<()> {
        let outcome = self.insert(item, stats);
        self.finish_insert(outcome)
    }

    /// Dynamic insertion path: accepts any value, keeps only catalog items.
    ///
    /// A value that is not part of the item hierarchy fails with
    /// [`CatalogError::IncompatibleMember`], going through the same notice
    /// sequence as every other insertion.
    pub fn add_member(
        &mut self,
        member: Box<dyn Any>,
        stats: &mut CatalogStats,
    ) -> CatalogResult<()> {
        let outcome = coerce(member).and_then(|item| self.insert(item, stats));
        self.finish_insert(outcome)
    }

    fn insert(&mut self, item: CatalogItem, stats: &mut CatalogStats) -> CatalogResult<String> {
        if item.quantity() == 0 {
            return Err(CatalogError::ZeroQuantity);
        }
        let name = item.name().to_owned();
        self.products.push(item);
        stats.record_product();
        Ok(name)
    }

    // Every insertion exit flows through here, so the completion notice is
    // printed on success and failure alike before the result propagates.
    fn finish_insert(&self, outcome: CatalogResult<String>) -> CatalogResult<()> {
        match &outcome {
            Ok(name) => println!(
                "Товар '{}' успешно добавлен в категорию '{}'",
                name, self.name
            ),
            Err(err) => println!("Ошибка при добавлении товара: {err}"),
        }
        println!("Обработка добавления товара завершена");
        outcome.map(drop)
    }
}

/// Downcast an arbitrary value to a catalog item.
///
/// Bare variants are accepted alongside the tagged union, mirroring how the
/// constructors hand out concrete types.
fn coerce(member: Box<dyn Any>) -> CatalogResult<CatalogItem> {
    let member = match member.downcast::<CatalogItem>() {
        Ok(item) => return Ok(*item),
        Err(other) => other,
    };
    let member = match member.downcast::<Product>() {
        Ok(product) => return Ok(CatalogItem::from(*product)),
        Err(other) => other,
    };
    let member = match member.downcast::<Smartphone>() {
        Ok(phone) => return Ok(CatalogItem::from(*phone)),
        Err(other) => other,
    };
    match member.downcast::<LawnGrass>() {
        Ok(grass) => Ok(CatalogItem::from(*grass)),
        Err(_) => Err(CatalogError::IncompatibleMember),
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, количество продуктов: {} шт.",
            self.name,
            self.total_quantity()
        )
    }
}
