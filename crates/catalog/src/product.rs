use std::fmt;
use std::io::{self, Write};
use std::ops::Add;

use serde::{Deserialize, Serialize};

use lavka_core::{CatalogError, CatalogResult, Merchandise};

/// Discriminant of a concrete item variant.
///
/// Two items combine only when their discriminants match exactly; satisfying
/// [`Merchandise`] alone is not enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Product,
    Smartphone,
    LawnGrass,
}

/// External record shape for a plain product, as found in catalog files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: u32,
}

/// A plain catalog product.
///
/// `price` stays strictly positive after a valid construction because the only
/// way to change it is the guarded [`Product::set_price`]; `quantity` is fixed
/// once the item exists.
#[derive(Clone, PartialEq)]
pub struct Product {
    name: String,
    description: String,
    price: f64,
    quantity: u32,
}

impl Product {
    // Shared by every variant constructor: the one construction-time check is
    // the quantity, the price is accepted as given.
    fn build(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: u32,
    ) -> CatalogResult<Self> {
        if quantity == 0 {
            return Err(CatalogError::ZeroQuantity);
        }
        Ok(Self {
            name: name.into(),
            description: description.into(),
            price,
            quantity,
        })
    }

    /// Construct a plain product, announcing the creation record on stdout.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: u32,
    ) -> CatalogResult<Self> {
        let product = Self::build(name, description, price, quantity)?;
        product.log_creation();
        Ok(product)
    }

    /// Named factory mapping an external record onto a product.
    pub fn from_record(record: ProductRecord) -> CatalogResult<Self> {
        Self::new(record.name, record.description, record.price, record.quantity)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Update the price.
    ///
    /// A zero or negative value is a soft reject: the current price stays in
    /// place and a notice goes to stdout. This never returns an error.
    pub fn set_price(&mut self, price: f64) {
        if price <= 0.0 {
            println!("Цена не должна быть нулевая или отрицательная");
            return;
        }
        self.price = price;
    }
}

/// A smartphone: a product with performance and hardware attributes.
#[derive(Clone, PartialEq)]
pub struct Smartphone {
    base: Product,
    efficiency: f64,
    model: String,
    memory: u32,
    color: String,
}

impl Smartphone {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: u32,
        efficiency: f64,
        model: impl Into<String>,
        memory: u32,
        color: impl Into<String>,
    ) -> CatalogResult<Self> {
        let base = Product::build(name, description, price, quantity)?;
        let phone = Self {
            base,
            efficiency,
            model: model.into(),
            memory,
            color: color.into(),
        };
        phone.log_creation();
        Ok(phone)
    }

    pub fn name(&self) -> &str {
        self.base.name()
    }

    pub fn description(&self) -> &str {
        self.base.description()
    }

    pub fn price(&self) -> f64 {
        self.base.price()
    }

    pub fn quantity(&self) -> u32 {
        self.base.quantity()
    }

    pub fn set_price(&mut self, price: f64) {
        self.base.set_price(price);
    }

    pub fn efficiency(&self) -> f64 {
        self.efficiency
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn memory(&self) -> u32 {
        self.memory
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}

/// Lawn grass: a product with agronomic attributes.
#[derive(Clone, PartialEq)]
pub struct LawnGrass {
    base: Product,
    country: String,
    germination_period: String,
    color: String,
}

impl LawnGrass {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: u32,
        country: impl Into<String>,
        germination_period: impl Into<String>,
        color: impl Into<String>,
    ) -> CatalogResult<Self> {
        let base = Product::build(name, description, price, quantity)?;
        let grass = Self {
            base,
            country: country.into(),
            germination_period: germination_period.into(),
            color: color.into(),
        };
        grass.log_creation();
        Ok(grass)
    }

    pub fn name(&self) -> &str {
        self.base.name()
    }

    pub fn description(&self) -> &str {
        self.base.description()
    }

    pub fn price(&self) -> f64 {
        self.base.price()
    }

    pub fn quantity(&self) -> u32 {
        self.base.quantity()
    }

    pub fn set_price(&mut self, price: f64) {
        self.base.set_price(price);
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn germination_period(&self) -> &str {
        &self.germination_period
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}

/// Tagged union over the concrete item variants.
///
/// Categories hold these; the tag is what [`CatalogItem::combine`] compares.
#[derive(Clone, PartialEq)]
pub enum CatalogItem {
    Product(Product),
    Smartphone(Smartphone),
    LawnGrass(LawnGrass),
}

impl CatalogItem {
    pub fn kind(&self) -> ItemKind {
        match self {
            CatalogItem::Product(_) => ItemKind::Product,
            CatalogItem::Smartphone(_) => ItemKind::Smartphone,
            CatalogItem::LawnGrass(_) => ItemKind::LawnGrass,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            CatalogItem::Product(p) => p.name(),
            CatalogItem::Smartphone(p) => p.name(),
            CatalogItem::LawnGrass(p) => p.name(),
        }
    }

    pub fn description(&self) -> &str {
        match self {
            CatalogItem::Product(p) => p.description(),
            CatalogItem::Smartphone(p) => p.description(),
            CatalogItem::LawnGrass(p) => p.description(),
        }
    }

    pub fn price(&self) -> f64 {
        match self {
            CatalogItem::Product(p) => p.price(),
            CatalogItem::Smartphone(p) => p.price(),
            CatalogItem::LawnGrass(p) => p.price(),
        }
    }

    pub fn quantity(&self) -> u32 {
        match self {
            CatalogItem::Product(p) => p.quantity(),
            CatalogItem::Smartphone(p) => p.quantity(),
            CatalogItem::LawnGrass(p) => p.quantity(),
        }
    }

    pub fn set_price(&mut self, price: f64) {
        match self {
            CatalogItem::Product(p) => p.set_price(price),
            CatalogItem::Smartphone(p) => p.set_price(price),
            CatalogItem::LawnGrass(p) => p.set_price(price),
        }
    }

    /// Scalar stock value of two items of the same variant:
    /// `price₁·quantity₁ + price₂·quantity₂`.
    ///
    /// Items of different variants do not combine, even though both satisfy
    /// [`Merchandise`].
    pub fn combine(&self, other: &CatalogItem) -> CatalogResult<f64> {
        if self.kind() != other.kind() {
            return Err(CatalogError::IncompatibleVariant);
        }
        Ok(self.stock_value() + other.stock_value())
    }

    fn stock_value(&self) -> f64 {
        self.price() * f64::from(self.quantity())
    }
}

impl Add<&CatalogItem> for &CatalogItem {
    type Output = CatalogResult<f64>;

    fn add(self, other: &CatalogItem) -> Self::Output {
        self.combine(other)
    }
}

impl From<Product> for CatalogItem {
    fn from(product: Product) -> Self {
        CatalogItem::Product(product)
    }
}

impl From<Smartphone> for CatalogItem {
    fn from(phone: Smartphone) -> Self {
        CatalogItem::Smartphone(phone)
    }
}

impl From<LawnGrass> for CatalogItem {
    fn from(grass: LawnGrass) -> Self {
        CatalogItem::LawnGrass(grass)
    }
}

impl Merchandise for Product {
    fn name(&self) -> &str {
        self.name()
    }

    fn price(&self) -> f64 {
        self.price()
    }
}

impl Merchandise for Smartphone {
    fn name(&self) -> &str {
        self.name()
    }

    fn price(&self) -> f64 {
        self.price()
    }
}

impl Merchandise for LawnGrass {
    fn name(&self) -> &str {
        self.name()
    }

    fn price(&self) -> f64 {
        self.price()
    }
}

impl Merchandise for CatalogItem {
    fn name(&self) -> &str {
        self.name()
    }

    fn price(&self) -> f64 {
        self.price()
    }
}

/// Creation-record hook.
///
/// Every freshly constructed item announces itself once, before it is handed
/// to the caller. The record is the [`fmt::Debug`] representation; the
/// writer-taking variant lets tests capture the record instead of stdout.
pub trait CreationLog: fmt::Debug {
    /// Emit the creation record to stdout.
    fn log_creation(&self) {
        println!("{self:?}");
    }

    /// Emit the creation record to an arbitrary writer.
    fn log_creation_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{self:?}")
    }
}

impl CreationLog for Product {}
impl CreationLog for Smartphone {}
impl CreationLog for LawnGrass {}
impl CreationLog for CatalogItem {}

// Prices and other decimals print with at least one decimal place, so the
// display lines and creation records keep a stable shape (`100.0`, `95.5`).
fn fmt_decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} руб. Остаток: {} шт.",
            self.name,
            fmt_decimal(self.price),
            self.quantity
        )
    }
}

impl fmt::Display for Smartphone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.base, f)
    }
}

impl fmt::Display for LawnGrass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.base, f)
    }
}

impl fmt::Display for CatalogItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogItem::Product(p) => fmt::Display::fmt(p, f),
            CatalogItem::Smartphone(p) => fmt::Display::fmt(p, f),
            CatalogItem::LawnGrass(p) => fmt::Display::fmt(p, f),
        }
    }
}

// Debug output is the reconstructible creation record: variant name plus the
// constructor arguments in declaration order.

impl fmt::Debug for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product('{}', '{}', {}, {})",
            self.name,
            self.description,
            fmt_decimal(self.price),
            self.quantity
        )
    }
}

impl fmt::Debug for Smartphone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Smartphone('{}', '{}', {}, {}, {}, '{}', {}, '{}')",
            self.base.name,
            self.base.description,
            fmt_decimal(self.base.price),
            self.base.quantity,
            fmt_decimal(self.efficiency),
            self.model,
            self.memory,
            self.color
        )
    }
}

impl fmt::Debug for LawnGrass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LawnGrass('{}', '{}', {}, {}, '{}', '{}', '{}')",
            self.base.name,
            self.base.description,
            fmt_decimal(self.base.price),
            self.base.quantity,
            self.country,
            self.germination_period,
            self.color
        )
    }
}

impl fmt::Debug for CatalogItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogItem::Product(p) => fmt::Debug::fmt(p, f),
            CatalogItem::Smartphone(p) => fmt::Debug::fmt(p, f),
            CatalogItem::LawnGrass(p) => fmt::Debug::fmt(p, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone() -> Smartphone {
        Smartphone::new(
            "Смарт",
            "Описание",
            200.0,
            3,
            95.5,
            "Модель X",
            256,
            "Черный",
        )
        .unwrap()
    }

    fn grass() -> LawnGrass {
        LawnGrass::new(
            "Трава",
            "Описание",
            500.0,
            10,
            "Россия",
            "7 дней",
            "Зеленый",
        )
        .unwrap()
    }

    #[test]
    fn zero_quantity_is_rejected_for_every_variant() {
        assert_eq!(
            Product::new("Тест", "Описание", 100.0, 0).unwrap_err(),
            CatalogError::ZeroQuantity
        );
        assert_eq!(
            Smartphone::new("Смарт", "Описание", 200.0, 0, 95.5, "Модель", 128, "Черный")
                .unwrap_err(),
            CatalogError::ZeroQuantity
        );
        assert_eq!(
            LawnGrass::new("Трава", "Описание", 500.0, 0, "Россия", "7 дней", "Зеленый")
                .unwrap_err(),
            CatalogError::ZeroQuantity
        );
    }

    #[test]
    fn price_is_not_checked_at_construction() {
        // Only the setter guards the price; the constructor takes it as given.
        let product = Product::new("Тест", "Описание", -5.0, 1).unwrap();
        assert_eq!(product.price(), -5.0);
    }

    #[test]
    fn display_reproduces_the_template() {
        let product = Product::new("Телефон", "Смартфон", 50000.0, 10).unwrap();
        assert_eq!(product.to_string(), "Телефон, 50000.0 руб. Остаток: 10 шт.");

        let item = CatalogItem::from(phone());
        assert_eq!(item.to_string(), "Смарт, 200.0 руб. Остаток: 3 шт.");
    }

    #[test]
    fn display_keeps_fractional_prices_as_is() {
        let product = Product::new("Тест", "Описание", 99.5, 2).unwrap();
        assert_eq!(product.to_string(), "Тест, 99.5 руб. Остаток: 2 шт.");
    }

    #[test]
    fn set_price_rejects_non_positive_values() {
        let mut product = Product::new("Тест", "Описание", 100.0, 5).unwrap();

        product.set_price(-50.0);
        assert_eq!(product.price(), 100.0);

        product.set_price(0.0);
        assert_eq!(product.price(), 100.0);

        product.set_price(150.0);
        assert_eq!(product.price(), 150.0);
    }

    #[test]
    fn set_price_delegates_through_variants() {
        let mut item = CatalogItem::from(phone());
        item.set_price(0.0);
        assert_eq!(item.price(), 200.0);
        item.set_price(250.0);
        assert_eq!(item.price(), 250.0);
    }

    #[test]
    fn from_record_equals_direct_construction() {
        let record = ProductRecord {
            name: "Новый товар".to_string(),
            description: "Описание".to_string(),
            price: 200.0,
            quantity: 3,
        };
        let product = Product::from_record(record).unwrap();
        assert_eq!(product.name(), "Новый товар");
        assert_eq!(product.price(), 200.0);
        assert_eq!(product.quantity(), 3);
        assert_eq!(
            product,
            Product::new("Новый товар", "Описание", 200.0, 3).unwrap()
        );
    }

    #[test]
    fn smartphone_keeps_its_extra_fields() {
        let phone = phone();
        assert_eq!(phone.name(), "Смарт");
        assert_eq!(phone.price(), 200.0);
        assert_eq!(phone.efficiency(), 95.5);
        assert_eq!(phone.model(), "Модель X");
        assert_eq!(phone.memory(), 256);
        assert_eq!(phone.color(), "Черный");
    }

    #[test]
    fn lawn_grass_keeps_its_extra_fields() {
        let grass = grass();
        assert_eq!(grass.country(), "Россия");
        assert_eq!(grass.germination_period(), "7 дней");
        assert_eq!(grass.color(), "Зеленый");
    }

    #[test]
    fn creation_record_is_reconstructible() {
        let product = Product::new("Тестовый продукт", "Описание", 100.0, 5).unwrap();
        assert_eq!(
            format!("{product:?}"),
            "Product('Тестовый продукт', 'Описание', 100.0, 5)"
        );

        assert_eq!(
            format!("{:?}", phone()),
            "Smartphone('Смарт', 'Описание', 200.0, 3, 95.5, 'Модель X', 256, 'Черный')"
        );

        assert_eq!(
            format!("{:?}", grass()),
            "LawnGrass('Трава', 'Описание', 500.0, 10, 'Россия', '7 дней', 'Зеленый')"
        );
    }

    #[test]
    fn creation_record_goes_to_the_injected_writer() {
        let product = Product::new("Тест", "Описание", 100.0, 5).unwrap();
        let mut out = Vec::new();
        product.log_creation_to(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Product('Тест', 'Описание', 100.0, 5)\n"
        );
    }

    #[test]
    fn combine_sums_stock_value_within_a_variant() {
        let a = CatalogItem::from(Product::new("Товар1", "Описание", 100.0, 2).unwrap());
        let b = CatalogItem::from(Product::new("Товар2", "Описание", 200.0, 3).unwrap());
        assert_eq!(a.combine(&b).unwrap(), 100.0 * 2.0 + 200.0 * 3.0);
    }

    #[test]
    fn combine_matches_the_storefront_example() {
        let a = CatalogItem::from(Product::new("Phone", "desc", 180000.0, 5).unwrap());
        let b = CatalogItem::from(Product::new("Tab", "desc", 210000.0, 8).unwrap());
        assert_eq!(a.combine(&b).unwrap(), 2_580_000.0);
    }

    #[test]
    fn combine_rejects_mismatched_variants() {
        let phone = CatalogItem::from(phone());
        let grass = CatalogItem::from(grass());
        assert_eq!(
            phone.combine(&grass).unwrap_err(),
            CatalogError::IncompatibleVariant
        );
        // A plain product is just as incompatible with a smartphone.
        let plain = CatalogItem::from(Product::new("Тест", "Описание", 100.0, 1).unwrap());
        assert_eq!(
            plain.combine(&phone).unwrap_err(),
            CatalogError::IncompatibleVariant
        );
    }

    #[test]
    fn combine_within_a_specialized_variant_succeeds() {
        let a = CatalogItem::from(phone());
        let b = CatalogItem::from(
            Smartphone::new("Другой", "Описание", 100.0, 2, 80.0, "Y", 64, "Белый").unwrap(),
        );
        assert_eq!(a.combine(&b).unwrap(), 200.0 * 3.0 + 100.0 * 2.0);
    }

    #[test]
    fn add_operator_is_combine() {
        let a = CatalogItem::from(Product::new("Товар1", "Описание", 100.0, 2).unwrap());
        let b = CatalogItem::from(Product::new("Товар2", "Описание", 200.0, 3).unwrap());
        assert_eq!((&a + &b).unwrap(), a.combine(&b).unwrap());
    }

    #[test]
    fn merchandise_contract_is_satisfied_by_every_variant() {
        fn describe(item: &dyn Merchandise) -> String {
            format!("{} по {}", Merchandise::name(item), item.price())
        }

        assert_eq!(describe(&phone()), "Смарт по 200");
        assert_eq!(describe(&grass()), "Трава по 500");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: the setter either applies a positive price or leaves
            /// the old one untouched.
            #[test]
            fn set_price_applies_or_ignores(
                initial in 0.01f64..1_000_000.0,
                update in -1_000_000.0f64..1_000_000.0,
            ) {
                let mut product = Product::new("Товар", "Описание", initial, 1).unwrap();
                product.set_price(update);
                if update > 0.0 {
                    prop_assert_eq!(product.price(), update);
                } else {
                    prop_assert_eq!(product.price(), initial);
                }
            }

            /// Property: combine is commutative within a variant.
            #[test]
            fn combine_is_commutative(
                price_a in 0.01f64..1_000_000.0,
                qty_a in 1u32..1_000,
                price_b in 0.01f64..1_000_000.0,
                qty_b in 1u32..1_000,
            ) {
                let a = CatalogItem::from(Product::new("А", "Описание", price_a, qty_a).unwrap());
                let b = CatalogItem::from(Product::new("Б", "Описание", price_b, qty_b).unwrap());
                prop_assert_eq!(a.combine(&b).unwrap(), b.combine(&a).unwrap());
            }

            /// Property: the display line keeps the literal template shape for
            /// any valid item.
            #[test]
            fn display_keeps_template_shape(
                name in "[A-Za-z][A-Za-z0-9 ]{0,19}",
                price in 0.01f64..1_000_000.0,
                quantity in 1u32..1_000,
            ) {
                let product = Product::new(name.clone(), "Описание", price, quantity).unwrap();
                let line = product.to_string();
                let prefix = format!("{}, ", name);
                let suffix = format!("{} шт.", quantity);
                prop_assert!(line.starts_with(&prefix));
                prop_assert!(line.contains(" руб. Остаток: "));
                prop_assert!(line.ends_with(&suffix));
            }

            /// Property: every positive quantity constructs, zero never does.
            #[test]
            fn quantity_gate_is_exact(quantity in 0u32..1_000) {
                let result = Product::new("Товар", "Описание", 100.0, quantity);
                if quantity == 0 {
                    prop_assert_eq!(result.unwrap_err(), CatalogError::ZeroQuantity);
                } else {
                    prop_assert_eq!(result.unwrap().quantity(), quantity);
                }
            }
        }
    }
}
