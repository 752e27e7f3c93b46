use anyhow::Result;

use lavka_catalog::{Category, LawnGrass, Product, Smartphone};
use lavka_core::CatalogStats;

fn main() -> Result<()> {
    lavka_observability::init();

    let mut stats = CatalogStats::new();

    let galaxy = Smartphone::new(
        "Samsung Galaxy S23 Ultra",
        "256GB, Серый цвет, 200MP камера",
        180000.0,
        5,
        95.5,
        "S23 Ultra",
        256,
        "Серый",
    )?;
    let iphone = Smartphone::new(
        "Iphone 15",
        "512GB, Gray space",
        210000.0,
        8,
        98.2,
        "15",
        512,
        "Gray space",
    )?;

    let mut phones = Category::new(
        "Смартфоны",
        "Смартфоны, как средство не только коммуникации, но и получения \
         дополнительных функций для удобства жизни",
        vec![galaxy.into(), iphone.into()],
        &mut stats,
    )?;

    let redmi = Smartphone::new(
        "Xiaomi Redmi Note 11",
        "1024GB, Синий",
        31000.0,
        14,
        90.3,
        "Note 11",
        1024,
        "Синий",
    )?;
    phones.add_product(redmi.into(), &mut stats)?;

    println!();
    println!("Список товаров в категории:");
    println!("{}", phones.products_listing());

    let combined = (&phones.products()[0] + &phones.products()[1])?;
    println!("Суммарная стоимость первых двух товаров: {combined} руб.");

    let grass = LawnGrass::new(
        "Газонная трава",
        "Элитная трава для газона",
        500.0,
        20,
        "Россия",
        "7 дней",
        "Зеленый",
    )?;
    let garden = Category::new("Сад", "Товары для сада и огорода", vec![grass.into()], &mut stats)?;

    if let Err(err) = phones.products()[0].combine(&garden.products()[0]) {
        println!("{err}");
    }

    println!();
    println!("Тестирование сеттера цены:");
    let mut tv = Product::new("55\" QLED 4K", "Фоновая подсветка", 123000.0, 7)?;
    println!("Текущая цена: {}", tv.price());
    tv.set_price(98000.0);
    println!("Цена после установки 98000: {}", tv.price());
    tv.set_price(-100.0);
    println!("Цена после попытки установить -100: {}", tv.price());
    tv.set_price(0.0);
    println!("Цена после попытки установить 0: {}", tv.price());

    println!();
    println!("{phones}");
    println!("Средняя цена в категории: {}", phones.mean_price());
    println!("Категорий всего: {}", stats.categories());
    println!("Товаров всего: {}", stats.products());

    if let Some(path) = std::env::args().nth(1) {
        tracing::info!(path = %path, "loading catalog file");
        println!();
        let categories = lavka_loader::load_catalog(&path, &mut stats)?;
        for category in &categories {
            println!("{category}");
            println!("{}", category.products_listing());
        }
        println!("Категорий всего: {}", stats.categories());
        println!("Товаров всего: {}", stats.products());
    }

    Ok(())
}
