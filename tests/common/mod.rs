use rust_decimal::Decimal;
use shopcart::application::engine::ShopEngine;
use shopcart::domain::account::{Account, Role};
use shopcart::domain::ports::{AccountStoreBox, CatalogStoreBox};
use shopcart::domain::product::Product;
use shopcart::infrastructure::in_memory::{InMemoryAccountStore, InMemoryCatalog};
use std::collections::BTreeMap;

pub fn product(id: &str, name: &str, stock: i64, price: Decimal) -> Product {
    Product::new(id.to_string(), name.to_string(), stock, price)
}

/// Engine over a custom catalog, with the standard two accounts:
/// "alice"/"wonderland" (shopper) and "bob"/"builder" (administrator).
pub fn engine_with(categories: BTreeMap<String, Vec<Product>>) -> ShopEngine {
    let catalog: CatalogStoreBox = Box::new(InMemoryCatalog::with_categories(categories));
    let accounts: AccountStoreBox = Box::new(InMemoryAccountStore::with_accounts(vec![
        Account::new("alice".to_string(), "wonderland".to_string(), Role::Shopper),
        Account::new("bob".to_string(), "builder".to_string(), Role::Administrator),
    ]));
    ShopEngine::new(catalog, accounts)
}

/// The standard seeded engine used across the integration tests.
pub fn seeded_engine() -> ShopEngine {
    use rust_decimal_macros::dec;

    let mut categories = BTreeMap::new();
    categories.insert(
        "Electronics".to_string(),
        vec![
            product("p1", "Laptop", 10, dec!(500)),
            product("p2", "Phone", 0, dec!(300)),
            product("p3", "Headphones", 2, dec!(50)),
        ],
    );
    categories.insert("Books".to_string(), vec![product("b1", "Novel", 5, dec!(10))]);
    engine_with(categories)
}

/// Stock of one product as the catalog currently reports it.
pub async fn stock_of(engine: &ShopEngine, product_id: &str) -> Option<i64> {
    engine
        .view_catalog()
        .await
        .unwrap()
        .into_iter()
        .flat_map(|(_, products)| products)
        .find(|p| p.product_id == product_id)
        .map(|p| p.stock)
}
