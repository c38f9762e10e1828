use crate::domain::account::Account;
use crate::domain::ports::{AccountStore, CatalogStore};
use crate::domain::product::Product;
use crate::error::{Result, ShopError};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

/// The in-memory product catalog shared by every account.
///
/// Categories live in a `BTreeMap` so they iterate in sorted name order;
/// products within a category keep insertion order. `Clone` shares the
/// underlying state.
#[derive(Default, Clone)]
pub struct InMemoryCatalog {
    categories: Arc<RwLock<BTreeMap<String, Vec<Product>>>>,
}

impl InMemoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog seeded with the loaded input records.
    pub fn with_categories(categories: BTreeMap<String, Vec<Product>>) -> Self {
        Self {
            categories: Arc::new(RwLock::new(categories)),
        }
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalog {
    async fn find_product(&self, product_id: &str) -> Result<Option<Product>> {
        let categories = self.categories.read().await;
        Ok(categories
            .values()
            .flatten()
            .find(|product| product.product_id == product_id)
            .cloned())
    }

    async fn adjust_stock(&self, product_id: &str, delta: i64) -> Result<()> {
        let mut categories = self.categories.write().await;
        let product = categories
            .values_mut()
            .flatten()
            .find(|product| product.product_id == product_id)
            .ok_or_else(|| ShopError::ProductNotFound(product_id.to_string()))?;
        product.stock += delta;
        Ok(())
    }

    async fn add_product(&self, category: &str, product: Product) -> Result<()> {
        let mut categories = self.categories.write().await;
        categories
            .entry(category.to_string())
            .or_default()
            .push(product);
        Ok(())
    }

    async fn remove_product(&self, category: &str, product_id: &str) -> Result<()> {
        let mut categories = self.categories.write().await;
        // A missing category reports the same NotFound as a missing product.
        let products = categories
            .get_mut(category)
            .ok_or_else(|| ShopError::ProductNotFound(product_id.to_string()))?;
        let idx = products
            .iter()
            .position(|product| product.product_id == product_id)
            .ok_or_else(|| ShopError::ProductNotFound(product_id.to_string()))?;
        products.remove(idx);
        Ok(())
    }

    async fn add_category(&self, name: &str) -> Result<()> {
        let mut categories = self.categories.write().await;
        if categories.contains_key(name) {
            return Err(ShopError::CategoryExists(name.to_string()));
        }
        categories.insert(name.to_string(), Vec::new());
        Ok(())
    }

    async fn remove_category(&self, name: &str) -> Result<()> {
        let mut categories = self.categories.write().await;
        categories
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| ShopError::CategoryNotFound(name.to_string()))
    }

    async fn categories(&self) -> Result<Vec<(String, Vec<Product>)>> {
        let categories = self.categories.read().await;
        Ok(categories
            .iter()
            .map(|(name, products)| (name.clone(), products.clone()))
            .collect())
    }
}

/// A thread-safe in-memory store for accounts.
///
/// Uses `Arc<RwLock<HashMap<String, Account>>>` for shared access, same
/// shape as the catalog. `Clone` shares the underlying state.
#[derive(Default, Clone)]
pub struct InMemoryAccountStore {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl InMemoryAccountStore {
    /// Creates a new, empty account store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the loaded accounts.
    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        let map = accounts
            .into_iter()
            .map(|account| (account.username.clone(), account))
            .collect();
        Self {
            accounts: Arc::new(RwLock::new(map)),
        }
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn store(&self, account: Account) -> Result<()> {
        let mut accounts = self.accounts.write().await;
        accounts.insert(account.username.clone(), account);
        Ok(())
    }

    async fn get(&self, username: &str) -> Result<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(username).cloned())
    }
}
