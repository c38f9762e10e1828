use super::account::Account;
use super::product::Product;
use crate::error::Result;
use async_trait::async_trait;

/// Storage port for the shared product catalog.
///
/// Implementations are trusted: they apply mutations as asked and leave
/// business rules (stock checks, role gates) to the caller.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Scans categories in order and returns the first product with this id.
    async fn find_product(&self, product_id: &str) -> Result<Option<Product>>;
    /// Adds `delta` to the product's stock. Does not clamp at zero.
    async fn adjust_stock(&self, product_id: &str, delta: i64) -> Result<()>;
    /// Appends to the category, creating it if absent. Duplicate ids are
    /// not rejected.
    async fn add_product(&self, category: &str, product: Product) -> Result<()>;
    /// Removes the first matching product in the category.
    async fn remove_product(&self, category: &str, product_id: &str) -> Result<()>;
    async fn add_category(&self, name: &str) -> Result<()>;
    async fn remove_category(&self, name: &str) -> Result<()>;
    /// Snapshot of all categories and their products, for display.
    async fn categories(&self) -> Result<Vec<(String, Vec<Product>)>>;
}

pub type CatalogStoreBox = Box<dyn CatalogStore>;

/// Storage port for accounts keyed by username.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn store(&self, account: Account) -> Result<()>;
    async fn get(&self, username: &str) -> Result<Option<Account>>;
}

pub type AccountStoreBox = Box<dyn AccountStore>;
