use crate::domain::account::{Account, Role};
use crate::domain::cart::{CartLine, Quantity};
use crate::domain::payment::{PaymentMethod, Receipt};
use crate::domain::ports::{AccountStoreBox, CatalogStoreBox};
use crate::domain::product::Product;
use crate::error::{Result, ShopError};
use tracing::{debug, warn};

/// What a successful login hands back to the caller: the fresh session token
/// and the role used to pick the right menu.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginSession {
    pub token: String,
    pub role: Role,
}

/// The entry point for every shop operation.
///
/// `ShopEngine` binds accounts to the shared catalog. Cart and checkout
/// operations follow a fetch, mutate, store-back cycle on the acting account;
/// administration operations mutate the catalog directly after a role check.
/// All methods take `&self`; the stores provide interior mutability.
pub struct ShopEngine {
    catalog: CatalogStoreBox,
    accounts: AccountStoreBox,
}

impl ShopEngine {
    /// Creates a new `ShopEngine` over the injected stores.
    pub fn new(catalog: CatalogStoreBox, accounts: AccountStoreBox) -> Self {
        Self { catalog, accounts }
    }

    async fn fetch_account(&self, username: &str) -> Result<Account> {
        self.accounts
            .get(username)
            .await?
            .ok_or_else(|| ShopError::AccountNotFound(username.to_string()))
    }

    async fn fetch_admin(&self, username: &str) -> Result<Account> {
        let account = self.fetch_account(username).await?;
        if !account.is_admin() {
            return Err(ShopError::PermissionDenied);
        }
        Ok(account)
    }

    /// Authenticates `username` and returns the new session token plus role.
    ///
    /// An unknown username reports the same `InvalidCredentials` as a wrong
    /// password. Re-login regenerates the token; the cart survives.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginSession> {
        let mut account = match self.accounts.get(username).await? {
            Some(account) => account,
            None => return Err(ShopError::InvalidCredentials),
        };
        let token = account.login(password)?;
        let role = account.role;
        self.accounts.store(account).await?;
        debug!(username = %username, "login successful");
        Ok(LoginSession { token, role })
    }

    /// Clears the account's session token. Idempotent.
    pub async fn logout(&self, username: &str) -> Result<()> {
        let mut account = self.fetch_account(username).await?;
        account.logout();
        self.accounts.store(account).await?;
        debug!(username = %username, "logged out");
        Ok(())
    }

    /// Snapshot of the whole catalog for display.
    pub async fn view_catalog(&self) -> Result<Vec<(String, Vec<Product>)>> {
        self.catalog.categories().await
    }

    /// Adds a snapshot line to the cart after checking current stock.
    ///
    /// Stock is only consulted here, never decremented; decrementing happens
    /// at checkout. A second add of the same product appends a second line.
    pub async fn add_to_cart(
        &self,
        username: &str,
        product_id: &str,
        quantity: Quantity,
    ) -> Result<CartLine> {
        let mut account = self.fetch_account(username).await?;
        let product = self
            .catalog
            .find_product(product_id)
            .await?
            .ok_or_else(|| ShopError::ProductNotFound(product_id.to_string()))?;

        if product.stock == 0 {
            return Err(ShopError::OutOfStock(product.name));
        }
        if !product.can_fill(quantity.value()) {
            return Err(ShopError::InsufficientStock {
                product_id: product.product_id,
                requested: quantity.value(),
                available: product.stock,
            });
        }

        let line = CartLine::snapshot(&product, quantity);
        account.cart.add_line(line.clone());
        self.accounts.store(account).await?;
        Ok(line)
    }

    /// Removes the first cart line matching `product_id`.
    pub async fn remove_from_cart(&self, username: &str, product_id: &str) -> Result<CartLine> {
        let mut account = self.fetch_account(username).await?;
        let removed = account.cart.remove_line(product_id)?;
        self.accounts.store(account).await?;
        Ok(removed)
    }

    /// Empties the cart. Always succeeds.
    pub async fn clear_cart(&self, username: &str) -> Result<()> {
        let mut account = self.fetch_account(username).await?;
        account.cart.clear();
        self.accounts.store(account).await?;
        Ok(())
    }

    /// Ordered view of the cart lines.
    pub async fn list_cart(&self, username: &str) -> Result<Vec<CartLine>> {
        let account = self.fetch_account(username).await?;
        Ok(account.cart.lines().to_vec())
    }

    /// Settles the cart: decrements catalog stock per line, totals the
    /// snapshotted prices and empties the cart.
    ///
    /// Lines whose product has vanished from the catalog are skipped, still
    /// contributing their snapshotted price to the total. Decrements are not
    /// atomic across lines.
    pub async fn checkout(&self, username: &str, method: PaymentMethod) -> Result<Receipt> {
        let mut account = self.fetch_account(username).await?;

        for line in account.cart.lines() {
            match self
                .catalog
                .adjust_stock(&line.product_id, -i64::from(line.quantity))
                .await
            {
                Ok(()) => {}
                Err(ShopError::ProductNotFound(_)) => {
                    warn!(
                        product_id = %line.product_id,
                        "product no longer in catalog, stock left untouched"
                    );
                }
                Err(e) => return Err(e),
            }
        }

        let total = account.cart.total();
        account.cart.clear();
        self.accounts.store(account).await?;
        debug!(username = %username, method = %method, %total, "checkout complete");
        Ok(Receipt { method, total })
    }

    /// Administrator: appends a product, creating the category if absent.
    pub async fn add_product(
        &self,
        username: &str,
        category: &str,
        product: Product,
    ) -> Result<()> {
        self.fetch_admin(username).await?;
        self.catalog.add_product(category, product).await
    }

    /// Administrator: removes the first matching product in the category.
    pub async fn remove_product(
        &self,
        username: &str,
        category: &str,
        product_id: &str,
    ) -> Result<()> {
        self.fetch_admin(username).await?;
        self.catalog.remove_product(category, product_id).await
    }

    /// Administrator: creates an empty category.
    pub async fn add_category(&self, username: &str, name: &str) -> Result<()> {
        self.fetch_admin(username).await?;
        self.catalog.add_category(name).await
    }

    /// Administrator: deletes a category and all its products.
    pub async fn remove_category(&self, username: &str, name: &str) -> Result<()> {
        self.fetch_admin(username).await?;
        self.catalog.remove_category(name).await
    }
}
