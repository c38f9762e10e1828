use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShopError>;

/// All recoverable failures of the shop.
///
/// Every variant except `Io` and `Json` is an expected condition: the menu
/// reports it to the user and keeps running.
#[derive(Error, Debug)]
pub enum ShopError {
    #[error("Product {0} not found")]
    ProductNotFound(String),
    #[error("Category {0} not found")]
    CategoryNotFound(String),
    #[error("Category {0} already exists")]
    CategoryExists(String),
    #[error("Account {0} not found")]
    AccountNotFound(String),
    #[error("Product {0} is out of stock")]
    OutOfStock(String),
    #[error("Not enough stock available for {product_id} (requested {requested}, available {available})")]
    InsufficientStock {
        product_id: String,
        requested: u32,
        available: i64,
    },
    #[error("Product {0} not in cart")]
    NotInCart(String),
    #[error("Invalid payment option: {0}")]
    InvalidPaymentOption(String),
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Administrator privileges required")]
    PermissionDenied,
    #[error("Quantity must be a positive integer (got {0})")]
    InvalidQuantity(u32),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
