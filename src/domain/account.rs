use crate::domain::cart::Cart;
use crate::error::{Result, ShopError};
use uuid::Uuid;

/// What an account is allowed to do.
///
/// Shoppers drive the cart and checkout; administrators mutate the catalog.
/// The capability check happens at the engine boundary, not in the stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Shopper,
    Administrator,
}

/// A user of the shop, loaded once at startup.
///
/// The password is compared in plaintext and the session token is an opaque
/// UUID regenerated on every successful login. Nothing checks the token after
/// login; it only exists to be shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub username: String,
    password: String,
    pub session_token: Option<String>,
    pub cart: Cart,
    pub role: Role,
}

impl Account {
    pub fn new(username: String, password: String, role: Role) -> Self {
        Self {
            username,
            password,
            session_token: None,
            cart: Cart::new(),
            role,
        }
    }

    /// Exact plaintext compare; a fresh token replaces any previous one.
    pub fn login(&mut self, password: &str) -> Result<String> {
        if self.password != password {
            return Err(ShopError::InvalidCredentials);
        }
        let token = Uuid::new_v4().to_string();
        self.session_token = Some(token.clone());
        Ok(token)
    }

    /// Clears the session token. Idempotent.
    pub fn logout(&mut self) {
        self.session_token = None;
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Administrator
    }
}
