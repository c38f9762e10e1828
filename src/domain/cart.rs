use crate::domain::product::Product;
use crate::error::{Result, ShopError};
use rust_decimal::Decimal;

/// A positive number of units to add to a cart.
///
/// Construction rejects zero, so every `CartLine` carries at least one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity(u32);

impl Quantity {
    pub fn new(value: u32) -> Result<Self> {
        if value == 0 {
            return Err(ShopError::InvalidQuantity(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Quantity {
    type Error = ShopError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

/// A cart entry frozen at add time.
///
/// Name and unit price are snapshots of the product when the line was added,
/// not live references; later catalog edits do not change the line.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product_id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

impl CartLine {
    /// Freezes the product's id, name and price into a new line.
    pub fn snapshot(product: &Product, quantity: Quantity) -> Self {
        Self {
            product_id: product.product_id.clone(),
            name: product.name.clone(),
            quantity: quantity.value(),
            unit_price: product.price,
        }
    }

    pub fn line_total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }
}

/// An ordered list of cart lines owned by one account.
///
/// Lines for the same product are kept separate; adding a product twice
/// yields two lines.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_line(&mut self, line: CartLine) {
        self.lines.push(line);
    }

    /// Removes the first line matching `product_id`.
    pub fn remove_line(&mut self, product_id: &str) -> Result<CartLine> {
        let idx = self
            .lines
            .iter()
            .position(|line| line.product_id == product_id)
            .ok_or_else(|| ShopError::NotInCart(product_id.to_string()))?;
        Ok(self.lines.remove(idx))
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of `quantity * unit_price` over all lines, at snapshotted prices.
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}
