use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product as it lives in the catalog.
///
/// `product_id` is unique within a category by convention only; the catalog
/// does not reject duplicates. `stock` is signed: it stays non-negative under
/// normal operation, but checkout decrements are applied without re-checking
/// availability, so a catalog edited after add-to-cart can go negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub name: String,
    pub stock: i64,
    pub price: Decimal,
}

impl Product {
    pub fn new(product_id: String, name: String, stock: i64, price: Decimal) -> Self {
        Self {
            product_id,
            name,
            stock,
            price,
        }
    }

    /// Whether any units are available at all.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Whether the current stock covers `quantity` units.
    pub fn can_fill(&self, quantity: u32) -> bool {
        self.stock >= i64::from(quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn product(stock: i64) -> Product {
        Product::new("p1".to_string(), "Laptop".to_string(), stock, dec!(500))
    }

    #[test]
    fn test_in_stock() {
        assert!(product(1).in_stock());
        assert!(!product(0).in_stock());
        assert!(!product(-1).in_stock());
    }

    #[test]
    fn test_can_fill() {
        assert!(product(5).can_fill(5));
        assert!(product(5).can_fill(1));
        assert!(!product(5).can_fill(6));
        assert!(!product(0).can_fill(1));
    }

    #[test]
    fn test_deserialize_numeric_price() {
        let json = r#"{"product_id": "p1", "name": "Laptop", "stock": 10, "price": 499.99}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, dec!(499.99));
        assert_eq!(product.stock, 10);
    }
}
