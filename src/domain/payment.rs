use crate::error::ShopError;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// The fixed set of accepted payment options.
///
/// Parsing is case- and wording-sensitive: exactly "Net Banking", "PayPal"
/// and "UPI" are accepted, anything else is `InvalidPaymentOption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    NetBanking,
    PayPal,
    Upi,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [Self::NetBanking, Self::PayPal, Self::Upi];

    pub fn label(&self) -> &'static str {
        match self {
            Self::NetBanking => "Net Banking",
            Self::PayPal => "PayPal",
            Self::Upi => "UPI",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentMethod {
    type Err = ShopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Net Banking" => Ok(Self::NetBanking),
            "PayPal" => Ok(Self::PayPal),
            "UPI" => Ok(Self::Upi),
            other => Err(ShopError::InvalidPaymentOption(other.to_string())),
        }
    }
}

/// Confirmation of a simulated checkout. No gateway is involved.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub method: PaymentMethod,
    pub total: Decimal,
}
