//! Pure domain types and rules: products, carts, accounts, payment methods,
//! and the storage ports the application layer depends on.

pub mod account;
pub mod cart;
pub mod payment;
pub mod ports;
pub mod product;
