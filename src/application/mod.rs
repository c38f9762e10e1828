//! Application layer orchestrating the domain over the storage ports.
//!
//! This module defines the `ShopEngine`, the single entry point the menu
//! talks to. It owns the injected catalog and account stores and carries no
//! business state of its own.

pub mod engine;
