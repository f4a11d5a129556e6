//! Inventory domain module.
//!
//! This crate contains business rules for the product inventory, implemented
//! purely as deterministic domain logic (no IO, no logging, no storage).

pub mod inventory;
pub mod product;

pub use inventory::Inventory;
pub use product::Product;
