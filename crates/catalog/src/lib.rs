//! Catalog domain module.
//!
//! This crate contains the item catalog and its business rules, implemented
//! purely as deterministic domain logic (no IO, no storage).

pub mod category;
pub mod item;
pub mod stock;

pub use category::{categories_of, Category};
pub use item::{Item, ItemKind};
pub use stock::StockLevel;
