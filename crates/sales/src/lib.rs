//! Sales domain module.

pub mod order;

pub use order::{orders_of, Order};
