//! Persistence layer: store contract, in-memory store, upsert repository.
//!
//! The domain crates stay free of IO; this crate decides insert-vs-update per
//! save using the entity's explicit lifecycle, and hosts the store-native
//! atomic stock mutations.

pub mod error;
pub mod in_memory;
pub mod repository;
pub mod store;


pub use error::{MutationError, StoreError};
pub use in_memory::InMemoryStore;
pub use repository::UpsertRepository;
pub use store::PersistentStore;
