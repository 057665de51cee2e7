use std::marker::PhantomData;

use shoplite_catalog::Item;
use shoplite_core::{Entity, ItemId, Lifecycle};

use crate::error::{MutationError, StoreError};
use crate::store::PersistentStore;

/// Lifecycle-driven persistence gateway.
///
/// Decides, per save call, whether a record is new (insert, assigning the
/// store-minted identity) or existing (update-in-place), and delegates to the
/// [`PersistentStore`]. A thin decision layer: store failures propagate
/// unchanged, nothing is retried or masked.
pub struct UpsertRepository<E, S> {
    store: S,
    _entity: PhantomData<fn() -> E>,
}

impl<E, S> UpsertRepository<E, S>
where
    E: Entity,
    S: PersistentStore<E>,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Persist the entity, whichever lifecycle state it is in.
    ///
    /// - Transient: delegates to `create`; the store assigns a fresh identity
    ///   and the entity is marked persistent. After this call the identity is
    ///   present and will never change.
    /// - Persistent: delegates to `update`, overwriting the stored record in
    ///   full with the entity's current field values (last-writer-wins; no
    ///   field-level patching).
    ///
    /// Returns the now-guaranteed-present identity.
    pub fn save(&self, entity: &mut E) -> Result<E::Id, StoreError> {
        match entity.lifecycle() {
            Lifecycle::Transient => {
                let id = self.store.create(entity)?;
                entity.mark_persistent(id);
                tracing::debug!(id = ?id, "inserted new record");
                Ok(id)
            }
            Lifecycle::Persistent(id) => {
                self.store.update(id, entity)?;
                tracing::debug!(id = ?id, "overwrote record in place");
                Ok(id)
            }
        }
    }

    /// The entity at `id`, fully hydrated, or `NotFound`.
    pub fn find_one(&self, id: E::Id) -> Result<E, StoreError> {
        self.store.read(id)
    }

    /// Every persisted entity of the type, in store-defined order.
    pub fn find_all(&self) -> Result<Vec<E>, StoreError> {
        self.store.query_all()
    }
}

/// Store-native stock mutations for item repositories.
///
/// These run inside the store's atomic read-modify-write, so concurrent
/// decrements against the same item serialize and the load-mutate-save race
/// cannot drive stock negative. Prefer these over mutating a loaded item and
/// saving it when more than one writer may touch the item.
impl<S> UpsertRepository<Item, S>
where
    S: PersistentStore<Item>,
{
    /// Atomically decrement stock; fails with `InsufficientStock` (record
    /// untouched) if the remaining quantity would be negative. Returns the
    /// remaining quantity.
    pub fn decrease_stock(&self, id: ItemId, quantity: u32) -> Result<u32, MutationError> {
        let updated = self
            .store
            .update_with(id, &mut |item| item.decrease_stock(quantity))?;
        let remaining = updated.stock_quantity();
        tracing::debug!(%id, quantity, remaining, "stock decremented");
        Ok(remaining)
    }

    /// Atomically increment stock. Returns the new quantity.
    pub fn increase_stock(&self, id: ItemId, quantity: u32) -> Result<u32, MutationError> {
        let updated = self.store.update_with(id, &mut |item| {
            item.increase_stock(quantity);
            Ok(())
        })?;
        let remaining = updated.stock_quantity();
        tracing::debug!(%id, quantity, remaining, "stock incremented");
        Ok(remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::in_memory::InMemoryStore;
    use shoplite_core::{DomainError, EntityId};

    fn item_repository() -> UpsertRepository<Item, InMemoryStore<Item>> {
        UpsertRepository::new(InMemoryStore::new())
    }

    fn test_item(stock: u32) -> Item {
        Item::book("Book A", 1000, stock, "Author A", "978-0000000000").unwrap()
    }

    #[test]
    fn saving_a_transient_entity_assigns_identity_once() {
        let repo = item_repository();
        let mut item = test_item(5);
        assert_eq!(item.id(), None);

        let id = repo.save(&mut item).unwrap();
        assert_eq!(item.id(), Some(id));
        assert!(item.lifecycle().is_persistent());

        // Saving again keeps the identity and does not create a second record.
        let second = repo.save(&mut item).unwrap();
        assert_eq!(second, id);
        assert_eq!(repo.find_all().unwrap().len(), 1);
    }

    #[test]
    fn saving_a_new_item_makes_it_findable() {
        let repo = item_repository();
        let mut item = test_item(5);

        let id = repo.save(&mut item).unwrap();

        let found = repo.find_one(id).unwrap();
        assert_eq!(found.stock_quantity(), 5);
        assert_eq!(found.name(), "Book A");
        assert_eq!(found.price(), 1000);
    }

    #[test]
    fn resave_with_unchanged_fields_is_idempotent() {
        let repo = item_repository();
        let mut item = test_item(5);
        let id = repo.save(&mut item).unwrap();

        let before = repo.find_one(id).unwrap();
        repo.save(&mut item).unwrap();
        let after = repo.find_one(id).unwrap();

        assert_eq!(before, after);
    }

    #[test]
    fn save_on_a_persistent_entity_overwrites_in_full() {
        let repo = item_repository();
        let mut item = test_item(5);
        let id = repo.save(&mut item).unwrap();

        // Load, mutate locally, save: findOne must observe the overwrite.
        let mut loaded = repo.find_one(id).unwrap();
        loaded.decrease_stock(3).unwrap();
        repo.save(&mut loaded).unwrap();

        assert_eq!(repo.find_one(id).unwrap().stock_quantity(), 2);
    }

    #[test]
    fn save_propagates_store_failures_unchanged() {
        let repo = item_repository();
        let mut item = test_item(5);
        let id = repo.save(&mut item).unwrap();
        // Corrupt the association on purpose: a persistent entity addressed
        // at a record that was never created.
        drop(repo);

        let fresh = item_repository();
        assert_eq!(fresh.save(&mut item), Err(StoreError::NotFound));
        assert_eq!(item.id(), Some(id));
    }

    #[test]
    fn find_one_missing_is_not_found() {
        let repo = item_repository();
        assert_eq!(
            repo.find_one(ItemId::generate()),
            Err(StoreError::NotFound)
        );
    }

    #[test]
    fn atomic_decrease_commits_or_rejects() {
        let repo = item_repository();
        let mut item = test_item(10);
        let id = repo.save(&mut item).unwrap();

        assert_eq!(repo.decrease_stock(id, 4).unwrap(), 6);

        let err = repo.decrease_stock(id, 10).unwrap_err();
        assert_eq!(
            err,
            MutationError::Domain(DomainError::insufficient_stock(10, 6))
        );
        assert_eq!(repo.find_one(id).unwrap().stock_quantity(), 6);

        assert_eq!(repo.increase_stock(id, 3).unwrap(), 9);
    }
}
