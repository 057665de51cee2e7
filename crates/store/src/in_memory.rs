use std::collections::HashMap;
use std::sync::RwLock;

use shoplite_core::{DomainResult, Entity, EntityId};

use crate::error::{MutationError, StoreError};
use crate::store::PersistentStore;

/// In-memory identity-keyed record store.
///
/// Intended for tests/dev. Not optimized for performance. A poisoned lock is
/// reported as `Unavailable`, matching how a real backend would surface a
/// connectivity failure.
#[derive(Debug)]
pub struct InMemoryStore<E: Entity> {
    records: RwLock<HashMap<E::Id, E>>,
}

impl<E: Entity> Default for InMemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> InMemoryStore<E> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E> PersistentStore<E> for InMemoryStore<E>
where
    E: Entity + Clone + Send + Sync,
{
    fn create(&self, entity: &E) -> Result<E::Id, StoreError> {
        if entity.lifecycle().is_persistent() {
            return Err(StoreError::constraint_violation(
                "entity already holds an identity",
            ));
        }

        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::unavailable("store lock poisoned"))?;

        let id = E::Id::generate();
        let mut record = entity.clone();
        record.mark_persistent(id);
        records.insert(id, record);
        Ok(id)
    }

    fn update(&self, id: E::Id, entity: &E) -> Result<(), StoreError> {
        if let Some(held) = entity.id() {
            if held != id {
                return Err(StoreError::constraint_violation(
                    "entity identity does not match the addressed record",
                ));
            }
        }

        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::unavailable("store lock poisoned"))?;

        if !records.contains_key(&id) {
            return Err(StoreError::NotFound);
        }

        // Full-record overwrite, last-writer-wins.
        let mut record = entity.clone();
        record.mark_persistent(id);
        records.insert(id, record);
        Ok(())
    }

    fn read(&self, id: E::Id) -> Result<E, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::unavailable("store lock poisoned"))?;
        records.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    fn query_all(&self) -> Result<Vec<E>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::unavailable("store lock poisoned"))?;
        Ok(records.values().cloned().collect())
    }

    fn update_with(
        &self,
        id: E::Id,
        mutate: &mut dyn FnMut(&mut E) -> DomainResult<()>,
    ) -> Result<E, MutationError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::unavailable("store lock poisoned"))?;

        let record = records.get_mut(&id).ok_or(StoreError::NotFound)?;

        // Mutate a scratch copy so a rejected mutation leaves the record
        // untouched.
        let mut scratch = record.clone();
        mutate(&mut scratch)?;
        *record = scratch.clone();
        Ok(scratch)
    }
}
