//! Persistent store contract: the external persistence collaborator.

use std::sync::Arc;

use shoplite_core::{DomainResult, Entity};

use crate::error::{MutationError, StoreError};

/// Identity-keyed record store.
///
/// One record per identity, full-record reads and writes. Identities are
/// minted by the store on `create` and are opaque to callers.
///
/// ## Design Principles
///
/// - **No storage assumptions**: works with the in-memory implementation
///   (tests/dev) and future SQL/NoSQL backends.
/// - **Full hydration**: `read` returns the whole record or `NotFound`, never
///   a partial view.
/// - **Last-writer-wins**: `update` overwrites the record in full with no
///   conflict detection; a stale in-memory copy silently clobbers
///   concurrently-written fields. Callers that cannot accept that race use
///   `update_with`, which runs the mutation atomically inside the store.
///
/// ## Implementation Requirements
///
/// Implementations must:
/// - assign each identity exactly once, on `create`
/// - reject `update`/`read` against an unknown identity with `NotFound`
/// - make `update_with` atomic: the closure observes the current record and
///   either commits in one step or leaves the record untouched
pub trait PersistentStore<E: Entity>: Send + Sync {
    /// Insert a new record, assigning and returning a fresh opaque identity.
    ///
    /// The stored copy carries the assigned identity; the caller's in-memory
    /// instance is untouched (the repository marks it persistent afterwards).
    /// An already-persistent entity is rejected with `ConstraintViolation`.
    fn create(&self, entity: &E) -> Result<E::Id, StoreError>;

    /// Overwrite the full record at `id` with the entity's current field
    /// values. No field-level patching. `NotFound` if `id` does not exist.
    fn update(&self, id: E::Id, entity: &E) -> Result<(), StoreError>;

    /// Full hydration of the record at `id`, or `NotFound`.
    fn read(&self, id: E::Id) -> Result<E, StoreError>;

    /// Snapshot of every record of the type, in store-defined order.
    fn query_all(&self) -> Result<Vec<E>, StoreError>;

    /// Atomic read-modify-write of the record at `id`.
    ///
    /// The mutation runs under the store's write isolation: if it fails the
    /// record is left untouched, otherwise the new state is committed and
    /// returned. Concurrent `update_with` calls against the same identity
    /// serialize; this is the store-native alternative to the
    /// load-mutate-save race.
    fn update_with(
        &self,
        id: E::Id,
        mutate: &mut dyn FnMut(&mut E) -> DomainResult<()>,
    ) -> Result<E, MutationError>;
}

impl<E, S> PersistentStore<E> for Arc<S>
where
    E: Entity,
    S: PersistentStore<E> + ?Sized,
{
    fn create(&self, entity: &E) -> Result<E::Id, StoreError> {
        (**self).create(entity)
    }

    fn update(&self, id: E::Id, entity: &E) -> Result<(), StoreError> {
        (**self).update(id, entity)
    }

    fn read(&self, id: E::Id) -> Result<E, StoreError> {
        (**self).read(id)
    }

    fn query_all(&self) -> Result<Vec<E>, StoreError> {
        (**self).query_all()
    }

    fn update_with(
        &self,
        id: E::Id,
        mutate: &mut dyn FnMut(&mut E) -> DomainResult<()>,
    ) -> Result<E, MutationError> {
        (**self).update_with(id, mutate)
    }
}
