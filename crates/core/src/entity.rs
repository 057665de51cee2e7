//! Entity trait: identity + an explicit persistence lifecycle.

use serde::{Deserialize, Serialize};

use crate::id::EntityId;

/// Persistence lifecycle of an entity, carried explicitly alongside identity.
///
/// An entity is either *transient* (exists only in memory, never queryable
/// from the store) or *persistent* (the store holds the authoritative record
/// under the given identity). The transition is one-way and happens exactly
/// once, on first successful save; there is no path back to transient.
///
/// Carrying the flag explicitly, rather than inferring it from identity
/// presence, keeps the insert-vs-update decision unambiguous even if
/// identities were ever supplied by clients.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifecycle<Id> {
    Transient,
    Persistent(Id),
}

impl<Id: Copy> Lifecycle<Id> {
    pub fn id(&self) -> Option<Id> {
        match self {
            Lifecycle::Transient => None,
            Lifecycle::Persistent(id) => Some(*id),
        }
    }

    pub fn is_transient(&self) -> bool {
        matches!(self, Lifecycle::Transient)
    }

    pub fn is_persistent(&self) -> bool {
        matches!(self, Lifecycle::Persistent(_))
    }
}

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed, store-assigned entity identifier.
    type Id: EntityId;

    /// Current persistence lifecycle.
    fn lifecycle(&self) -> Lifecycle<Self::Id>;

    /// The identity, if one has been assigned.
    fn id(&self) -> Option<Self::Id> {
        self.lifecycle().id()
    }

    /// Record the store-assigned identity after a successful insert.
    ///
    /// The first call wins: on an already-persistent entity this must keep the
    /// original identity untouched. The repository only calls this on the
    /// transient branch of a save.
    fn mark_persistent(&mut self, id: Self::Id);
}
