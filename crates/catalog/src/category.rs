use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use shoplite_core::{CategoryId, DomainError, DomainResult, Entity, ItemId, Lifecycle};

/// Entity: a catalog category.
///
/// Owning side of the category/item many-to-many: the set of member item ids
/// stored here is the authoritative reference. Items hold no back-reference;
/// an item's categories are computed with [`categories_of`], which keeps the
/// association cycle-free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    lifecycle: Lifecycle<CategoryId>,
    name: String,
    item_ids: HashSet<ItemId>,
}

impl Category {
    /// Create a transient category with no members.
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(Self {
            lifecycle: Lifecycle::Transient,
            name,
            item_ids: HashSet::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add an item to this category. Returns whether the membership is new.
    pub fn add_item(&mut self, item: ItemId) -> bool {
        self.item_ids.insert(item)
    }

    /// Remove an item from this category. Returns whether it was a member.
    pub fn remove_item(&mut self, item: ItemId) -> bool {
        self.item_ids.remove(&item)
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.item_ids.contains(&item)
    }

    /// Member item ids (unordered).
    pub fn item_ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.item_ids.iter().copied()
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn lifecycle(&self) -> Lifecycle<CategoryId> {
        self.lifecycle
    }

    fn mark_persistent(&mut self, id: CategoryId) {
        if self.lifecycle.is_transient() {
            self.lifecycle = Lifecycle::Persistent(id);
        }
    }
}

/// Derived, read-only view of an item's categories.
///
/// Computed by query over the owning side; the item stores no back-reference.
pub fn categories_of(categories: &[Category], item: ItemId) -> Vec<&Category> {
    categories.iter().filter(|c| c.contains(item)).collect()
}
