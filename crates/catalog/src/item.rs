use serde::{Deserialize, Serialize};

use shoplite_core::{DomainError, DomainResult, Entity, ItemId, Lifecycle};

use crate::stock::StockLevel;

/// Catalog item kind: the closed set of sellable variants.
///
/// The catalog type set is fixed and known, so this is a tagged sum over the
/// shared base record rather than open-ended dispatch. The serde `kind` tag is
/// the persisted discriminator field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ItemKind {
    Book { author: String, isbn: String },
    Album { artist: String },
    Movie { director: String, actor: String },
}

impl ItemKind {
    /// Discriminator value, as persisted in the serde tag.
    pub fn discriminator(&self) -> &'static str {
        match self {
            ItemKind::Book { .. } => "book",
            ItemKind::Album { .. } => "album",
            ItemKind::Movie { .. } => "movie",
        }
    }
}

/// Entity: a sellable catalog item (shared base record + kind variant).
///
/// Carries its own stock level; the stock invariant lives in [`StockLevel`].
/// Category membership is owned by the category side and is not stored here —
/// an item's categories are a derived view (see [`crate::category`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    lifecycle: Lifecycle<ItemId>,
    name: String,
    /// Price in smallest currency unit (e.g., cents).
    price: u64,
    stock: StockLevel,
    #[serde(flatten)]
    kind: ItemKind,
}

impl Item {
    /// Create a transient item. It holds no identity until first saved.
    pub fn new(
        name: impl Into<String>,
        price: u64,
        stock: impl Into<StockLevel>,
        kind: ItemKind,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(Self {
            lifecycle: Lifecycle::Transient,
            name,
            price,
            stock: stock.into(),
            kind,
        })
    }

    pub fn book(
        name: impl Into<String>,
        price: u64,
        stock: impl Into<StockLevel>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> DomainResult<Self> {
        Self::new(
            name,
            price,
            stock,
            ItemKind::Book {
                author: author.into(),
                isbn: isbn.into(),
            },
        )
    }

    pub fn album(
        name: impl Into<String>,
        price: u64,
        stock: impl Into<StockLevel>,
        artist: impl Into<String>,
    ) -> DomainResult<Self> {
        Self::new(
            name,
            price,
            stock,
            ItemKind::Album {
                artist: artist.into(),
            },
        )
    }

    pub fn movie(
        name: impl Into<String>,
        price: u64,
        stock: impl Into<StockLevel>,
        director: impl Into<String>,
        actor: impl Into<String>,
    ) -> DomainResult<Self> {
        Self::new(
            name,
            price,
            stock,
            ItemKind::Movie {
                director: director.into(),
                actor: actor.into(),
            },
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn stock_quantity(&self) -> u32 {
        self.stock.quantity()
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        self.name = name;
        Ok(())
    }

    pub fn set_price(&mut self, price: u64) {
        self.price = price;
    }

    /// Add stock. No failure path.
    pub fn increase_stock(&mut self, quantity: u32) {
        self.stock.increase(quantity);
    }

    /// Remove stock, all-or-nothing; fails with `InsufficientStock` if the
    /// remaining quantity would be negative, leaving the level unchanged.
    pub fn decrease_stock(&mut self, quantity: u32) -> DomainResult<()> {
        self.stock.decrease(quantity)
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn lifecycle(&self) -> Lifecycle<ItemId> {
        self.lifecycle
    }

    fn mark_persistent(&mut self, id: ItemId) {
        // First assignment wins; an already-persistent item keeps its identity.
        if self.lifecycle.is_transient() {
            self.lifecycle = Lifecycle::Persistent(id);
        }
    }
}
