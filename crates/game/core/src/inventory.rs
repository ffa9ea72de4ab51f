//! Ordered item storage owned by the player.

use crate::error::{ErrorKind, GameError};
use crate::item::{Item, humanize_id};

/// Errors raised when using items from the inventory.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("No {} available.", humanize_id(.item_id))]
    NotAvailable { item_id: String },

    #[error("That item cannot be used right now.")]
    NotUsable { item_id: String },

    #[error("Inventory empty.")]
    Empty,
}

impl GameError for InventoryError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::NotAvailable { .. } | Self::NotUsable { .. } => ErrorKind::PreconditionNotMet,
            Self::Empty => ErrorKind::InvalidSelection,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotAvailable { .. } => "INVENTORY_NOT_AVAILABLE",
            Self::NotUsable { .. } => "INVENTORY_NOT_USABLE",
            Self::Empty => "INVENTORY_EMPTY",
        }
    }
}

/// Ordered collection of item instances.
///
/// Duplicates are kept as separate entries; lookups by id always hit the
/// first matching entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Removes the first item with `item_id`, returning it with its former slot.
    pub fn remove_first(&mut self, item_id: &str) -> Option<(usize, Item)> {
        let index = self.items.iter().position(|item| item.id() == item_id)?;
        Some((index, self.items.remove(index)))
    }

    /// Puts an item back at `index` (or at the end if the inventory shrank).
    pub fn insert_at(&mut self, index: usize, item: Item) {
        let index = index.min(self.items.len());
        self.items.insert(index, item);
    }

    /// Removes `count` items with `item_id`, or nothing at all if there are fewer.
    pub fn remove_many(&mut self, item_id: &str, count: u32) -> bool {
        if self.count(item_id) < count {
            return false;
        }
        let mut left = count;
        self.items.retain(|item| {
            if left > 0 && item.id() == item_id {
                left -= 1;
                false
            } else {
                true
            }
        });
        true
    }

    pub fn count(&self, item_id: &str) -> u32 {
        self.items.iter().filter(|item| item.id() == item_id).count() as u32
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.items.iter().any(|item| item.id() == item_id)
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.items.iter().map(Item::id).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }
}
