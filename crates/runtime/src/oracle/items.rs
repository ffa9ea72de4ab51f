//! [`frontier_core::ItemOracle`] backed by an in-memory map.
use std::collections::HashMap;

use frontier_core::{Item, ItemOracle};

/// ItemOracle implementation with static item definitions.
pub struct ItemOracleImpl {
    definitions: HashMap<String, Item>,
}

impl ItemOracleImpl {
    pub fn new() -> Self {
        Self {
            definitions: HashMap::new(),
        }
    }

    /// Add an item definition, replacing one with the same id.
    pub fn add_definition(&mut self, item: Item) {
        self.definitions.insert(item.id().to_string(), item);
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for ItemOracleImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Item> for ItemOracleImpl {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        let mut oracle = Self::new();
        for item in iter {
            oracle.add_definition(item);
        }
        oracle
    }
}

impl ItemOracle for ItemOracleImpl {
    fn create(&self, item_id: &str) -> Option<Item> {
        self.definitions.get(item_id).cloned()
    }
}
