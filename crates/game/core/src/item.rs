//! Item value type.
//!
//! Items are immutable records created by the item catalog (see
//! [`crate::env::ItemOracle`]). The inventory holds independent instances, so
//! two potions are two `Item` values with the same id.

use crate::stats::StatKind;

/// Rarity of a gathered resource.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
}

/// Category-specific payload.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Used up on consumption; restores health and/or mana.
    Consumable { heal: i32, mana: i32 },

    /// Gear with flat stat bonuses.
    Equipment { bonuses: Vec<(StatKind, i32)> },

    /// Crafting material gathered from the world.
    Resource { rarity: Rarity },
}

/// Immutable item record.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    id: String,
    name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    description: String,
    kind: ItemKind,
}

impl Item {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        kind: ItemKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            kind,
        }
    }

    pub fn consumable(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        heal: i32,
        mana: i32,
    ) -> Self {
        Self::new(id, name, description, ItemKind::Consumable { heal, mana })
    }

    pub fn equipment(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        bonuses: Vec<(StatKind, i32)>,
    ) -> Self {
        Self::new(id, name, description, ItemKind::Equipment { bonuses })
    }

    pub fn resource(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        rarity: Rarity,
    ) -> Self {
        Self::new(id, name, description, ItemKind::Resource { rarity })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    /// Only consumables can be used from the inventory or in combat.
    pub fn is_usable(&self) -> bool {
        matches!(self.kind, ItemKind::Consumable { .. })
    }
}

/// Turns an item id into the words shown to the player (`health_potion` → `health potion`).
pub fn humanize_id(id: &str) -> String {
    id.replace('_', " ")
}
