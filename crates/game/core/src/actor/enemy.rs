use std::collections::BTreeMap;

use crate::env::{ItemOracle, RngOracle, compute_seed};
use crate::geometry::{Position, Rect};
use crate::item::Item;
use crate::stats::{EntityStats, StatKind};

/// Health used when a template does not specify one.
const DEFAULT_ENEMY_HEALTH: i32 = 30;

/// One row of a loot table: the item drops with `chance` percent probability.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LootEntry {
    pub item: String,
    pub chance: u32,
}

impl LootEntry {
    pub fn new(item: impl Into<String>, chance: u32) -> Self {
        Self {
            item: item.into(),
            chance: chance.min(100),
        }
    }
}

/// Catalog entry every enemy instance is created from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub id: String,
    pub name: String,
    pub stats: BTreeMap<StatKind, i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub loot: Vec<LootEntry>,
    pub experience: i32,
}

/// A live enemy on the map or inside a combat session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enemy {
    template_id: String,
    name: String,
    stats: EntityStats,
    position: Position,
    loot: Vec<LootEntry>,
    experience: i32,
}

impl Enemy {
    /// Spawns an enemy at full health. The template's `health` is its maximum.
    pub fn from_template(template: &EnemyTemplate, position: Position) -> Self {
        let max_health = template
            .stats
            .get(&StatKind::Health)
            .copied()
            .unwrap_or(DEFAULT_ENEMY_HEALTH);
        let stats = EntityStats::from_values(
            template
                .stats
                .iter()
                .map(|(kind, value)| (*kind, *value))
                .chain([(StatKind::MaxHealth, max_health), (StatKind::Health, max_health)]),
        );

        Self {
            template_id: template.id.clone(),
            name: template.name.clone(),
            stats,
            position,
            loot: template.loot.clone(),
            experience: template.experience,
        }
    }

    pub fn template_id(&self) -> &str {
        &self.template_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stats(&self) -> &EntityStats {
        &self.stats
    }

    pub fn health(&self) -> i32 {
        self.stats.health()
    }

    pub fn max_health(&self) -> i32 {
        self.stats.max_health()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn rect(&self) -> Rect {
        Rect::tile(self.position)
    }

    pub fn experience(&self) -> i32 {
        self.experience
    }

    pub fn loot(&self) -> &[LootEntry] {
        &self.loot
    }

    pub fn is_alive(&self) -> bool {
        self.stats.is_alive()
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.stats.take_damage(amount);
    }

    /// Puts health back to the maximum after the player lost to this enemy.
    pub fn restore_health(&mut self) {
        self.stats.restore_full();
    }

    /// Sets current health from a save record, clamped into `0..=max_health`.
    pub fn set_health(&mut self, health: i32) {
        self.stats.merge([(StatKind::Health.as_ref(), health)]);
    }

    /// Rolls every loot table row independently.
    ///
    /// Rows naming an item the catalog does not know are skipped.
    pub fn roll_loot(&self, rng: &dyn RngOracle, seed: u64, items: &dyn ItemOracle) -> Vec<Item> {
        self.loot
            .iter()
            .enumerate()
            .filter(|(slot, entry)| rng.chance(compute_seed(seed, 0, *slot as u32, 1), entry.chance))
            .filter_map(|(_, entry)| items.create(&entry.item))
            .collect()
    }
}
