use std::collections::BTreeMap;
use std::str::FromStr;

use strum::{EnumCount, IntoEnumIterator};

/// Named attribute of an entity.
///
/// The snake_case name is the key used in save payloads and content files.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StatKind {
    Health,
    MaxHealth,
    Mana,
    MaxMana,
    Attack,
    Defense,
    Magic,
    Resistance,
    Level,
    Experience,
}

/// Per-level stat increases applied by [`EntityStats::level_up`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelGrowth {
    pub max_health: i32,
    pub max_mana: i32,
    pub attack: i32,
    pub defense: i32,
    pub magic: i32,
    pub resistance: i32,
}

impl LevelGrowth {
    pub const STANDARD: Self = Self {
        max_health: 12,
        max_mana: 6,
        attack: 3,
        defense: 2,
        magic: 3,
        resistance: 1,
    };
}

/// Fixed mapping from [`StatKind`] to its integer value.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct EntityStats {
    values: [i32; StatKind::COUNT],
}

impl EntityStats {
    /// Builds stats from explicit values; unspecified stats are zero.
    ///
    /// Pools are clamped into their bounds afterwards.
    pub fn from_values(values: impl IntoIterator<Item = (StatKind, i32)>) -> Self {
        let mut stats = Self::default();
        for (kind, value) in values {
            stats.values[kind as usize] = value;
        }
        stats.clamp_pools();
        stats
    }

    /// Baseline stats of a fresh player character.
    pub fn player_defaults() -> Self {
        Self::from_values([
            (StatKind::Health, 100),
            (StatKind::MaxHealth, 100),
            (StatKind::Mana, 50),
            (StatKind::MaxMana, 50),
            (StatKind::Attack, 12),
            (StatKind::Defense, 5),
            (StatKind::Magic, 14),
            (StatKind::Resistance, 3),
            (StatKind::Level, 1),
            (StatKind::Experience, 0),
        ])
    }

    pub fn get(&self, kind: StatKind) -> i32 {
        self.values[kind as usize]
    }

    pub fn health(&self) -> i32 {
        self.get(StatKind::Health)
    }

    pub fn max_health(&self) -> i32 {
        self.get(StatKind::MaxHealth)
    }

    pub fn mana(&self) -> i32 {
        self.get(StatKind::Mana)
    }

    pub fn max_mana(&self) -> i32 {
        self.get(StatKind::MaxMana)
    }

    pub fn attack(&self) -> i32 {
        self.get(StatKind::Attack)
    }

    pub fn defense(&self) -> i32 {
        self.get(StatKind::Defense)
    }

    pub fn magic(&self) -> i32 {
        self.get(StatKind::Magic)
    }

    pub fn resistance(&self) -> i32 {
        self.get(StatKind::Resistance)
    }

    pub fn level(&self) -> i32 {
        self.get(StatKind::Level)
    }

    pub fn experience(&self) -> i32 {
        self.get(StatKind::Experience)
    }

    pub fn is_alive(&self) -> bool {
        self.health() > 0
    }

    /// Restores up to `amount` health and returns how much was actually recovered.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let missing = self.max_health() - self.health();
        let recovered = amount.clamp(0, missing.max(0));
        self.values[StatKind::Health as usize] += recovered;
        recovered
    }

    /// Restores up to `amount` mana and returns how much was actually recovered.
    pub fn restore_mana(&mut self, amount: i32) -> i32 {
        let missing = self.max_mana() - self.mana();
        let recovered = amount.clamp(0, missing.max(0));
        self.values[StatKind::Mana as usize] += recovered;
        recovered
    }

    /// Removes health, never going below zero.
    pub fn take_damage(&mut self, amount: i32) {
        let health = (self.health() - amount.max(0)).max(0);
        self.values[StatKind::Health as usize] = health;
    }

    /// Spends mana. Callers check affordability first.
    pub(crate) fn spend_mana(&mut self, amount: i32) {
        let mana = (self.mana() - amount.max(0)).max(0);
        self.values[StatKind::Mana as usize] = mana;
    }

    /// Refills health and mana to their maximums.
    pub fn restore_full(&mut self) {
        self.values[StatKind::Health as usize] = self.max_health();
        self.values[StatKind::Mana as usize] = self.max_mana();
    }

    /// Raises the level by one, grows the other stats and refills both pools.
    pub fn level_up(&mut self, growth: LevelGrowth) {
        for (kind, delta) in [
            (StatKind::Level, 1),
            (StatKind::MaxHealth, growth.max_health),
            (StatKind::MaxMana, growth.max_mana),
            (StatKind::Attack, growth.attack),
            (StatKind::Defense, growth.defense),
            (StatKind::Magic, growth.magic),
            (StatKind::Resistance, growth.resistance),
        ] {
            let value = &mut self.values[kind as usize];
            *value = value.saturating_add(delta);
        }
        self.restore_full();
    }

    /// Adds a signed delta to one stat, keeping pools within bounds.
    ///
    /// Only buffs and experience bookkeeping go through here.
    pub(crate) fn adjust(&mut self, kind: StatKind, delta: i32) {
        let value = &mut self.values[kind as usize];
        *value = value.saturating_add(delta);
        self.clamp_pools();
    }

    /// Overrides stats present in `values`, keeping every other stat as is.
    ///
    /// Keys that do not name a stat are ignored so payloads written by newer
    /// versions still load. Returns the ignored keys.
    pub fn merge<'a>(&mut self, values: impl IntoIterator<Item = (&'a str, i32)>) -> Vec<String> {
        let mut ignored = Vec::new();
        for (name, value) in values {
            match StatKind::from_str(name) {
                Ok(kind) => self.values[kind as usize] = value,
                Err(_) => ignored.push(name.to_string()),
            }
        }
        self.clamp_pools();
        ignored
    }

    /// Named view used by save records.
    pub fn to_map(&self) -> BTreeMap<String, i32> {
        StatKind::iter()
            .map(|kind| (kind.to_string(), self.get(kind)))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatKind, i32)> + '_ {
        StatKind::iter().map(|kind| (kind, self.get(kind)))
    }

    fn clamp_pools(&mut self) {
        let max_health = self.max_health().max(0);
        let max_mana = self.max_mana().max(0);
        self.values[StatKind::Health as usize] = self.health().clamp(0, max_health);
        self.values[StatKind::Mana as usize] = self.mana().clamp(0, max_mana);
    }
}
