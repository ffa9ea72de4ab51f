use core::time::Duration;

use crate::config::GameConfig;
use crate::env::ItemOracle;
use crate::geometry::{Position, Rect};
use crate::inventory::{Inventory, InventoryError};
use crate::item::{Item, ItemKind};
use crate::save::{ItemRecord, PlayerRecord};
use crate::skill::SkillBook;
use crate::stats::{BuffSet, EntityStats, LevelGrowth, StatKind, TemporaryBuff};

/// Items every new character starts with.
pub const STARTING_ITEMS: [&str; 2] = ["health_potion", "mana_potion"];

/// The player character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    position: Position,
    stats: EntityStats,
    experience_to_next: i32,
    inventory: Inventory,
    skills: SkillBook,
    buffs: BuffSet,
    regen_elapsed: Duration,
}

impl Player {
    /// A level 1 character with default stats, the default skills and an empty pack.
    pub fn new(position: Position, config: &GameConfig) -> Self {
        Self {
            position,
            stats: EntityStats::player_defaults(),
            experience_to_next: config.starting_experience_to_next.max(1),
            inventory: Inventory::new(),
            skills: SkillBook::default_loadout(),
            buffs: BuffSet::new(),
            regen_elapsed: Duration::ZERO,
        }
    }

    /// A fresh character carrying the starting items the catalog knows about.
    pub fn fresh(position: Position, config: &GameConfig, items: &dyn ItemOracle) -> Self {
        let mut player = Self::new(position, config);
        for item in STARTING_ITEMS.iter().filter_map(|id| items.create(id)) {
            player.add_item(item);
        }
        player
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn rect(&self) -> Rect {
        Rect::tile(self.position)
    }

    pub fn teleport(&mut self, position: Position) {
        self.position = position;
    }

    pub fn stats(&self) -> &EntityStats {
        &self.stats
    }

    pub(crate) fn stats_mut(&mut self) -> &mut EntityStats {
        &mut self.stats
    }

    pub fn experience_to_next(&self) -> i32 {
        self.experience_to_next
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub(crate) fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn add_item(&mut self, item: Item) {
        self.inventory.add(item);
    }

    pub fn skills(&self) -> &SkillBook {
        &self.skills
    }

    pub(crate) fn skills_mut(&mut self) -> &mut SkillBook {
        &mut self.skills
    }

    pub fn buffs(&self) -> &BuffSet {
        &self.buffs
    }

    pub fn add_buff(&mut self, buff: TemporaryBuff) -> bool {
        self.buffs.grant(&mut self.stats, buff)
    }

    pub(crate) fn tick_buffs(&mut self) -> Vec<TemporaryBuff> {
        self.buffs.tick(&mut self.stats)
    }

    pub(crate) fn expire_buffs(&mut self) -> Vec<TemporaryBuff> {
        self.buffs.expire_all(&mut self.stats)
    }

    /// Uses the first inventory item with `item_id`.
    ///
    /// An item that cannot be used goes back to the slot it came from.
    pub fn consume_item(&mut self, item_id: &str) -> Result<String, InventoryError> {
        let (slot, item) =
            self.inventory
                .remove_first(item_id)
                .ok_or_else(|| InventoryError::NotAvailable {
                    item_id: item_id.to_string(),
                })?;

        let effect = match *item.kind() {
            ItemKind::Consumable { heal, mana } => Some((heal, mana)),
            _ => None,
        };
        let Some((heal, mana)) = effect else {
            self.inventory.insert_at(slot, item);
            return Err(InventoryError::NotUsable {
                item_id: item_id.to_string(),
            });
        };

        let healed = if heal > 0 { self.stats.heal(heal) } else { 0 };
        let restored = if mana > 0 {
            self.stats.restore_mana(mana)
        } else {
            0
        };

        let mut segments = Vec::new();
        if healed > 0 {
            segments.push(format!("restored {healed} HP"));
        }
        if restored > 0 {
            segments.push(format!("recovered {restored} MP"));
        }
        Ok(if segments.is_empty() {
            format!("Used {}.", item.name())
        } else {
            format!("Used {} and {}.", item.name(), segments.join(" and "))
        })
    }

    /// Adds experience, levelling up as many times as it covers.
    ///
    /// Returns the number of levels gained.
    pub fn gain_experience(&mut self, amount: i32) -> u32 {
        self.stats.adjust(StatKind::Experience, amount.max(0));
        let mut levels = 0;
        while self.stats.experience() >= self.experience_to_next {
            self.stats
                .adjust(StatKind::Experience, -self.experience_to_next);
            self.stats.level_up(LevelGrowth::STANDARD);
            self.experience_to_next = next_threshold(self.experience_to_next);
            levels += 1;
        }
        levels
    }

    /// Regenerates mana while exploring. Returns the mana recovered.
    pub fn update(&mut self, delta: Duration, config: &GameConfig) -> i32 {
        let interval = config.mana_regen_interval();
        if interval.is_zero() {
            return 0;
        }
        self.regen_elapsed += delta;
        let mut recovered = 0;
        while self.regen_elapsed >= interval {
            self.regen_elapsed -= interval;
            recovered += self.stats.restore_mana(config.mana_regen_amount);
        }
        recovered
    }

    pub fn restore_full(&mut self) {
        self.stats.restore_full();
    }

    pub fn to_record(&self) -> PlayerRecord {
        PlayerRecord {
            position: self.position,
            stats: self.stats.to_map(),
            experience_to_next: self.experience_to_next,
            inventory: self
                .inventory
                .iter()
                .map(|item| ItemRecord {
                    id: item.id().to_string(),
                    name: item.name().to_string(),
                })
                .collect(),
        }
    }

    /// Rebuilds a player from a save record.
    ///
    /// Stats merge over the defaults. Inventory entries the catalog does not
    /// know are dropped; their ids (and unknown stat names) are returned.
    pub fn from_record(
        record: &PlayerRecord,
        items: &dyn ItemOracle,
        config: &GameConfig,
    ) -> (Self, Vec<String>) {
        let mut player = Self::new(record.position, config);
        let mut skipped = player
            .stats
            .merge(record.stats.iter().map(|(name, value)| (name.as_str(), *value)));
        player.experience_to_next = record.experience_to_next.max(1);

        player.inventory.clear();
        for entry in &record.inventory {
            match items.create(&entry.id) {
                Some(item) => player.add_item(item),
                None => {
                    tracing::warn!("Skipping unknown item '{}' in saved inventory", entry.id);
                    skipped.push(entry.id.clone());
                }
            }
        }
        (player, skipped)
    }
}

/// Grows a level threshold by [`GameConfig::EXPERIENCE_GROWTH`], capped at `i32::MAX`.
fn next_threshold(current: i32) -> i32 {
    let (numerator, denominator) = GameConfig::EXPERIENCE_GROWTH;
    let grown = i64::from(current) * i64::from(numerator) / i64::from(denominator.max(1));
    i32::try_from(grown).unwrap_or(i32::MAX).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestItems;

    fn player() -> Player {
        Player::fresh(Position::new(1, 1), &GameConfig::default(), &TestItems)
    }

    #[test]
    fn fresh_player_carries_starting_potions() {
        let player = player();
        assert_eq!(player.inventory().ids(), vec!["health_potion", "mana_potion"]);
        assert_eq!(player.experience_to_next(), 100);
        assert_eq!(player.skills().len(), 3);
    }

    #[test]
    fn consuming_potion_reports_recovery() {
        let mut player = player();
        player.stats_mut().take_damage(40);
        let message = player.consume_item("health_potion").unwrap();
        assert_eq!(message, "Used Health Potion and restored 35 HP.");
        assert_eq!(player.stats().health(), 95);
        assert!(!player.inventory().contains("health_potion"));
    }

    #[test]
    fn consuming_at_full_health_still_uses_item() {
        let mut player = player();
        assert_eq!(player.consume_item("health_potion").unwrap(), "Used Health Potion.");
        assert_eq!(player.inventory().len(), 1);
    }

    #[test]
    fn missing_item_is_not_available() {
        let mut player = player();
        let err = player.consume_item("elixir").unwrap_err();
        assert_eq!(err.to_string(), "No elixir available.");
    }

    #[test]
    fn resource_goes_back_to_its_slot() {
        let mut player = player();
        player.inventory_mut().insert_at(0, TestItems.create("herb").unwrap());

        let err = player.consume_item("herb").unwrap_err();
        assert_eq!(err.to_string(), "That item cannot be used right now.");
        assert_eq!(
            player.inventory().ids(),
            vec!["herb", "health_potion", "mana_potion"]
        );
    }

    #[test]
    fn experience_carries_over_levels() {
        let mut player = player();
        let levels = player.gain_experience(250);
        // 250 - 100 = 150 at level 2, threshold 130; 150 - 130 = 20 at level 3, threshold 169.
        assert_eq!(levels, 2);
        assert_eq!(player.stats().level(), 3);
        assert_eq!(player.stats().experience(), 20);
        assert_eq!(player.experience_to_next(), 169);
        assert_eq!(player.stats().max_health(), 124);
        assert_eq!(player.stats().health(), 124);
    }

    #[test]
    fn experience_near_the_integer_limit_does_not_overflow() {
        let mut record = player().to_record();
        record.stats.insert("experience".into(), i32::MAX - 5);
        let (mut restored, _) = Player::from_record(&record, &TestItems, &GameConfig::default());

        let levels = restored.gain_experience(40);
        assert!(levels > 0);
        assert!(restored.stats().experience() < restored.experience_to_next());
        assert!(restored.stats().level() > 1);
    }

    #[test]
    fn huge_saved_threshold_caps_instead_of_overflowing() {
        let mut record = player().to_record();
        record.experience_to_next = 200_000_000;
        let (mut restored, _) = Player::from_record(&record, &TestItems, &GameConfig::default());

        assert_eq!(restored.gain_experience(200_000_000), 1);
        assert_eq!(restored.stats().experience(), 0);
        assert_eq!(restored.experience_to_next(), 260_000_000);

        restored.experience_to_next = i32::MAX - 1;
        assert_eq!(restored.gain_experience(i32::MAX), 1);
        assert_eq!(restored.experience_to_next(), i32::MAX);
        assert_eq!(restored.stats().experience(), 1);
    }

    #[test]
    fn mana_regenerates_per_interval() {
        let config = GameConfig::default();
        let mut player = player();
        player.stats_mut().spend_mana(10);

        assert_eq!(player.update(Duration::from_millis(1_000), &config), 0);
        assert_eq!(player.update(Duration::from_millis(600), &config), 1);
        assert_eq!(player.update(Duration::from_millis(3_000), &config), 2);
        assert_eq!(player.stats().mana(), 43);
    }

    #[test]
    fn record_round_trip_skips_unknown_items() {
        let mut player = player();
        player.gain_experience(120);
        let mut record = player.to_record();
        record.inventory.push(ItemRecord {
            id: "dragon_scale".into(),
            name: "Dragon Scale".into(),
        });
        record.stats.insert("luck".into(), 3);

        let (restored, skipped) = Player::from_record(&record, &TestItems, &GameConfig::default());
        assert_eq!(restored.stats(), player.stats());
        assert_eq!(restored.experience_to_next(), player.experience_to_next());
        assert_eq!(restored.inventory().ids(), player.inventory().ids());
        assert_eq!(skipped, vec!["luck".to_string(), "dragon_scale".to_string()]);
    }
}
