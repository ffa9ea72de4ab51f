use super::damage::{enemy_attack_damage, player_attack_damage, spell_damage, spell_healing};
use super::error::CombatError;
use crate::actor::{Enemy, Player};
use crate::config::GameConfig;
use crate::inventory::InventoryError;
use crate::message::MessageLog;
use crate::skill::SkillKind;
use crate::stats::TemporaryBuff;

/// Side whose action is expected next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum Turn {
    Player,
    Enemy,
}

/// Terminal result of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum CombatOutcome {
    Victory,
    Defeat,
}

/// One encounter between the player and a single enemy.
///
/// The session owns the enemy for its whole lifetime. The player is lent to
/// each action, so nothing else can touch either side while a turn resolves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatSession {
    enemy: Enemy,
    turn: Turn,
    rounds: u32,
    log: MessageLog,
    outcome: Option<CombatOutcome>,
}

impl CombatSession {
    pub fn new(enemy: Enemy, config: &GameConfig) -> Self {
        let mut log = MessageLog::new(config.combat_log_capacity);
        log.push(format!("A {} attacks!", enemy.name()));
        Self {
            enemy,
            turn: Turn::Player,
            rounds: 0,
            log,
            outcome: None,
        }
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn whose_turn(&self) -> Turn {
        self.turn
    }

    /// Completed rounds (player action followed by enemy action).
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    pub fn outcome(&self) -> Option<CombatOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Physical attack: `max(attack - defense, 2)`.
    pub fn basic_attack(&mut self, player: &mut Player) -> Result<(), CombatError> {
        self.ensure_players_turn()?;

        let damage = player_attack_damage(player.stats(), self.enemy.stats());
        self.enemy.take_damage(damage);
        self.log
            .push(format!("You hit {} for {damage} damage.", self.enemy.name()));

        self.end_player_turn(player);
        Ok(())
    }

    /// Fires the skill in slot `index`.
    ///
    /// An unknown slot, missing mana or an active cooldown is logged and
    /// rejected; the turn stays with the player.
    pub fn use_skill(&mut self, player: &mut Player, index: usize) -> Result<(), CombatError> {
        self.ensure_players_turn()?;

        let (name, kind, cost) = match player.skills().get(index) {
            Ok(skill) => match skill.check_usable(player.stats().mana()) {
                Ok(()) => (skill.name(), skill.kind(), skill.mana_cost()),
                Err(err) => return Err(self.reject(err)),
            },
            Err(err) => return Err(self.reject(err)),
        };

        match kind {
            SkillKind::Fireball { magic_multiplier } => {
                let damage = spell_damage(player.stats(), self.enemy.stats(), magic_multiplier);
                self.enemy.take_damage(damage);
                self.log.push(format!(
                    "{name} scorches {} for {damage} damage.",
                    self.enemy.name()
                ));
            }
            SkillKind::HealingLight {
                base,
                magic_divisor,
            } => {
                let amount = spell_healing(player.stats(), base, magic_divisor);
                let healed = player.stats_mut().heal(amount);
                self.log.push(format!("{name} restores {healed} HP."));
            }
            SkillKind::ArcaneShield {
                stat,
                amount,
                duration,
            } => {
                player.add_buff(TemporaryBuff::new(stat, amount, duration));
                self.log.push(format!(
                    "{name} raises your {stat} by {amount} for {duration} turns."
                ));
            }
        }
        player.stats_mut().spend_mana(cost);
        player.skills_mut().get_mut(index)?.trigger();

        self.end_player_turn(player);
        Ok(())
    }

    /// Uses the first inventory item with `item_id`.
    ///
    /// Having none is rejected and keeps the turn. An item that cannot be
    /// used stays in the inventory but still costs the turn.
    pub fn use_consumable(&mut self, player: &mut Player, item_id: &str) -> Result<(), CombatError> {
        self.ensure_players_turn()?;

        match player.consume_item(item_id) {
            Ok(message) => self.log.push(message),
            Err(err @ InventoryError::NotUsable { .. }) => self.log.push(err.to_string()),
            Err(err) => return Err(self.reject(err)),
        }

        self.end_player_turn(player);
        Ok(())
    }

    /// Ends the session and hands the enemy back.
    ///
    /// Buffs granted during the fight expire here whatever the outcome, so
    /// none of them outlive the encounter.
    pub fn conclude(self, player: &mut Player) -> Enemy {
        player.expire_buffs();
        self.enemy
    }

    fn ensure_players_turn(&self) -> Result<(), CombatError> {
        if self.outcome.is_some() {
            return Err(CombatError::SessionOver);
        }
        if self.turn != Turn::Player {
            return Err(CombatError::NotPlayersTurn);
        }
        Ok(())
    }

    fn reject(&mut self, err: impl Into<CombatError>) -> CombatError {
        let err = err.into();
        self.log.push(err.to_string());
        err
    }

    fn end_player_turn(&mut self, player: &mut Player) {
        if !self.enemy.is_alive() {
            self.outcome = Some(CombatOutcome::Victory);
            self.log.push(format!("{} is defeated!", self.enemy.name()));
            tracing::info!("Combat won against '{}'", self.enemy.template_id());
            return;
        }
        self.turn = Turn::Enemy;
        self.enemy_turn(player);
    }

    fn enemy_turn(&mut self, player: &mut Player) {
        if !self.enemy.is_alive() {
            return;
        }

        let damage = enemy_attack_damage(self.enemy.stats(), player.stats());
        player.stats_mut().take_damage(damage);
        self.log
            .push(format!("{} hits you for {damage} damage.", self.enemy.name()));

        if !player.stats().is_alive() {
            self.outcome = Some(CombatOutcome::Defeat);
            self.log.push("You collapse.");
            tracing::info!("Combat lost against '{}'", self.enemy.template_id());
            return;
        }

        self.turn = Turn::Player;
        for buff in player.tick_buffs() {
            self.log.push(format!("Your {} bonus fades.", buff.stat));
        }
        player.skills_mut().tick_all();
        self.rounds += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ItemOracle;
    use crate::skill::SkillError;
    use crate::testing::{TestItems, enemy, player};

    #[test]
    fn attack_then_enemy_reply_completes_a_round() {
        let mut player = player();
        let mut session = CombatSession::new(enemy("goblin"), &GameConfig::default());

        session.basic_attack(&mut player).unwrap();

        // 12 attack vs 3 defense; goblin 12 attack vs 5 defense.
        assert_eq!(session.enemy().health(), 36);
        assert_eq!(player.stats().health(), 93);
        assert_eq!(session.whose_turn(), Turn::Player);
        assert_eq!(session.rounds(), 1);
        assert_eq!(session.outcome(), None);
    }

    #[test]
    fn killing_blow_skips_enemy_turn() {
        let mut player = player();
        let mut goblin = enemy("goblin");
        goblin.take_damage(40);
        let mut session = CombatSession::new(goblin, &GameConfig::default());

        session.basic_attack(&mut player).unwrap();

        assert_eq!(session.outcome(), Some(CombatOutcome::Victory));
        assert_eq!(player.stats().health(), 100);
        assert_eq!(session.rounds(), 0);
        assert_eq!(
            session.basic_attack(&mut player),
            Err(CombatError::SessionOver)
        );
    }

    #[test]
    fn insufficient_mana_keeps_turn() {
        let mut player = player();
        player.stats_mut().spend_mana(40);
        let mut session = CombatSession::new(enemy("slime"), &GameConfig::default());

        let err = session.use_skill(&mut player, 0).unwrap_err();

        assert!(matches!(
            err,
            CombatError::Skill(SkillError::InsufficientMana { .. })
        ));
        assert_eq!(player.stats().mana(), 10);
        assert_eq!(player.stats().health(), 100);
        assert_eq!(session.rounds(), 0);
        assert_eq!(session.log().last(), Some("Not enough mana for Fireball."));
    }

    #[test]
    fn skill_slot_out_of_range_is_rejected() {
        let mut player = player();
        let mut session = CombatSession::new(enemy("slime"), &GameConfig::default());
        let err = session.use_skill(&mut player, 9).unwrap_err();
        assert!(matches!(
            err,
            CombatError::Skill(SkillError::IndexOutOfRange { index: 9, .. })
        ));
        assert_eq!(session.rounds(), 0);
    }

    #[test]
    fn fireball_costs_mana_and_cools_down_once_per_round() {
        let mut player = player();
        let mut session = CombatSession::new(enemy("wolf"), &GameConfig::default());

        session.use_skill(&mut player, 0).unwrap();
        // 14 * 2 - 2 resistance.
        assert_eq!(session.enemy().health(), 55 - 26);
        assert_eq!(player.stats().mana(), 35);
        // Triggered to 3, then one round completed.
        assert_eq!(player.skills().get(0).unwrap().current_cooldown(), 2);

        assert!(matches!(
            session.use_skill(&mut player, 0),
            Err(CombatError::Skill(SkillError::OnCooldown { remaining: 2, .. }))
        ));

        session.basic_attack(&mut player).unwrap();
        assert_eq!(player.skills().get(0).unwrap().current_cooldown(), 1);
        session.basic_attack(&mut player).unwrap();
        assert_eq!(player.skills().get(0).unwrap().current_cooldown(), 0);
    }

    #[test]
    fn healing_light_restores_base_plus_half_magic() {
        let mut player = player();
        player.stats_mut().take_damage(50);
        let mut session = CombatSession::new(enemy("slime"), &GameConfig::default());

        session.use_skill(&mut player, 1).unwrap();

        // 20 + 14 / 2, then the slime hits for 8 - 5.
        assert!(session.log().iter().any(|m| m == "Healing Light restores 27 HP."));
        assert_eq!(player.stats().health(), 50 + 27 - 3);
        assert_eq!(player.stats().mana(), 38);
        assert_eq!(player.skills().get(1).unwrap().current_cooldown(), 3);
        assert_eq!(session.rounds(), 1);
    }

    #[test]
    fn healing_light_is_capped_at_max_health() {
        let mut player = player();
        player.stats_mut().take_damage(10);
        let mut session = CombatSession::new(enemy("slime"), &GameConfig::default());

        session.use_skill(&mut player, 1).unwrap();

        assert!(session.log().iter().any(|m| m == "Healing Light restores 10 HP."));
        assert_eq!(player.stats().health(), 100 - 3);
        assert_eq!(player.stats().mana(), 38);
    }

    #[test]
    fn shield_lasts_three_rounds_and_expires_at_conclusion() {
        let mut player = player();
        let mut session = CombatSession::new(enemy("slime"), &GameConfig::default());

        session.use_skill(&mut player, 2).unwrap();
        assert_eq!(player.stats().defense(), 10);
        // Slime attack 8 vs 10 defense hits for the floor.
        assert_eq!(player.stats().health(), 99);
        assert_eq!(player.buffs().len(), 1);

        let enemy = session.conclude(&mut player);
        assert_eq!(enemy.template_id(), "slime");
        assert_eq!(player.stats().defense(), 5);
        assert!(player.buffs().is_empty());
    }

    #[test]
    fn shield_reverts_after_its_duration() {
        let mut player = player();
        let mut session = CombatSession::new(enemy("wolf"), &GameConfig::default());

        session.use_skill(&mut player, 2).unwrap();
        session.basic_attack(&mut player).unwrap();
        assert_eq!(player.stats().defense(), 10);
        session.basic_attack(&mut player).unwrap();
        assert_eq!(player.stats().defense(), 5);
        assert!(player.buffs().is_empty());
    }

    #[test]
    fn missing_consumable_keeps_turn() {
        let mut player = player();
        player.consume_item("health_potion").unwrap();
        let mut session = CombatSession::new(enemy("slime"), &GameConfig::default());

        let err = session.use_consumable(&mut player, "health_potion").unwrap_err();

        assert_eq!(err.to_string(), "No health potion available.");
        assert_eq!(session.whose_turn(), Turn::Player);
        assert_eq!(session.rounds(), 0);
        assert_eq!(player.stats().health(), 100);
    }

    #[test]
    fn unusable_item_still_costs_the_turn() {
        let mut player = player();
        player.add_item(TestItems.create("herb").unwrap());
        let mut session = CombatSession::new(enemy("slime"), &GameConfig::default());

        session.use_consumable(&mut player, "herb").unwrap();

        assert!(player.inventory().contains("herb"));
        assert_eq!(session.rounds(), 1);
        assert!(player.stats().health() < 100);
    }

    #[test]
    fn potion_heals_before_enemy_reply() {
        let mut player = player();
        player.stats_mut().take_damage(50);
        let mut session = CombatSession::new(enemy("slime"), &GameConfig::default());

        session.use_consumable(&mut player, "health_potion").unwrap();

        // 50 + 35 - (8 - 5)
        assert_eq!(player.stats().health(), 82);
    }

    #[test]
    fn enemy_can_defeat_player() {
        let mut player = player();
        player.stats_mut().take_damage(99);
        let mut session = CombatSession::new(enemy("wolf"), &GameConfig::default());

        session.basic_attack(&mut player).unwrap();

        assert_eq!(session.outcome(), Some(CombatOutcome::Defeat));
        assert_eq!(player.stats().health(), 0);
        assert_eq!(session.rounds(), 0);
    }

    #[test]
    fn log_is_bounded() {
        let mut player = player();
        let config = GameConfig::default().with_combat_log_capacity(3);
        let mut session = CombatSession::new(enemy("wolf"), &config);
        session.basic_attack(&mut player).unwrap();
        session.basic_attack(&mut player).unwrap();
        assert_eq!(session.log().len(), 3);
        assert!(session.log().last().unwrap().starts_with("Dire Wolf hits you"));
    }
}
