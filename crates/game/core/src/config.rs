use core::time::Duration;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Number of user-facing messages kept by the controller's message log.
    pub message_capacity: usize,

    /// Number of entries kept by a combat session's event log.
    pub combat_log_capacity: usize,

    /// Exploration time needed to regenerate `mana_regen_amount` mana.
    pub mana_regen_interval_ms: u64,

    /// Mana restored per regeneration interval.
    pub mana_regen_amount: i32,

    /// Experience needed for the first level-up of a fresh character.
    pub starting_experience_to_next: i32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of skills a character can carry.
    pub const MAX_SKILLS: usize = 8;

    // ===== combat rules =====
    /// Minimum damage of the player's basic attack.
    pub const PLAYER_DAMAGE_FLOOR: i32 = 2;
    /// Minimum damage of an enemy's attack.
    pub const ENEMY_DAMAGE_FLOOR: i32 = 1;
    /// Minimum damage dealt by an offensive skill.
    pub const SKILL_DAMAGE_FLOOR: i32 = 1;

    // ===== progression =====
    /// Experience threshold growth per level, as a ratio (numerator, denominator).
    pub const EXPERIENCE_GROWTH: (i32, i32) = (13, 10);

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MESSAGE_CAPACITY: usize = 6;
    pub const DEFAULT_COMBAT_LOG_CAPACITY: usize = 6;
    pub const DEFAULT_MANA_REGEN_INTERVAL_MS: u64 = 1_500;
    pub const DEFAULT_MANA_REGEN_AMOUNT: i32 = 1;
    pub const DEFAULT_EXPERIENCE_TO_NEXT: i32 = 100;

    pub fn new() -> Self {
        Self {
            message_capacity: Self::DEFAULT_MESSAGE_CAPACITY,
            combat_log_capacity: Self::DEFAULT_COMBAT_LOG_CAPACITY,
            mana_regen_interval_ms: Self::DEFAULT_MANA_REGEN_INTERVAL_MS,
            mana_regen_amount: Self::DEFAULT_MANA_REGEN_AMOUNT,
            starting_experience_to_next: Self::DEFAULT_EXPERIENCE_TO_NEXT,
        }
    }

    pub fn with_message_capacity(mut self, capacity: usize) -> Self {
        self.message_capacity = capacity.max(1);
        self
    }

    pub fn with_combat_log_capacity(mut self, capacity: usize) -> Self {
        self.combat_log_capacity = capacity.max(1);
        self
    }

    pub fn mana_regen_interval(&self) -> Duration {
        Duration::from_millis(self.mana_regen_interval_ms)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
