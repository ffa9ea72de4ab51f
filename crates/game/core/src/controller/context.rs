use crate::actor::Player;
use crate::config::GameConfig;
use crate::env::compute_seed;
use crate::message::MessageLog;
use crate::quest::QuestLedger;

/// Mutable game state outside the world: the player, their quests and the
/// message log. Created once at startup and passed explicitly.
#[derive(Clone, Debug)]
pub struct GameContext {
    pub config: GameConfig,
    pub player: Player,
    pub quests: QuestLedger,
    pub messages: MessageLog,
    game_seed: u64,
    nonce: u64,
}

impl GameContext {
    pub fn new(config: GameConfig, player: Player, game_seed: u64) -> Self {
        let messages = MessageLog::new(config.message_capacity);
        Self {
            config,
            player,
            quests: QuestLedger::new(),
            messages,
            game_seed,
            nonce: 0,
        }
    }

    pub fn game_seed(&self) -> u64 {
        self.game_seed
    }

    /// Seed for the next random roll; every call yields a new one.
    pub fn next_seed(&mut self) -> u64 {
        let seed = compute_seed(self.game_seed, self.nonce, 0, 0);
        self.nonce += 1;
        seed
    }
}
