//! Moves game state between the live subsystems and a save repository.

use frontier_core::{GameContext, GameEnv, Player, QuestLedger, SavePayload, World};

use crate::error::Result;
use crate::repository::SaveRepository;

/// Builds save payloads from each subsystem's own record and applies loaded
/// payloads back onto them.
pub struct PersistenceGateway {
    repository: Box<dyn SaveRepository>,
}

impl PersistenceGateway {
    pub fn new(repository: Box<dyn SaveRepository>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &dyn SaveRepository {
        self.repository.as_ref()
    }

    pub fn save(&self, player: &Player, world: &dyn World, quests: &QuestLedger) -> Result<()> {
        let payload = SavePayload {
            player: player.to_record(),
            world: world.snapshot(),
            quests: quests.to_record(),
        };
        self.repository.save(&payload)?;
        Ok(())
    }

    /// `Ok(None)` when nothing was saved yet.
    pub fn load(&self) -> Result<Option<SavePayload>> {
        Ok(self.repository.load()?)
    }

    /// Replaces player, quests and world placement with the payload's.
    ///
    /// Returns every id that could not be restored. The message log and the
    /// game seed are kept.
    pub fn apply(
        payload: &SavePayload,
        ctx: &mut GameContext,
        world: &mut dyn World,
        env: &GameEnv<'_>,
    ) -> Result<Vec<String>> {
        let (player, mut skipped) = Player::from_record(&payload.player, env.items()?, &ctx.config);
        let (quests, skipped_quests) = QuestLedger::from_record(&payload.quests);
        skipped.extend(skipped_quests);
        skipped.extend(world.restore(&payload.world, env));

        ctx.player = player;
        ctx.quests = quests;
        Ok(skipped)
    }
}
