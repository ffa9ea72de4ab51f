//! Game session: the composition root the frontend drives.

use core::time::Duration;

use frontier_content::ContentBundle;
use frontier_core::{
    Command, GameContext, GameMode, GameModeController, HostRequest, MessageLog, Player,
    QuestLedger,
};

use crate::config::RuntimeConfig;
use crate::error::Result;
use crate::gateway::PersistenceGateway;
use crate::oracle::OracleManager;
use crate::repository::{FileSaveRepository, SaveRepository};
use crate::world::TileWorld;

/// Owns the game context, the mode controller, the world and the oracles,
/// and executes the save/load requests the controller hands back.
pub struct GameSession {
    ctx: GameContext,
    controller: GameModeController,
    world: TileWorld,
    oracles: OracleManager,
    gateway: PersistenceGateway,
}

impl GameSession {
    /// Fresh game on the bundle's map; nothing is loaded.
    pub fn new(
        bundle: &ContentBundle,
        repository: Box<dyn SaveRepository>,
        game_seed: u64,
    ) -> Result<Self> {
        let oracles = OracleManager::from_bundle(bundle);
        let world = TileWorld::populate(bundle, &oracles.as_game_env(), game_seed)?;
        let player = Player::fresh(world.map().spawn(), &bundle.config, oracles.items());
        let ctx = GameContext::new(bundle.config.clone(), player, game_seed);

        Ok(Self {
            ctx,
            controller: GameModeController::new(),
            world,
            oracles,
            gateway: PersistenceGateway::new(repository),
        })
    }

    /// Loads content, opens the save file and resumes from it when present.
    pub fn start(config: &RuntimeConfig) -> Result<Self> {
        let bundle = config.load_content()?;
        let repository = FileSaveRepository::new(&config.save_path)?;
        let game_seed = config.resolve_seed();
        tracing::info!(
            "Starting game with seed {} (save file {})",
            game_seed,
            config.save_path.display()
        );

        let mut session = Self::new(&bundle, Box::new(repository), game_seed)?;
        session.resume();
        Ok(session)
    }

    /// Restores the saved game if there is one, then greets the player.
    ///
    /// A corrupt save is reported and the fresh game is kept.
    pub fn resume(&mut self) {
        match self.gateway.load() {
            Ok(Some(payload)) => match self.apply(&payload) {
                Ok(()) => self.ctx.messages.push("Loaded saved game."),
                Err(err) => {
                    tracing::warn!("Could not restore saved game: {}", err);
                    self.ctx.messages.push("Could not restore saved game.");
                }
            },
            Ok(None) => {}
            Err(err) => {
                tracing::warn!("Ignoring unreadable save: {}", err);
                self.ctx
                    .messages
                    .push("Save file is unreadable. Starting a new game.");
            }
        }
        self.ctx.messages.push("Welcome to the frontier.");
    }

    /// Applies one command and runs any host request it produced.
    pub fn handle(&mut self, command: Command) {
        let env = self.oracles.as_game_env();
        let request = self
            .controller
            .handle(&mut self.ctx, &mut self.world, &env, command);

        match request {
            Some(HostRequest::Save) => self.save_game(),
            Some(HostRequest::Load) => self.load_game(),
            None => {}
        }
    }

    /// Per-frame update.
    pub fn update(&mut self, delta: Duration) {
        let env = self.oracles.as_game_env();
        self.controller
            .update(&mut self.ctx, &mut self.world, &env, delta);
    }

    /// Writes the current state to the save slot.
    pub fn save(&self) -> Result<()> {
        self.gateway
            .save(&self.ctx.player, &self.world, &self.ctx.quests)
    }

    /// Replaces the current state with the saved one.
    ///
    /// Returns `false` when there is nothing to load; the state is unchanged
    /// then and on error.
    pub fn load(&mut self) -> Result<bool> {
        let Some(payload) = self.gateway.load()? else {
            return Ok(false);
        };
        self.apply(&payload)?;
        Ok(true)
    }

    fn apply(&mut self, payload: &frontier_core::SavePayload) -> Result<()> {
        let env = self.oracles.as_game_env();
        let skipped = PersistenceGateway::apply(payload, &mut self.ctx, &mut self.world, &env)?;
        if !skipped.is_empty() {
            tracing::warn!("Save referenced unknown ids: {}", skipped.join(", "));
        }
        self.controller.reset();
        Ok(())
    }

    fn save_game(&mut self) {
        match self.save() {
            Ok(()) => {
                tracing::info!("Game saved");
                self.ctx.messages.push("Game saved.");
            }
            Err(err) => {
                tracing::error!("Failed to save game: {}", err);
                self.ctx.messages.push("Could not save the game.");
            }
        }
    }

    fn load_game(&mut self) {
        match self.load() {
            Ok(true) => {
                tracing::info!("Game loaded");
                self.ctx.messages.push("Loaded saved game.");
            }
            Ok(false) => self.ctx.messages.push("No saved game found."),
            Err(err) => {
                tracing::warn!("Failed to load game: {}", err);
                self.ctx.messages.push("Could not load the saved game.");
            }
        }
    }

    pub fn mode(&self) -> GameMode {
        self.controller.mode()
    }

    pub fn controller(&self) -> &GameModeController {
        &self.controller
    }

    pub fn context(&self) -> &GameContext {
        &self.ctx
    }

    pub fn player(&self) -> &Player {
        &self.ctx.player
    }

    pub fn quests(&self) -> &QuestLedger {
        &self.ctx.quests
    }

    pub fn messages(&self) -> &MessageLog {
        &self.ctx.messages
    }

    pub fn world(&self) -> &TileWorld {
        &self.world
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }
}
