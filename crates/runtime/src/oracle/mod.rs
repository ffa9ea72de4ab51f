//! Runtime wrappers around static game content oracles.
//!
//! These implementations expose `frontier-core` oracle traits and bundle them
//! into an [`OracleManager`] so the runtime can build [`GameEnv`] views on
//! demand. The data is immutable at runtime; dynamic state lives in the
//! session and the save repository.
mod enemies;
mod items;
mod quests;
mod recipes;

use std::sync::Arc;

use frontier_content::ContentBundle;
use frontier_core::{GameEnv, PcgRng};

pub use enemies::EnemyOracleImpl;
pub use items::ItemOracleImpl;
pub use quests::QuestOracleImpl;
pub use recipes::RecipeOracleImpl;

/// Manages all oracle implementations and provides unified access.
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) items: Arc<ItemOracleImpl>,
    pub(crate) enemies: Arc<EnemyOracleImpl>,
    pub(crate) quests: Arc<QuestOracleImpl>,
    pub(crate) recipes: Arc<RecipeOracleImpl>,
    pub(crate) rng: PcgRng,
}

impl OracleManager {
    pub fn new(
        items: Arc<ItemOracleImpl>,
        enemies: Arc<EnemyOracleImpl>,
        quests: Arc<QuestOracleImpl>,
        recipes: Arc<RecipeOracleImpl>,
    ) -> Self {
        Self {
            items,
            enemies,
            quests,
            recipes,
            rng: PcgRng, // PcgRng is stateless
        }
    }

    /// Builds every oracle from a loaded content bundle.
    pub fn from_bundle(bundle: &ContentBundle) -> Self {
        Self::new(
            Arc::new(bundle.items.iter().cloned().collect()),
            Arc::new(EnemyOracleImpl::new(bundle.enemies.clone())),
            Arc::new(QuestOracleImpl::new(bundle.quests.iter().cloned())),
            Arc::new(RecipeOracleImpl::new(bundle.recipes.clone())),
        )
    }

    /// Borrowed view handed to the core controller.
    pub fn as_game_env(&self) -> GameEnv<'_> {
        GameEnv::with_all(
            self.items.as_ref(),
            self.enemies.as_ref(),
            self.quests.as_ref(),
            self.recipes.as_ref(),
            &self.rng,
        )
    }

    pub fn items(&self) -> &ItemOracleImpl {
        &self.items
    }

    pub fn recipes(&self) -> &RecipeOracleImpl {
        &self.recipes
    }
}
