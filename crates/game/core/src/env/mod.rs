//! Traits describing read-only game data.
//!
//! Oracles expose item, enemy, quest and recipe catalogs plus a deterministic
//! random source. The [`GameEnv`] aggregate bundles them so the controller can
//! reach everything it needs without coupling to concrete implementations.
mod error;
mod rng;

pub use error::OracleError;
pub use rng::{PcgRng, RngOracle, compute_seed};

use crate::actor::EnemyTemplate;
use crate::crafting::Recipe;
use crate::item::Item;
use crate::quest::Quest;

/// Item catalog. Every call creates a fresh, independent instance.
pub trait ItemOracle: Send + Sync {
    fn create(&self, item_id: &str) -> Option<Item>;

    /// Like [`ItemOracle::create`] but reports the unknown id.
    fn require(&self, item_id: &str) -> Result<Item, OracleError> {
        self.create(item_id)
            .ok_or_else(|| OracleError::UnknownItem(item_id.to_string()))
    }
}

/// Enemy template catalog.
pub trait EnemyOracle: Send + Sync {
    fn template(&self, template_id: &str) -> Option<&EnemyTemplate>;

    /// Template ids in catalog order.
    fn template_ids(&self) -> Vec<&str>;
}

/// Quest catalog. Returns a fresh quest with zero progress.
pub trait QuestOracle: Send + Sync {
    fn quest(&self, quest_id: &str) -> Option<Quest>;
}

/// Crafting recipe book.
pub trait RecipeOracle: Send + Sync {
    /// All recipes in display order.
    fn recipes(&self) -> &[Recipe];

    fn recipe(&self, recipe_id: &str) -> Option<&Recipe> {
        self.recipes().iter().find(|recipe| recipe.id() == recipe_id)
    }
}

/// Aggregates the read-only oracles used by the controller.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    items: Option<&'a dyn ItemOracle>,
    enemies: Option<&'a dyn EnemyOracle>,
    quests: Option<&'a dyn QuestOracle>,
    recipes: Option<&'a dyn RecipeOracle>,
    rng: Option<&'a dyn RngOracle>,
}

impl<'a> GameEnv<'a> {
    pub fn new(
        items: Option<&'a dyn ItemOracle>,
        enemies: Option<&'a dyn EnemyOracle>,
        quests: Option<&'a dyn QuestOracle>,
        recipes: Option<&'a dyn RecipeOracle>,
        rng: Option<&'a dyn RngOracle>,
    ) -> Self {
        Self {
            items,
            enemies,
            quests,
            recipes,
            rng,
        }
    }

    pub fn with_all(
        items: &'a dyn ItemOracle,
        enemies: &'a dyn EnemyOracle,
        quests: &'a dyn QuestOracle,
        recipes: &'a dyn RecipeOracle,
        rng: &'a dyn RngOracle,
    ) -> Self {
        Self::new(
            Some(items),
            Some(enemies),
            Some(quests),
            Some(recipes),
            Some(rng),
        )
    }

    pub fn empty() -> Self {
        Self::new(None, None, None, None, None)
    }

    /// Returns the ItemOracle, or an error if not available.
    pub fn items(&self) -> Result<&'a dyn ItemOracle, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }

    /// Returns the EnemyOracle, or an error if not available.
    pub fn enemies(&self) -> Result<&'a dyn EnemyOracle, OracleError> {
        self.enemies.ok_or(OracleError::EnemiesNotAvailable)
    }

    /// Returns the QuestOracle, or an error if not available.
    pub fn quests(&self) -> Result<&'a dyn QuestOracle, OracleError> {
        self.quests.ok_or(OracleError::QuestsNotAvailable)
    }

    /// Returns the RecipeOracle, or an error if not available.
    pub fn recipes(&self) -> Result<&'a dyn RecipeOracle, OracleError> {
        self.recipes.ok_or(OracleError::RecipesNotAvailable)
    }

    /// Returns the RngOracle, or an error if not available.
    pub fn rng(&self) -> Result<&'a dyn RngOracle, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }
}

impl core::fmt::Debug for GameEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GameEnv")
            .field("items", &self.items.is_some())
            .field("enemies", &self.enemies.is_some())
            .field("quests", &self.quests.is_some())
            .field("recipes", &self.recipes.is_some())
            .field("rng", &self.rng.is_some())
            .finish()
    }
}
