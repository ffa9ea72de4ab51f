//! Deterministic rules of the frontier RPG.
//!
//! `frontier-core` owns the game model (stats, skills, inventory, quests,
//! combat) and the [`controller::GameModeController`] that routes player
//! commands between exploration, combat, dialogue and the menus. Content and
//! spatial queries are reached through the traits in [`env`] and [`world`], so
//! the runtime decides where data comes from and how it is stored.
pub mod actor;
pub mod combat;
pub mod config;
pub mod controller;
pub mod crafting;
pub mod dialogue;
pub mod env;
pub mod error;
pub mod geometry;
pub mod inventory;
pub mod item;
pub mod message;
pub mod quest;
pub mod save;
pub mod skill;
pub mod stats;
pub mod world;

#[cfg(test)]
mod testing;

pub use actor::{Enemy, EnemyTemplate, LootEntry, Npc, Player};
pub use combat::{CombatError, CombatOutcome, CombatSession, Turn};
pub use config::GameConfig;
pub use controller::{Command, GameContext, GameMode, GameModeController, HostRequest, ModeState};
pub use crafting::{CraftError, Ingredient, Recipe, craft};
pub use dialogue::{
    DialogueAction, DialogueChoice, DialogueError, DialogueNode, DialogueOption, DialogueTree,
};
pub use env::{
    EnemyOracle, GameEnv, ItemOracle, OracleError, PcgRng, QuestOracle, RecipeOracle, RngOracle,
};
pub use error::{ErrorKind, GameError};
pub use geometry::{Direction, Position, Rect};
pub use inventory::{Inventory, InventoryError};
pub use item::{Item, ItemKind, Rarity};
pub use message::MessageLog;
pub use quest::{Quest, QuestBuilder, QuestError, QuestGoal, QuestLedger};
pub use save::SavePayload;
pub use skill::{Skill, SkillBook, SkillError, SkillKind};
pub use stats::{BuffSet, EntityStats, StatKind, TemporaryBuff};
pub use world::{EnemyHandle, NpcHandle, World};
