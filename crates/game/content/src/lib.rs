//! Data-driven content definitions and loaders.
//!
//! This crate houses the static game content and the loaders for its RON/TOML
//! data files:
//! - Item catalog
//! - Enemy templates and loot tables
//! - Quest definitions
//! - Crafting recipes
//! - NPCs with their dialogue trees
//! - Map layouts
//! - Game configuration
//!
//! The default data set under `data/` is also compiled in, so the game runs
//! without a data directory. Content is consumed by runtime oracles and never
//! appears in save payloads.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentBundle, ContentFactory, DEFAULT_MAP, EnemyLoader, Glyph, ItemLoader,
    LoadResult, MapDefinition, MapLoader, NpcDefinition, NpcLoader, QuestLoader, RecipeLoader,
};
