//! Runtime assembly for the frontier game.
//!
//! This crate wires the content catalogs, the tile world and the save
//! repository around the rules in `frontier-core`. Frontends embed
//! [`GameSession`], feed it commands and frame deltas, and read state back.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the composition root
//! - [`world`] implements the core world trait over a tile map
//! - [`gateway`] moves state between subsystems and the save slot
//! - [`oracle`] and [`repository`] provide data adapters
pub mod config;
pub mod error;
pub mod gateway;
pub mod oracle;
pub mod repository;
pub mod session;
pub mod world;

pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use gateway::PersistenceGateway;
pub use oracle::{
    EnemyOracleImpl, ItemOracleImpl, OracleManager, QuestOracleImpl, RecipeOracleImpl,
};
pub use repository::{
    FileSaveRepository, InMemorySaveRepository, RepositoryError, SaveRepository,
};
pub use session::GameSession;
pub use world::TileWorld;
