//! Entities that live on the map: the player, enemies and NPCs.
mod enemy;
mod npc;
mod player;

pub use enemy::{Enemy, EnemyTemplate, LootEntry};
pub use npc::Npc;
pub use player::Player;
