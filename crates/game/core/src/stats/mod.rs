//! Entity statistics shared by the player and enemies.
//!
//! Stats are a fixed set of named integer attributes. Resource pools
//! (health, mana) are bounded by their maximums at all times:
//!
//! ```text
//! 0 <= health <= max_health
//! 0 <= mana   <= max_mana
//! ```
//!
//! Mutation only happens through the operations on [`EntityStats`]; temporary
//! buffs go through [`BuffSet`], which guarantees each delta is applied and
//! reverted exactly once.

pub mod buff;
pub mod entity;

pub use buff::{BuffSet, TemporaryBuff};
pub use entity::{EntityStats, LevelGrowth, StatKind};
