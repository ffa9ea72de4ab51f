//! Turn-based combat between the player and a single enemy.
//!
//! # Turn order
//!
//! ```text
//! player action ──► victory? ──yes──► Victory (enemy turn skipped)
//!                      │no
//!                      ▼
//!                 enemy attack ──► defeat? ──yes──► Defeat
//!                      │no
//!                      ▼
//!         turn returns to player: buffs tick, cooldowns tick, round += 1
//! ```
//!
//! Cooldowns and buffs therefore progress once per full round, never per
//! action. Rejected actions change nothing and keep the turn with the player.

pub mod damage;
mod error;
mod session;

pub use damage::{enemy_attack_damage, physical_damage, player_attack_damage, spell_damage};
pub use error::CombatError;
pub use session::{CombatOutcome, CombatSession, Turn};
