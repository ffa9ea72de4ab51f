//! World collaborator interface.
//!
//! The map itself (tiles, placement, rendering) lives outside the rules. The
//! controller only asks the questions below, always in terms of 1×1 tile
//! rects, and moves enemies in and out of the world by value.

use crate::actor::{Enemy, Npc};
use crate::env::{GameEnv, ItemOracle};
use crate::geometry::{Position, Rect};
use crate::item::Item;
use crate::save::WorldRecord;

/// Stable reference to an enemy currently placed in the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnemyHandle(pub u32);

/// Stable reference to an NPC.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NpcHandle(pub u32);

pub trait World {
    /// Where the player starts and returns to after fleeing or defeat.
    fn spawn_point(&self) -> Position;

    /// True if every tile of `area` is inside the map and passable.
    fn is_walkable(&self, area: Rect) -> bool;

    /// A live enemy overlapping `area`, if any.
    fn enemy_colliding(&self, area: Rect) -> Option<EnemyHandle>;

    /// Removes the enemy from the world and hands it over.
    fn take_enemy(&mut self, handle: EnemyHandle) -> Option<Enemy>;

    /// Places an enemy back into the world at its own position.
    fn return_enemy(&mut self, enemy: Enemy);

    /// An NPC overlapping `area`, if any.
    fn npc_colliding(&self, area: Rect) -> Option<NpcHandle>;

    fn npc(&self, handle: NpcHandle) -> Option<&Npc>;

    fn npc_mut(&mut self, handle: NpcHandle) -> Option<&mut Npc>;

    /// Harvests the resource node overlapping `area`, removing it.
    fn harvest_resource_at(&mut self, area: Rect, items: &dyn ItemOracle) -> Option<Item>;

    /// Enemy and resource placement for the save payload.
    fn snapshot(&self) -> WorldRecord;

    /// Replaces enemy and resource placement with the saved one.
    ///
    /// Returns the ids of entries that could not be restored.
    fn restore(&mut self, record: &WorldRecord, env: &GameEnv<'_>) -> Vec<String>;
}
