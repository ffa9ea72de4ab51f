//! Tile map world backing the core [`World`] trait.

use std::collections::BTreeMap;

use frontier_content::{ContentBundle, Glyph, MapDefinition};
use frontier_core::env::compute_seed;
use frontier_core::save::{EnemyRecord, ResourceRecord, WorldRecord};
use frontier_core::{
    Enemy, EnemyHandle, GameEnv, Item, ItemOracle, Npc, NpcHandle, OracleError, Position, Rect,
    World,
};

use crate::error::Result;

/// Salt separating placement rolls from combat rolls on the same seed.
const PLACEMENT_CONTEXT: u32 = 0x504c;

/// A character map populated with enemies, NPCs and resource nodes.
///
/// Handles are indices into the current entity lists and are only valid
/// until the next call that adds or removes an entity.
pub struct TileWorld {
    map: MapDefinition,
    enemies: Vec<Enemy>,
    npcs: Vec<Npc>,
    resources: BTreeMap<Position, String>,
}

impl TileWorld {
    /// Places one enemy on every `E` tile, the map's NPCs on the `N` tiles in
    /// reading order and a resource node on every resource tile.
    ///
    /// Enemy kinds are drawn from the map's pool with `game_seed`, so the
    /// same seed always produces the same layout.
    pub fn populate(bundle: &ContentBundle, env: &GameEnv<'_>, game_seed: u64) -> Result<Self> {
        let map = bundle.map.clone();
        let templates = env.enemies()?;
        let rng = env.rng()?;

        let mut enemies = Vec::new();
        let pool = map.enemy_pool();
        for (index, position) in map.positions_of(&Glyph::Enemy).enumerate() {
            let seed = compute_seed(game_seed, 0, index as u32, PLACEMENT_CONTEXT);
            let pick = rng.range(seed, 0, pool.len().saturating_sub(1) as u32) as usize;
            let Some(id) = pool.get(pick) else {
                continue;
            };
            let template = templates
                .template(id)
                .ok_or_else(|| OracleError::UnknownEnemy(id.clone()))?;
            enemies.push(Enemy::from_template(template, position));
        }

        let npcs = map
            .npc_ids()
            .iter()
            .zip(map.positions_of(&Glyph::Npc))
            .filter_map(|(id, position)| bundle.npc(id).map(|npc| npc.spawn(position)))
            .collect();

        let resources = map
            .glyphs()
            .filter_map(|(position, glyph)| match glyph {
                Glyph::Resource(item) => Some((position, item.clone())),
                _ => None,
            })
            .collect();

        tracing::debug!(
            "Populated map '{}' with {} enemies",
            map.name(),
            enemies.len()
        );

        Ok(Self {
            map,
            enemies,
            npcs,
            resources,
        })
    }

    pub fn map(&self) -> &MapDefinition {
        &self.map
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn npcs(&self) -> &[Npc] {
        &self.npcs
    }

    /// Item id of the resource node on `position`, if one is left.
    pub fn resource_at(&self, position: Position) -> Option<&str> {
        self.resources.get(&position).map(String::as_str)
    }

    pub fn resources(&self) -> impl Iterator<Item = (Position, &str)> + '_ {
        self.resources
            .iter()
            .map(|(position, item)| (*position, item.as_str()))
    }
}

impl World for TileWorld {
    fn spawn_point(&self) -> Position {
        self.map.spawn()
    }

    fn is_walkable(&self, area: Rect) -> bool {
        (area.top()..area.bottom()).all(|y| {
            (area.left()..area.right()).all(|x| {
                self.map
                    .glyph_at(Position::new(x, y))
                    .is_some_and(Glyph::is_walkable)
            })
        })
    }

    fn enemy_colliding(&self, area: Rect) -> Option<EnemyHandle> {
        self.enemies
            .iter()
            .position(|enemy| enemy.is_alive() && enemy.rect().intersects(&area))
            .map(|index| EnemyHandle(index as u32))
    }

    fn take_enemy(&mut self, handle: EnemyHandle) -> Option<Enemy> {
        let index = handle.0 as usize;
        (index < self.enemies.len()).then(|| self.enemies.remove(index))
    }

    fn return_enemy(&mut self, enemy: Enemy) {
        self.enemies.push(enemy);
    }

    fn npc_colliding(&self, area: Rect) -> Option<NpcHandle> {
        self.npcs
            .iter()
            .position(|npc| npc.rect().intersects(&area))
            .map(|index| NpcHandle(index as u32))
    }

    fn npc(&self, handle: NpcHandle) -> Option<&Npc> {
        self.npcs.get(handle.0 as usize)
    }

    fn npc_mut(&mut self, handle: NpcHandle) -> Option<&mut Npc> {
        self.npcs.get_mut(handle.0 as usize)
    }

    fn harvest_resource_at(&mut self, area: Rect, items: &dyn ItemOracle) -> Option<Item> {
        let position = self
            .resources
            .keys()
            .copied()
            .find(|position| Rect::tile(*position).intersects(&area))?;
        let item_id = self.resources.remove(&position)?;
        let item = items.create(&item_id);
        if item.is_none() {
            tracing::warn!("Resource node at {} yields unknown item '{}'", position, item_id);
        }
        item
    }

    fn snapshot(&self) -> WorldRecord {
        WorldRecord {
            enemies: self
                .enemies
                .iter()
                .map(|enemy| EnemyRecord {
                    id: enemy.template_id().to_string(),
                    position: enemy.position(),
                    health: Some(enemy.health()),
                })
                .collect(),
            resources: self
                .resources
                .iter()
                .map(|(position, item)| ResourceRecord {
                    position: *position,
                    item: item.clone(),
                })
                .collect(),
        }
    }

    fn restore(&mut self, record: &WorldRecord, env: &GameEnv<'_>) -> Vec<String> {
        let mut skipped = Vec::new();
        let templates = match env.enemies() {
            Ok(templates) => templates,
            Err(err) => {
                tracing::warn!("Cannot restore enemies: {}", err);
                return record.enemies.iter().map(|entry| entry.id.clone()).collect();
            }
        };

        self.enemies.clear();
        for entry in &record.enemies {
            match templates.template(&entry.id) {
                Some(template) => {
                    let mut enemy = Enemy::from_template(template, entry.position);
                    if let Some(health) = entry.health {
                        enemy.set_health(health);
                    }
                    self.enemies.push(enemy);
                }
                None => {
                    tracing::warn!("Skipping saved enemy with unknown template '{}'", entry.id);
                    skipped.push(entry.id.clone());
                }
            }
        }

        self.resources = record
            .resources
            .iter()
            .map(|entry| (entry.position, entry.item.clone()))
            .collect();

        for npc in &mut self.npcs {
            npc.start_dialogue();
        }

        skipped
    }
}
