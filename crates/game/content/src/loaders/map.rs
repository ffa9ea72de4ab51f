//! Map data loader.
//!
//! Maps are character grids. Each character is one tile:
//!
//! ```text
//! #  wall            P  player spawn (floor)
//! ~  water           E  enemy spawn (floor)
//! .  floor           N  NPC (floor)
//! any character listed under `resources` is a harvestable node (floor)
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use frontier_core::Position;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Map structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MapSpec {
    name: String,
    rows: Vec<String>,
    /// Enemy template ids an `E` tile picks from.
    enemy_pool: Vec<String>,
    /// NPC ids assigned to the `N` tiles in reading order.
    #[serde(default)]
    npcs: Vec<String>,
    /// Resource glyph to the item id it yields.
    #[serde(default)]
    resources: BTreeMap<char, String>,
}

/// Meaning of one map character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Glyph {
    Wall,
    Water,
    Floor,
    Spawn,
    Enemy,
    Npc,
    Resource(String),
}

impl Glyph {
    pub fn is_walkable(&self) -> bool {
        !matches!(self, Self::Wall | Self::Water)
    }
}

/// Validated map: rectangular, with exactly one spawn and one NPC id per `N`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapDefinition {
    name: String,
    width: i32,
    height: i32,
    tiles: Vec<Glyph>,
    spawn: Position,
    enemy_pool: Vec<String>,
    npcs: Vec<String>,
}

impl MapDefinition {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn spawn(&self) -> Position {
        self.spawn
    }

    pub fn enemy_pool(&self) -> &[String] {
        &self.enemy_pool
    }

    pub fn npc_ids(&self) -> &[String] {
        &self.npcs
    }

    pub fn glyph_at(&self, position: Position) -> Option<&Glyph> {
        if position.x < 0 || position.y < 0 || position.x >= self.width || position.y >= self.height
        {
            return None;
        }
        self.tiles
            .get((position.y * self.width + position.x) as usize)
    }

    /// Every tile in reading order.
    pub fn glyphs(&self) -> impl Iterator<Item = (Position, &Glyph)> + '_ {
        let width = self.width.max(1);
        self.tiles.iter().enumerate().map(move |(index, glyph)| {
            let index = index as i32;
            (Position::new(index % width, index / width), glyph)
        })
    }

    /// Positions of one kind of glyph in reading order.
    pub fn positions_of<'a>(&'a self, glyph: &'a Glyph) -> impl Iterator<Item = Position> + 'a {
        self.glyphs()
            .filter(move |(_, candidate)| *candidate == glyph)
            .map(|(position, _)| position)
    }
}

/// Loader for map data from RON files.
pub struct MapLoader;

impl MapLoader {
    pub fn load(path: &Path) -> LoadResult<MapDefinition> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<MapDefinition> {
        let spec: MapSpec =
            ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse map RON: {}", e))?;

        let height = spec.rows.len();
        let width = spec.rows.first().map_or(0, |row| row.chars().count());
        if width == 0 {
            anyhow::bail!("Map '{}' is empty", spec.name);
        }

        let mut tiles = Vec::with_capacity(width * height);
        let mut spawns = Vec::new();
        for (y, row) in spec.rows.iter().enumerate() {
            if row.chars().count() != width {
                anyhow::bail!(
                    "Map '{}' row {} has {} tiles, expected {}",
                    spec.name,
                    y,
                    row.chars().count(),
                    width
                );
            }
            for (x, ch) in row.chars().enumerate() {
                let glyph = match ch {
                    '#' => Glyph::Wall,
                    '~' => Glyph::Water,
                    '.' => Glyph::Floor,
                    'P' => Glyph::Spawn,
                    'E' => Glyph::Enemy,
                    'N' => Glyph::Npc,
                    other => match spec.resources.get(&other) {
                        Some(item) => Glyph::Resource(item.clone()),
                        None => anyhow::bail!(
                            "Map '{}' has unknown tile '{}' at ({}, {})",
                            spec.name,
                            other,
                            x,
                            y
                        ),
                    },
                };
                if glyph == Glyph::Spawn {
                    spawns.push(Position::new(x as i32, y as i32));
                }
                tiles.push(glyph);
            }
        }

        let [spawn] = spawns.as_slice() else {
            anyhow::bail!(
                "Map '{}' needs exactly one spawn tile, found {}",
                spec.name,
                spawns.len()
            );
        };
        let npc_tiles = tiles.iter().filter(|glyph| **glyph == Glyph::Npc).count();
        if npc_tiles != spec.npcs.len() {
            anyhow::bail!(
                "Map '{}' has {} NPC tiles but names {} NPCs",
                spec.name,
                npc_tiles,
                spec.npcs.len()
            );
        }
        if spec.enemy_pool.is_empty() && tiles.contains(&Glyph::Enemy) {
            anyhow::bail!("Map '{}' has enemy tiles but an empty enemy pool", spec.name);
        }

        Ok(MapDefinition {
            name: spec.name,
            width: width as i32,
            height: height as i32,
            tiles,
            spawn: *spawn,
            enemy_pool: spec.enemy_pool,
            npcs: spec.npcs,
        })
    }
}
