//! Content factory for building catalogs from data files.

use std::path::{Path, PathBuf};

use frontier_core::{EnemyTemplate, GameConfig, Item, Quest, Recipe};

use crate::loaders::{
    ConfigLoader, EnemyLoader, ItemLoader, LoadResult, MapDefinition, MapLoader, NpcDefinition,
    NpcLoader, QuestLoader, RecipeLoader,
};

/// Map loaded when no other map is requested.
pub const DEFAULT_MAP: &str = "frontier";

const BUILTIN_CONFIG: &str = include_str!("../../data/config.toml");
const BUILTIN_ITEMS: &str = include_str!("../../data/items.ron");
const BUILTIN_ENEMIES: &str = include_str!("../../data/enemies.ron");
const BUILTIN_QUESTS: &str = include_str!("../../data/quests.ron");
const BUILTIN_RECIPES: &str = include_str!("../../data/recipes.ron");
const BUILTIN_NPCS: &str = include_str!("../../data/npcs.ron");
const BUILTIN_MAP: &str = include_str!("../../data/maps/frontier.ron");

/// Every catalog the game needs, loaded and cross-checked.
#[derive(Clone, Debug)]
pub struct ContentBundle {
    pub config: GameConfig,
    pub items: Vec<Item>,
    pub enemies: Vec<EnemyTemplate>,
    pub quests: Vec<Quest>,
    pub recipes: Vec<Recipe>,
    pub npcs: Vec<NpcDefinition>,
    pub map: MapDefinition,
}

impl ContentBundle {
    /// The data set compiled into the binary.
    pub fn builtin() -> LoadResult<Self> {
        let bundle = Self {
            config: ConfigLoader::parse(BUILTIN_CONFIG)?,
            items: ItemLoader::parse(BUILTIN_ITEMS)?,
            enemies: EnemyLoader::parse(BUILTIN_ENEMIES)?,
            quests: QuestLoader::parse(BUILTIN_QUESTS)?,
            recipes: RecipeLoader::parse(BUILTIN_RECIPES)?,
            npcs: NpcLoader::parse(BUILTIN_NPCS)?,
            map: MapLoader::parse(BUILTIN_MAP)?,
        };
        bundle.validate()?;
        Ok(bundle)
    }

    /// Checks that every id one catalog uses is defined by another.
    pub fn validate(&self) -> LoadResult<()> {
        let has_item = |id: &str| self.items.iter().any(|item| item.id() == id);
        let has_quest = |id: &str| self.quests.iter().any(|quest| quest.id() == id);

        for template in &self.enemies {
            if let Some(entry) = template.loot.iter().find(|entry| !has_item(entry.item.as_str())) {
                anyhow::bail!("Enemy '{}' drops unknown item '{}'", template.id, entry.item);
            }
        }
        for quest in &self.quests {
            if let Some(item) = quest.reward_items().iter().find(|item| !has_item(item.as_str())) {
                anyhow::bail!("Quest '{}' rewards unknown item '{}'", quest.id(), item);
            }
        }
        for recipe in &self.recipes {
            if !has_item(recipe.output()) {
                anyhow::bail!("Recipe produces unknown item '{}'", recipe.output());
            }
            if let Some(ingredient) = recipe.ingredients().iter().find(|i| !has_item(i.item.as_str())) {
                anyhow::bail!(
                    "Recipe '{}' needs unknown item '{}'",
                    recipe.id(),
                    ingredient.item
                );
            }
        }
        for npc in &self.npcs {
            if let Some(quest) = npc.quest.as_deref()
                && !has_quest(quest)
            {
                anyhow::bail!("NPC '{}' offers unknown quest '{}'", npc.id, quest);
            }
        }
        for enemy in self.map.enemy_pool() {
            if !self.enemies.iter().any(|template| &template.id == enemy) {
                anyhow::bail!("Map '{}' spawns unknown enemy '{}'", self.map.name(), enemy);
            }
        }
        for npc in self.map.npc_ids() {
            if self.npc(npc).is_none() {
                anyhow::bail!("Map '{}' places unknown NPC '{}'", self.map.name(), npc);
            }
        }
        Ok(())
    }

    pub fn npc(&self, npc_id: &str) -> Option<&NpcDefinition> {
        self.npcs.iter().find(|npc| npc.id == npc_id)
    }
}

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── items.ron
/// ├── enemies.ron
/// ├── quests.ron
/// ├── recipes.ron
/// ├── npcs.ron
/// └── maps/
///     └── frontier.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<Item>> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load enemy templates from `enemies.ron`.
    pub fn load_enemies(&self) -> LoadResult<Vec<EnemyTemplate>> {
        EnemyLoader::load(&self.data_dir.join("enemies.ron"))
    }

    /// Load quest definitions from `quests.ron`.
    pub fn load_quests(&self) -> LoadResult<Vec<Quest>> {
        QuestLoader::load(&self.data_dir.join("quests.ron"))
    }

    /// Load the recipe book from `recipes.ron`.
    pub fn load_recipes(&self) -> LoadResult<Vec<Recipe>> {
        RecipeLoader::load(&self.data_dir.join("recipes.ron"))
    }

    /// Load NPC definitions from `npcs.ron`.
    pub fn load_npcs(&self) -> LoadResult<Vec<NpcDefinition>> {
        NpcLoader::load(&self.data_dir.join("npcs.ron"))
    }

    /// Load a map from `maps/{map_name}.ron`.
    pub fn load_map(&self, map_name: &str) -> LoadResult<MapDefinition> {
        let path = self.data_dir.join("maps").join(format!("{}.ron", map_name));
        MapLoader::load(&path)
    }

    /// Loads every catalog and cross-checks the ids between them.
    pub fn load_bundle(&self, map_name: &str) -> LoadResult<ContentBundle> {
        let bundle = ContentBundle {
            config: self.load_config()?,
            items: self.load_items()?,
            enemies: self.load_enemies()?,
            quests: self.load_quests()?,
            recipes: self.load_recipes()?,
            npcs: self.load_npcs()?,
            map: self.load_map(map_name)?,
        };
        bundle.validate()?;
        tracing::info!(
            "Loaded content from {} (map '{}')",
            self.data_dir.display(),
            bundle.map.name()
        );
        Ok(bundle)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn builtin_content_is_consistent() {
        let bundle = ContentBundle::builtin().unwrap();
        assert_eq!(bundle.map.name(), "Frontier");
        assert_eq!(bundle.map.npc_ids().len(), 2);
        assert!(bundle.quests.iter().any(|quest| quest.id() == "slime_cull"));
        assert!(bundle.npc("elder_rowan").is_some());
    }

    #[test]
    fn missing_directory_reports_path() {
        let factory = ContentFactory::new("/nonexistent/frontier-data");
        let err = factory.load_items().unwrap_err();
        assert!(err.to_string().contains("/nonexistent/frontier-data/items.ron"));
    }

    #[test]
    fn dangling_references_fail_validation() {
        let mut bundle = ContentBundle::builtin().unwrap();
        bundle.items.retain(|item| item.id() != "herb");
        let err = bundle.validate().unwrap_err();
        assert!(err.to_string().contains("unknown item 'herb'"));
    }

    #[test]
    fn load_bundle_reads_a_data_directory() {
        let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        let bundle = ContentFactory::new(data_dir).load_bundle(DEFAULT_MAP).unwrap();
        assert_eq!(bundle.items.len(), ContentBundle::builtin().unwrap().items.len());
    }
}
