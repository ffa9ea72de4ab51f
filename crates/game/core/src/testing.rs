//! Fixtures shared by the unit tests of this crate.

use std::collections::{BTreeMap, BTreeSet};

use crate::actor::{Enemy, EnemyTemplate, LootEntry, Npc, Player};
use crate::config::GameConfig;
use crate::crafting::{Ingredient, Recipe};
use crate::dialogue::{DialogueAction, DialogueNode, DialogueOption, DialogueTree};
use crate::env::{EnemyOracle, GameEnv, ItemOracle, PcgRng, QuestOracle, RecipeOracle};
use crate::geometry::{Position, Rect};
use crate::item::{Item, Rarity};
use crate::quest::{Quest, QuestGoal};
use crate::save::{EnemyRecord, ResourceRecord, WorldRecord};
use crate::stats::StatKind;
use crate::world::{EnemyHandle, NpcHandle, World};

pub(crate) struct TestItems;

impl ItemOracle for TestItems {
    fn create(&self, item_id: &str) -> Option<Item> {
        Some(match item_id {
            "health_potion" => Item::consumable("health_potion", "Health Potion", "", 35, 0),
            "mana_potion" => Item::consumable("mana_potion", "Mana Potion", "", 0, 25),
            "herb" => Item::resource("herb", "Herb", "", Rarity::Common),
            "iron_ore" => Item::resource("iron_ore", "Iron Ore", "", Rarity::Uncommon),
            _ => return None,
        })
    }
}

pub(crate) fn enemy_template(id: &str) -> Option<EnemyTemplate> {
    let (name, health, attack, defense, resistance, loot, experience) = match id {
        "slime" => ("Forest Slime", 30, 8, 1, 0, vec![LootEntry::new("herb", 100)], 25),
        "goblin" => ("Goblin Scout", 45, 12, 3, 1, vec![LootEntry::new("iron_ore", 35)], 40),
        "wolf" => ("Dire Wolf", 55, 15, 4, 2, vec![LootEntry::new("herb", 20)], 50),
        _ => return None,
    };
    Some(EnemyTemplate {
        id: id.to_string(),
        name: name.to_string(),
        stats: BTreeMap::from([
            (StatKind::Health, health),
            (StatKind::Attack, attack),
            (StatKind::Defense, defense),
            (StatKind::Resistance, resistance),
        ]),
        loot,
        experience,
    })
}

pub(crate) fn enemy(id: &str) -> Enemy {
    let template = enemy_template(id).expect("fixture enemy");
    Enemy::from_template(&template, Position::new(5, 5))
}

pub(crate) fn player() -> Player {
    Player::fresh(Position::new(1, 1), &GameConfig::default(), &TestItems)
}

pub(crate) struct TestEnemies {
    templates: Vec<EnemyTemplate>,
}

impl TestEnemies {
    pub(crate) fn new() -> Self {
        Self {
            templates: ["slime", "goblin", "wolf"]
                .into_iter()
                .filter_map(enemy_template)
                .collect(),
        }
    }
}

impl EnemyOracle for TestEnemies {
    fn template(&self, template_id: &str) -> Option<&EnemyTemplate> {
        self.templates.iter().find(|template| template.id == template_id)
    }

    fn template_ids(&self) -> Vec<&str> {
        self.templates.iter().map(|template| template.id.as_str()).collect()
    }
}

pub(crate) struct TestQuests;

impl QuestOracle for TestQuests {
    fn quest(&self, quest_id: &str) -> Option<Quest> {
        let builder = match quest_id {
            "slime_cull" => Quest::builder("slime_cull", "Forest Cleaning")
                .goal(QuestGoal::Slay, "slime", 3)
                .reward_experience(120)
                .reward_item("health_potion"),
            "herb_gathering" => Quest::builder("herb_gathering", "Herbal Remedy")
                .goal(QuestGoal::Gather, "herb", 2)
                .reward_experience(60)
                .reward_item("mana_potion"),
            _ => return None,
        };
        builder.build().ok()
    }
}

pub(crate) struct TestRecipes {
    recipes: Vec<Recipe>,
}

impl TestRecipes {
    pub(crate) fn new() -> Self {
        Self {
            recipes: vec![
                Recipe::new("health_potion", vec![Ingredient::new("herb", 3)]),
                Recipe::new(
                    "mana_potion",
                    vec![Ingredient::new("herb", 2), Ingredient::new("iron_ore", 1)],
                ),
            ],
        }
    }
}

impl RecipeOracle for TestRecipes {
    fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }
}

/// Owns one of every oracle so tests can borrow a [`GameEnv`].
pub(crate) struct TestOracles {
    items: TestItems,
    enemies: TestEnemies,
    quests: TestQuests,
    recipes: TestRecipes,
    rng: PcgRng,
}

impl TestOracles {
    pub(crate) fn new() -> Self {
        Self {
            items: TestItems,
            enemies: TestEnemies::new(),
            quests: TestQuests,
            recipes: TestRecipes::new(),
            rng: PcgRng,
        }
    }

    pub(crate) fn env(&self) -> GameEnv<'_> {
        GameEnv::with_all(
            &self.items,
            &self.enemies,
            &self.quests,
            &self.recipes,
            &self.rng,
        )
    }
}

pub(crate) fn elder_dialogue() -> DialogueTree {
    DialogueTree::new(vec![
        DialogueNode::new(
            "Greetings, traveler! Monsters have been troubling our forest.",
            vec![
                DialogueOption::new("I will help.", Some(1))
                    .with_action(DialogueAction::AcceptQuest("slime_cull".into())),
                DialogueOption::new("I cannot right now.", Some(2)),
            ],
        ),
        DialogueNode::new(
            "Thank you! Defeat three forest slimes to keep us safe.",
            vec![DialogueOption::new("I will return soon.", None)],
        ),
        DialogueNode::new(
            "Stay safe on the road.",
            vec![DialogueOption::new("Farewell.", None)],
        ),
    ])
    .expect("fixture dialogue")
}

/// Open field with optional walls; handles are indices into the entity lists.
pub(crate) struct TestWorld {
    pub spawn: Position,
    pub size: (i32, i32),
    pub walls: BTreeSet<Position>,
    pub enemies: Vec<Enemy>,
    pub npcs: Vec<Npc>,
    pub resources: BTreeMap<Position, String>,
}

impl TestWorld {
    pub(crate) fn new() -> Self {
        Self {
            spawn: Position::new(1, 1),
            size: (12, 12),
            walls: BTreeSet::new(),
            enemies: Vec::new(),
            npcs: Vec::new(),
            resources: BTreeMap::new(),
        }
    }

    pub(crate) fn with_enemy(mut self, id: &str, position: Position) -> Self {
        let template = enemy_template(id).expect("fixture enemy");
        self.enemies.push(Enemy::from_template(&template, position));
        self
    }

    pub(crate) fn with_elder(mut self, position: Position) -> Self {
        self.npcs.push(Npc::new(
            "Elder Rowan",
            position,
            elder_dialogue(),
            Some("slime_cull".into()),
        ));
        self
    }

    pub(crate) fn with_resource(mut self, item: &str, position: Position) -> Self {
        self.resources.insert(position, item.to_string());
        self
    }
}

impl World for TestWorld {
    fn spawn_point(&self) -> Position {
        self.spawn
    }

    fn is_walkable(&self, area: Rect) -> bool {
        let p = area.origin;
        p.x >= 0 && p.y >= 0 && p.x < self.size.0 && p.y < self.size.1 && !self.walls.contains(&p)
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
        let item_id = self.resources.remove(&area.origin)?;
        items.create(&item_id)
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
        self.enemies.clear();
        let Ok(templates) = env.enemies() else {
            return record.enemies.iter().map(|entry| entry.id.clone()).collect();
        };
        for entry in &record.enemies {
            match templates.template(&entry.id) {
                Some(template) => {
                    let mut enemy = Enemy::from_template(template, entry.position);
                    if let Some(health) = entry.health {
                        enemy.set_health(health);
                    }
                    self.enemies.push(enemy);
                }
                None => skipped.push(entry.id.clone()),
            }
        }
        self.resources = record
            .resources
            .iter()
            .map(|entry| (entry.position, entry.item.clone()))
            .collect();
        skipped
    }
}
