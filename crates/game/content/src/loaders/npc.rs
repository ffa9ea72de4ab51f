//! NPC catalog loader.
//!
//! NPCs are placed on the map by the `N` tiles of a map, in reading order,
//! using the ids listed by the map definition.

use std::path::Path;

use frontier_core::{DialogueNode, DialogueTree, Npc, Position};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, ensure_unique_ids, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct NpcSpec {
    id: String,
    name: String,
    #[serde(default)]
    quest: Option<String>,
    dialogue: Vec<DialogueNode>,
}

/// Validated NPC catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NpcDefinition {
    pub id: String,
    pub name: String,
    pub quest: Option<String>,
    pub dialogue: DialogueTree,
}

impl NpcDefinition {
    /// Creates a fresh NPC standing on `position`.
    pub fn spawn(&self, position: Position) -> Npc {
        Npc::new(
            self.name.clone(),
            position,
            self.dialogue.clone(),
            self.quest.clone(),
        )
    }
}

/// Loader for NPC definitions from RON files.
pub struct NpcLoader;

impl NpcLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<NpcDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<NpcDefinition>> {
        let specs: Vec<NpcSpec> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse NPC catalog RON: {}", e))?;
        ensure_unique_ids("npc", specs.iter().map(|spec| spec.id.as_str()))?;

        specs
            .into_iter()
            .map(|spec| {
                let dialogue = DialogueTree::new(spec.dialogue)
                    .map_err(|e| anyhow::anyhow!("Invalid dialogue for NPC '{}': {}", spec.id, e))?;
                Ok(NpcDefinition {
                    id: spec.id,
                    name: spec.name,
                    quest: spec.quest,
                    dialogue,
                })
            })
            .collect()
    }
}
