//! Quest catalog loader.

use std::path::Path;

use frontier_core::{Quest, QuestGoal};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, ensure_unique_ids, read_file};

/// Quest entry as written in RON. Converted through [`Quest::builder`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct QuestSpec {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    goal: QuestGoal,
    target: String,
    required: u32,
    #[serde(default)]
    reward_experience: i32,
    #[serde(default)]
    reward_items: Vec<String>,
}

/// Loader for quest definitions from RON files.
///
/// RON format: `Vec<QuestSpec>`
pub struct QuestLoader;

impl QuestLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Quest>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<Quest>> {
        let specs: Vec<QuestSpec> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse quest catalog RON: {}", e))?;
        ensure_unique_ids("quest", specs.iter().map(|spec| spec.id.as_str()))?;

        specs
            .into_iter()
            .map(|spec| {
                let id = spec.id.clone();
                Quest::builder(spec.id, spec.name)
                    .description(spec.description)
                    .goal(spec.goal, spec.target, spec.required)
                    .reward_experience(spec.reward_experience)
                    .reward_items(spec.reward_items)
                    .build()
                    .map_err(|e| anyhow::anyhow!("Invalid quest '{}': {}", id, e))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_fresh_quests() {
        let quests = QuestLoader::parse(
            r#"[
                (
                    id: "slime_cull",
                    name: "Forest Cleaning",
                    goal: slay,
                    target: "slime",
                    required: 3,
                    reward_experience: 120,
                    reward_items: ["health_potion"],
                ),
                (id: "herbs", name: "Herbs", goal: gather, target: "herb", required: 2),
            ]"#,
        )
        .unwrap();

        assert_eq!(quests[0].goal(), QuestGoal::Slay);
        assert_eq!(quests[0].progress(), 0);
        assert_eq!(quests[0].reward_items(), ["health_potion".to_string()]);
        assert_eq!(quests[1].reward_experience(), 0);
    }

    #[test]
    fn zero_requirement_is_invalid() {
        let err = QuestLoader::parse(
            r#"[(id: "noop", name: "Noop", goal: slay, target: "slime", required: 0)]"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Invalid quest 'noop'"));
    }
}
