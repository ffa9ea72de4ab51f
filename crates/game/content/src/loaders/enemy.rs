//! Enemy catalog loader.

use std::path::Path;

use frontier_core::{EnemyTemplate, StatKind};

use crate::loaders::{LoadResult, ensure_unique_ids, read_file};

/// Loader for enemy templates from RON files.
///
/// RON format: `Vec<EnemyTemplate>`
pub struct EnemyLoader;

impl EnemyLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<EnemyTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<EnemyTemplate>> {
        let templates: Vec<EnemyTemplate> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy catalog RON: {}", e))?;

        ensure_unique_ids("enemy", templates.iter().map(|t| t.id.as_str()))?;
        for template in &templates {
            if template.stats.get(&StatKind::Health).is_some_and(|hp| *hp <= 0) {
                anyhow::bail!("Enemy '{}' must start with positive health", template.id);
            }
            if let Some(entry) = template.loot.iter().find(|entry| entry.chance > 100) {
                anyhow::bail!(
                    "Enemy '{}' has loot chance {}% for '{}'",
                    template.id,
                    entry.chance,
                    entry.item
                );
            }
        }
        Ok(templates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_templates_with_optional_loot() {
        let templates = EnemyLoader::parse(
            r#"[
                (
                    id: "slime",
                    name: "Forest Slime",
                    stats: {health: 30, attack: 8, defense: 1},
                    loot: [(item: "herb", chance: 60)],
                    experience: 25,
                ),
                (id: "bat", name: "Cave Bat", stats: {health: 12}, experience: 5),
            ]"#,
        )
        .unwrap();

        assert_eq!(templates[0].stats[&StatKind::Attack], 8);
        assert_eq!(templates[0].loot[0].chance, 60);
        assert!(templates[1].loot.is_empty());
    }

    #[test]
    fn rejects_impossible_loot_chance() {
        let err = EnemyLoader::parse(
            r#"[(id: "slime", name: "Slime", stats: {}, loot: [(item: "herb", chance: 160)], experience: 1)]"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("160%"));
    }
}
