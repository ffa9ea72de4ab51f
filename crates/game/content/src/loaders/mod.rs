//! Content loaders for reading game data from files.
//!
//! Every loader has a `load(path)` entry point for data directories and a
//! `parse(text)` entry point used for the catalogs embedded in the binary.

pub mod config;
pub mod enemy;
pub mod factory;
pub mod item;
pub mod map;
pub mod npc;
pub mod quest;
pub mod recipe;

pub use config::ConfigLoader;
pub use enemy::EnemyLoader;
pub use factory::{ContentBundle, ContentFactory, DEFAULT_MAP};
pub use item::ItemLoader;
pub use map::{Glyph, MapDefinition, MapLoader};
pub use npc::{NpcDefinition, NpcLoader};
pub use quest::QuestLoader;
pub use recipe::RecipeLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Fails on the first id that appears twice.
pub(crate) fn ensure_unique_ids<'a>(
    kind: &str,
    ids: impl IntoIterator<Item = &'a str>,
) -> LoadResult<()> {
    let mut seen = std::collections::BTreeSet::new();
    for id in ids {
        if !seen.insert(id) {
            anyhow::bail!("Duplicate {} id '{}'", kind, id);
        }
    }
    Ok(())
}
