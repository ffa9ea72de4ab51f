//! Game configuration loader.

use std::path::Path;

use frontier_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
///
/// Keys missing from the file keep their [`GameConfig::default`] values.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        let (messages, combat_log) = (config.message_capacity, config.combat_log_capacity);
        Ok(config
            .with_message_capacity(messages)
            .with_combat_log_capacity(combat_log))
    }
}
