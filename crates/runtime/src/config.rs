//! Runtime configuration.
use std::env;
use std::path::PathBuf;

use frontier_content::{ContentBundle, ContentFactory, DEFAULT_MAP};

use crate::error::Result;

/// Settings needed to assemble a [`GameSession`](crate::GameSession).
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Where the single save slot lives.
    pub save_path: PathBuf,
    /// Data directory to load content from; `None` uses the embedded data set.
    pub content_dir: Option<PathBuf>,
    pub map_name: String,
    /// Fixed seed for loot rolls and enemy placement; drawn at random when unset.
    pub game_seed: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            save_path: default_save_path(),
            content_dir: None,
            map_name: DEFAULT_MAP.to_string(),
            game_seed: None,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `FRONTIER_SAVE_PATH` - Save file (default: platform data dir `save.json`)
    /// - `FRONTIER_CONTENT_DIR` - Content data directory (default: embedded data)
    /// - `FRONTIER_MAP` - Map name inside the content directory (default: `frontier`)
    /// - `FRONTIER_GAME_SEED` - Fixed game seed (default: random)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = env::var("FRONTIER_SAVE_PATH") {
            config.save_path = PathBuf::from(path);
        }

        config.content_dir = env::var("FRONTIER_CONTENT_DIR").ok().map(PathBuf::from);

        if let Ok(map_name) = env::var("FRONTIER_MAP")
            && !map_name.trim().is_empty()
        {
            config.map_name = map_name.trim().to_string();
        }

        config.game_seed = read_env::<u64>("FRONTIER_GAME_SEED");

        config
    }

    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = path.into();
        self
    }

    pub fn with_game_seed(mut self, seed: u64) -> Self {
        self.game_seed = Some(seed);
        self
    }

    /// The configured seed, or a fresh random one.
    pub fn resolve_seed(&self) -> u64 {
        self.game_seed.unwrap_or_else(rand::random)
    }

    /// Loads the content bundle from the data directory, or the embedded one.
    pub fn load_content(&self) -> Result<ContentBundle> {
        let bundle = match &self.content_dir {
            Some(dir) => ContentFactory::new(dir).load_bundle(&self.map_name)?,
            None => ContentBundle::builtin()?,
        };
        Ok(bundle)
    }
}

/// `<platform data dir>/save.json`, or `./save_data/save.json` when the
/// platform directory cannot be determined.
pub fn default_save_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "frontier")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
        .join("save.json")
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_embedded_content() {
        let config = RuntimeConfig::default();
        assert!(config.content_dir.is_none());
        assert_eq!(config.map_name, "frontier");
        assert!(config.save_path.ends_with("save.json"));

        let bundle = config.load_content().unwrap();
        assert_eq!(bundle.map.name(), "Frontier");
    }

    #[test]
    fn fixed_seed_is_kept() {
        let config = RuntimeConfig::default().with_game_seed(7);
        assert_eq!(config.resolve_seed(), 7);
    }

    #[test]
    fn missing_content_dir_is_an_error() {
        let config = RuntimeConfig {
            content_dir: Some(PathBuf::from("/definitely/not/here")),
            ..RuntimeConfig::default()
        };
        assert!(config.load_content().is_err());
    }
}
