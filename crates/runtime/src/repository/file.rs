//! File-based SaveRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use frontier_core::SavePayload;

use crate::repository::{RepositoryError, Result, SaveRepository};

/// Stores the payload as pretty-printed JSON at a fixed path.
///
/// Writes go to a sibling `*.tmp` file that is then renamed over the target.
pub struct FileSaveRepository {
    path: PathBuf,
}

impl FileSaveRepository {
    /// Creates the repository, creating the parent directory if needed.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(RepositoryError::Io)?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SaveRepository for FileSaveRepository {
    fn save(&self, payload: &SavePayload) -> Result<()> {
        let temp_path = self.temp_path();

        let json = serde_json::to_string_pretty(payload)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        fs::write(&temp_path, json).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &self.path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved game to {}", self.path.display());

        Ok(())
    }

    fn load(&self) -> Result<Option<SavePayload>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&self.path).map_err(RepositoryError::Io)?;
        let payload: SavePayload = serde_json::from_str(&json).map_err(|e| {
            RepositoryError::Corrupt(format!("{}: {}", self.path.display(), e))
        })?;

        tracing::debug!("Loaded game from {}", self.path.display());

        Ok(Some(payload))
    }
}
