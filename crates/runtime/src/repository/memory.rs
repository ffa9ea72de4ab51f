//! In-memory SaveRepository implementation for tests and local runs.

use std::sync::RwLock;

use frontier_core::SavePayload;

use crate::repository::{RepositoryError, Result, SaveRepository};

/// Keeps the payload as serialized JSON so loads go through the same
/// decoding path as the file repository.
#[derive(Default)]
pub struct InMemorySaveRepository {
    slot: RwLock<Option<String>>,
}

impl InMemorySaveRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with raw contents in the slot, valid or not.
    pub fn with_raw(contents: impl Into<String>) -> Self {
        Self {
            slot: RwLock::new(Some(contents.into())),
        }
    }
}

impl SaveRepository for InMemorySaveRepository {
    fn save(&self, payload: &SavePayload) -> Result<()> {
        let json = serde_json::to_string(payload)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        let mut slot = self.slot.write().map_err(|_| RepositoryError::LockPoisoned)?;
        *slot = Some(json);
        Ok(())
    }

    fn load(&self) -> Result<Option<SavePayload>> {
        let slot = self.slot.read().map_err(|_| RepositoryError::LockPoisoned)?;
        slot.as_deref()
            .map(|json| {
                serde_json::from_str(json).map_err(|e| RepositoryError::Corrupt(e.to_string()))
            })
            .transpose()
    }
}
