//! Repository contract for the single save slot.

use frontier_core::SavePayload;

use crate::repository::Result;

/// Durable storage for one [`SavePayload`].
///
/// `load` distinguishes "nothing saved yet" (`Ok(None)`) from a payload that
/// exists but cannot be read (`Err(RepositoryError::Corrupt)`).
///
/// [`RepositoryError::Corrupt`]: crate::repository::RepositoryError::Corrupt
pub trait SaveRepository: Send + Sync {
    /// Replaces the stored payload. Either the old or the new payload survives a crash.
    fn save(&self, payload: &SavePayload) -> Result<()>;

    fn load(&self) -> Result<Option<SavePayload>>;
}
