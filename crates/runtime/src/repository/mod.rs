//! Repository layer for dynamic runtime data.
//!
//! Repositories handle data that CHANGES during gameplay: the save payload.
//! Static game content (items, enemies, quests, maps) is handled by oracles,
//! not repositories.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileSaveRepository;
pub use memory::InMemorySaveRepository;
pub use traits::SaveRepository;
