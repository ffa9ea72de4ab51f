//! Oracle access errors.

use crate::error::{ErrorKind, GameError};

/// Errors that occur when accessing catalog data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    /// ItemOracle is not available in the environment.
    #[error("ItemOracle not available")]
    ItemsNotAvailable,

    /// EnemyOracle is not available in the environment.
    #[error("EnemyOracle not available")]
    EnemiesNotAvailable,

    /// QuestOracle is not available in the environment.
    #[error("QuestOracle not available")]
    QuestsNotAvailable,

    /// RecipeOracle is not available in the environment.
    #[error("RecipeOracle not available")]
    RecipesNotAvailable,

    /// RngOracle is not available in the environment.
    #[error("RngOracle not available")]
    RngNotAvailable,

    #[error("unknown item '{0}'")]
    UnknownItem(String),

    #[error("unknown enemy template '{0}'")]
    UnknownEnemy(String),

    #[error("unknown quest '{0}'")]
    UnknownQuest(String),
}

impl GameError for OracleError {
    fn kind(&self) -> ErrorKind {
        use OracleError::*;
        match self {
            // A missing oracle is a wiring mistake in the host; the operation
            // that needed it is simply not performed.
            ItemsNotAvailable | EnemiesNotAvailable | QuestsNotAvailable | RecipesNotAvailable
            | RngNotAvailable => ErrorKind::PreconditionNotMet,

            UnknownItem(_) | UnknownEnemy(_) | UnknownQuest(_) => ErrorKind::UnknownIdentifier,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            ItemsNotAvailable => "ORACLE_ITEMS_NOT_AVAILABLE",
            EnemiesNotAvailable => "ORACLE_ENEMIES_NOT_AVAILABLE",
            QuestsNotAvailable => "ORACLE_QUESTS_NOT_AVAILABLE",
            RecipesNotAvailable => "ORACLE_RECIPES_NOT_AVAILABLE",
            RngNotAvailable => "ORACLE_RNG_NOT_AVAILABLE",
            UnknownItem(_) => "ORACLE_UNKNOWN_ITEM",
            UnknownEnemy(_) => "ORACLE_UNKNOWN_ENEMY",
            UnknownQuest(_) => "ORACLE_UNKNOWN_QUEST",
        }
    }
}
