use crate::error::{ErrorKind, GameError};
use crate::inventory::InventoryError;
use crate::skill::SkillError;

/// Errors raised by player actions inside a combat session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    #[error("It is not your turn.")]
    NotPlayersTurn,

    #[error("The battle is already over.")]
    SessionOver,

    #[error(transparent)]
    Skill(#[from] SkillError),

    #[error(transparent)]
    Item(#[from] InventoryError),
}

impl GameError for CombatError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::NotPlayersTurn | Self::SessionOver => ErrorKind::PreconditionNotMet,
            Self::Skill(err) => err.kind(),
            Self::Item(err) => err.kind(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotPlayersTurn => "COMBAT_NOT_PLAYERS_TURN",
            Self::SessionOver => "COMBAT_SESSION_OVER",
            Self::Skill(err) => err.error_code(),
            Self::Item(err) => err.error_code(),
        }
    }
}
