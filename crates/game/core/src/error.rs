//! Common error infrastructure for frontier-core.
//!
//! This module provides shared types and traits used across all error types in the crate.
//! Domain-specific errors (e.g., `SkillError`, `CraftError`) are defined in their
//! respective modules alongside the operations they validate.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each subsystem has its own error type with specific variants
//! - **User-facing Display**: `Display` output is the message shown in the game log
//! - **Classification**: Errors are categorized so callers know how to recover
//! - **No Control Flow by Panic**: Every rejected operation returns one of these

/// Classification of a rejected operation.
///
/// Every kind except [`ErrorKind::PersistenceCorrupt`] is recovered locally: the
/// message is logged for the player and the operation leaves state untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// An index or selection that does not address anything.
    ///
    /// Examples: skill index out of range, dialogue option out of range,
    /// navigating an empty list
    InvalidSelection,

    /// The operation is well-formed but cannot happen right now.
    ///
    /// Examples: insufficient mana, cooldown active, missing ingredients,
    /// item not in inventory, acting out of turn
    PreconditionNotMet,

    /// An identifier that no catalog knows about.
    ///
    /// Examples: unknown recipe, item, quest or enemy template id
    UnknownIdentifier,

    /// A persisted payload that cannot be read back.
    ///
    /// Surfaced to the caller, which decides between a fresh game and aborting.
    PersistenceCorrupt,
}

impl ErrorKind {
    /// Returns a human-readable description of this error kind.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidSelection => "invalid_selection",
            Self::PreconditionNotMet => "precondition_not_met",
            Self::UnknownIdentifier => "unknown_identifier",
            Self::PersistenceCorrupt => "persistence_corrupt",
        }
    }

    /// Returns true if the error is handled by logging and carrying on.
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::PersistenceCorrupt)
    }
}

/// Common trait for all frontier-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - The `Display` text is shown to the player verbatim
/// - Classify by how the caller recovers, not by impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the classification of this error.
    fn kind(&self) -> ErrorKind;

    /// Returns a static string identifier for this error variant.
    ///
    /// This is useful for log filtering and testing.
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
