//! Snapshot validation errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::Slot;

/// Errors raised while building or reading a snapshot.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    /// Two equipped items claim the same slot.
    #[error("slot {slot} is already occupied when equipping item {item}")]
    DuplicateSlot {
        /// The contested slot.
        slot: Slot,
        /// The item that could not be placed.
        item: String,
    },

    /// The snapshot does not contain a map for the character's level.
    #[error("no map reported for level {level}")]
    LevelNotFound {
        /// The level the character stands on.
        level: i32,
    },
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            StateError::DuplicateSlot { .. } => ErrorSeverity::Validation,
            // The server may omit the map for a tick while a level loads
            StateError::LevelNotFound { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            StateError::DuplicateSlot { .. } => "STATE_DUPLICATE_SLOT",
            StateError::LevelNotFound { .. } => "STATE_LEVEL_NOT_FOUND",
        }
    }
}
