//! Error types for the engine.
//!
//! Gameplay policy outcomes (an ignored click, a dropped draw into a full
//! hand, an empty deck being rebuilt) are not errors. These variants cover
//! caller mistakes only.

use thiserror::Error;

use crate::core::CardId;

/// Engine errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The id does not name any card on the table.
    #[error("unknown card: {0}")]
    UnknownCard(CardId),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
