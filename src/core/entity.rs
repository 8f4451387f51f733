//! Card identity.
//!
//! Every physical card on the table has a unique `CardId`. Ids are
//! allocated monotonically by `GameState` and never reused, not even when
//! an exhausted deck is rebuilt from scratch.
//!
//! ## Usage
//!
//! ```
//! use uno_duel::core::CardId;
//!
//! let first = CardId::new(0);
//! let second = CardId::new(1);
//!
//! assert!(first < second);
//! assert_eq!(second.raw(), 1);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card.
///
/// Zones store ids; the card arena in `GameState` owns the `Card` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The id following this one in allocation order.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}
