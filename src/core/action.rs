//! Turn actions and their history records.
//!
//! A turn consists of exactly one action: play a matching card onto the
//! pile, or draw from the deck when nothing matches.

use serde::{Deserialize, Serialize};

use super::entity::CardId;
use super::player::Side;

/// A complete turn action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move the card from the acting side's hand onto the pile.
    Play(CardId),
    /// Take one card from the top of the deck.
    Draw,
}

impl Action {
    /// The card being played, if any.
    #[must_use]
    pub fn played_card(&self) -> Option<CardId> {
        match self {
            Action::Play(card) => Some(*card),
            Action::Draw => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Play(card) => write!(f, "play {}", card),
            Action::Draw => write!(f, "draw"),
        }
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The side that acted.
    pub side: Side,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action was taken.
    pub turn: u32,

    /// Global sequence number (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(side: Side, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            side,
            action,
            turn,
            sequence,
        }
    }
}
