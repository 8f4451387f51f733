//! Turn sequencing and legality.
//!
//! The game alternates between the human and the opponent, one action per
//! turn. While it is the human's turn, the cards the human may activate are
//! recomputed every frame into the controller's playable set.
//!
//! ## Key Types
//!
//! - `TurnPhase`: Whose turn it is
//! - `TurnController`: Phase, turn counter, and the playable set
//! - `refresh_legality`: Recompute the playable set from the table

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::matching::MatchingRule;
use crate::core::{CardId, GameState, Side, ZoneKind};

/// Whose turn it is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    #[default]
    HumanTurn,
    OpponentTurn,
}

impl TurnPhase {
    /// The side that acts in this phase.
    #[must_use]
    pub const fn side(self) -> Side {
        match self {
            TurnPhase::HumanTurn => Side::Human,
            TurnPhase::OpponentTurn => Side::Opponent,
        }
    }
}

/// Turn state machine.
///
/// Starts in `HumanTurn` on turn 1. Each handoff back to the human starts
/// a new turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnController {
    phase: TurnPhase,
    turn_number: u32,
    playable: FxHashSet<CardId>,
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnController {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: TurnPhase::HumanTurn,
            turn_number: 1,
            playable: FxHashSet::default(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Turn number (starts at 1).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn active_side(&self) -> Side {
        self.phase.side()
    }

    /// True exactly when it is the human's turn.
    #[must_use]
    pub fn human_can_act(&self) -> bool {
        self.phase == TurnPhase::HumanTurn
    }

    /// Hand the turn to the opponent.
    ///
    /// Returns false, changing nothing, if it was not the human's turn.
    pub fn end_human_turn(&mut self) -> bool {
        if self.phase != TurnPhase::HumanTurn {
            return false;
        }
        self.phase = TurnPhase::OpponentTurn;
        self.playable.clear();
        debug!(turn = self.turn_number, "turn passes to opponent");
        true
    }

    /// Hand the turn back to the human.
    ///
    /// Returns false, changing nothing, if it was not the opponent's turn.
    pub fn end_opponent_turn(&mut self) -> bool {
        if self.phase != TurnPhase::OpponentTurn {
            return false;
        }
        self.phase = TurnPhase::HumanTurn;
        self.turn_number += 1;
        debug!(turn = self.turn_number, "turn passes to human");
        true
    }

    // === Legality ===

    #[must_use]
    pub fn is_playable(&self, card: CardId) -> bool {
        self.playable.contains(&card)
    }

    /// Replace the playable set.
    pub fn set_playable(&mut self, playable: FxHashSet<CardId>) {
        self.playable = playable;
    }

    /// Cards currently playable, in no particular order.
    pub fn playable_cards(&self) -> impl Iterator<Item = CardId> + '_ {
        self.playable.iter().copied()
    }

    #[must_use]
    pub fn playable_count(&self) -> usize {
        self.playable.len()
    }
}

/// Compute which cards the human may activate right now.
///
/// During the human's turn, a hand card is playable when it matches the
/// pile top (any card is, on an empty pile), and the deck top is playable
/// when no hand card is. Nothing is playable during the opponent's turn.
#[must_use]
pub fn playable_set(state: &GameState, rule: &dyn MatchingRule) -> FxHashSet<CardId> {
    let mut playable = FxHashSet::default();
    if !state.turn.human_can_act() {
        return playable;
    }

    let top = state.pile_top();
    for &id in state.hand(Side::Human) {
        let Some(card) = state.card(id) else {
            continue;
        };
        if top.map_or(true, |top| rule.matches(card, top)) {
            playable.insert(id);
        }
    }

    if playable.is_empty() {
        if let Some(deck_top) = state.top_of(ZoneKind::Deck) {
            playable.insert(deck_top);
        }
    }

    playable
}

/// Recompute the playable set in place.
pub fn refresh_legality(state: &mut GameState, rule: &dyn MatchingRule) {
    let playable = playable_set(state, rule);
    state.turn.set_playable(playable);
}
