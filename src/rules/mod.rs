//! Game rules: card matching and turn sequencing.
//!
//! - `MatchingRule`: Which card may go on top of which
//! - `TurnController`: Whose turn it is and what the human may activate
//!
//! Both the turn controller and the opponent consult the same
//! `MatchingRule`, so they never disagree about legality.

pub mod matching;
pub mod turn;

pub use matching::{matches, ColorOrRank, MatchingRule};
pub use turn::{playable_set, refresh_legality, TurnController, TurnPhase};
