//! The scripted opponent.
//!
//! ## Key Types
//!
//! - `OpponentPolicy`: Chooses the opponent's action for one turn
//! - `ColorBalanceOpponent`: Plays toward the color it holds most of
//! - `UniformOpponent`: Picks uniformly among legal plays
//!
//! Policies only decide. The orchestrator applies the chosen action and
//! hands the turn back to the human.

pub mod policy;

pub use policy::{best_card, legal_candidates, ColorBalanceOpponent, OpponentPolicy, UniformOpponent};
