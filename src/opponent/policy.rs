//! Opponent policies.

use std::cmp::Reverse;

use smallvec::SmallVec;

use crate::core::{Action, CardId, GameRng, GameState, Side};
use crate::rules::MatchingRule;

/// Candidate list; hands rarely hold more than a handful of legal plays.
pub type Candidates = SmallVec<[CardId; 8]>;

/// Policy for choosing the opponent's action.
pub trait OpponentPolicy: Send + Sync {
    /// Choose one action for the opponent's turn.
    ///
    /// Must return `Action::Draw` when no card in hand can be played.
    fn choose_action(&self, state: &GameState, rule: &dyn MatchingRule, rng: &mut GameRng) -> Action;

    /// Human-readable name, for logs.
    fn name(&self) -> &'static str;
}

/// Opponent hand cards that may be played now, in hand order.
///
/// On an empty pile every card in hand qualifies.
#[must_use]
pub fn legal_candidates(state: &GameState, rule: &dyn MatchingRule) -> Candidates {
    let hand = state.hand(Side::Opponent);
    let Some(top) = state.pile_top() else {
        return hand.iter().copied().collect();
    };

    hand.iter()
        .copied()
        .filter(|&id| state.card(id).is_some_and(|card| rule.matches(card, top)))
        .collect()
}

/// Pick the candidate whose color the opponent holds the most of.
///
/// Colors are counted over the whole hand, not just the candidates. On
/// equal counts the earlier candidate wins. Returns `None` only for an
/// empty candidate list.
#[must_use]
pub fn best_card(state: &GameState, candidates: &[CardId]) -> Option<CardId> {
    let mut counts = [0usize; 4];
    for &id in state.hand(Side::Opponent) {
        if let Some(card) = state.card(id) {
            counts[card.color.index()] += 1;
        }
    }

    candidates.iter().copied().min_by_key(|&id| {
        let count = state.card(id).map_or(0, |card| counts[card.color.index()]);
        Reverse(count)
    })
}

/// Plays toward the color it holds most of, keeping its hand balanced
/// towards one color for later turns.
#[derive(Clone, Debug, Default)]
pub struct ColorBalanceOpponent;

impl OpponentPolicy for ColorBalanceOpponent {
    fn choose_action(&self, state: &GameState, rule: &dyn MatchingRule, _rng: &mut GameRng) -> Action {
        let candidates = legal_candidates(state, rule);
        let choice = match candidates.len() {
            0 => None,
            1 => Some(candidates[0]),
            _ => best_card(state, &candidates),
        };
        choice.map_or(Action::Draw, Action::Play)
    }

    fn name(&self) -> &'static str {
        "color-balance"
    }
}

/// Uniform random opponent policy.
///
/// Selects uniformly from legal plays, drawing when there are none.
#[derive(Clone, Debug, Default)]
pub struct UniformOpponent;

impl OpponentPolicy for UniformOpponent {
    fn choose_action(&self, state: &GameState, rule: &dyn MatchingRule, rng: &mut GameRng) -> Action {
        let candidates = legal_candidates(state, rule);
        rng.choose(candidates.as_slice()).copied().map_or(Action::Draw, Action::Play)
    }

    fn name(&self) -> &'static str {
        "uniform"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Color, Rank};
    use crate::core::{EngineConfig, ZoneKind};
    use crate::rules::ColorOrRank;

    const HAND: ZoneKind = ZoneKind::Hand(Side::Opponent);

    fn state() -> GameState {
        GameState::new(EngineConfig::default(), 3)
    }

    fn choose(state: &GameState) -> Action {
        ColorBalanceOpponent.choose_action(state, &ColorOrRank, &mut GameRng::new(0))
    }

    #[test]
    fn test_empty_pile_plays_majority_color() {
        let mut state = state();
        let red = state.spawn_card(Color::Red, Rank::new(1), HAND);
        let blue = state.spawn_card(Color::Blue, Rank::new(2), HAND);
        let blue2 = state.spawn_card(Color::Blue, Rank::new(4), HAND);

        assert_eq!(choose(&state), Action::Play(blue));
        assert_eq!(legal_candidates(&state, &ColorOrRank).as_slice(), &[red, blue, blue2]);
    }

    #[test]
    fn test_single_candidate_played() {
        let mut state = state();
        state.spawn_card(Color::Blue, Rank::new(2), HAND);
        state.spawn_card(Color::Blue, Rank::new(4), HAND);
        let yellow = state.spawn_card(Color::Yellow, Rank::new(6), HAND);
        state.spawn_card(Color::Yellow, Rank::new(0), ZoneKind::Pile);

        assert_eq!(choose(&state), Action::Play(yellow));
    }

    #[test]
    fn test_no_candidate_draws() {
        let mut state = state();
        state.spawn_card(Color::Blue, Rank::new(2), HAND);
        state.spawn_card(Color::Red, Rank::new(0), ZoneKind::Pile);

        assert_eq!(choose(&state), Action::Draw);
    }

    #[test]
    fn test_empty_hand_draws() {
        let state = state();
        assert_eq!(choose(&state), Action::Draw);
        assert_eq!(
            UniformOpponent.choose_action(&state, &ColorOrRank, &mut GameRng::new(0)),
            Action::Draw
        );
    }

    #[test]
    fn test_best_card_counts_whole_hand() {
        let mut state = state();
        let red = state.spawn_card(Color::Red, Rank::new(3), HAND);
        let green = state.spawn_card(Color::Green, Rank::new(5), HAND);
        state.spawn_card(Color::Green, Rank::new(1), HAND);
        state.spawn_card(Color::Green, Rank::new(2), HAND);

        // Only red and the first green are candidates; green wins on count.
        assert_eq!(best_card(&state, &[red, green]), Some(green));
        assert_eq!(best_card(&state, &[]), None);
    }

    #[test]
    fn test_uniform_picks_legal_card() {
        let mut state = state();
        let red = state.spawn_card(Color::Red, Rank::new(3), HAND);
        state.spawn_card(Color::Blue, Rank::new(5), HAND);
        state.spawn_card(Color::Red, Rank::new(0), ZoneKind::Pile);

        let mut rng = GameRng::new(11);
        for _ in 0..20 {
            assert_eq!(UniformOpponent.choose_action(&state, &ColorOrRank, &mut rng), Action::Play(red));
        }
    }
}
